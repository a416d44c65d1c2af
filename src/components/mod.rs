//! UI Components
//!
//! Reusable Leptos components.

mod drop_slot;
mod item_row;
mod list_column;
mod snapshot_table;

pub use drop_slot::DropSlot;
pub use item_row::ItemRow;
pub use list_column::ListColumn;
pub use snapshot_table::SnapshotTable;
