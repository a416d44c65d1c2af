//! Global Application State Store
//!
//! Uses Leptos reactive_stores; UI events go through the helpers below.

use leptos::prelude::*;
use leptos_dragdrop::{DragOutcome, Slot};
use reactive_stores::Store;

use crate::list_pair::ListPair;
use crate::models::{ItemId, ListId, Position};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Both lists and the saved snapshot
    pub lists: ListPair,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn position(slot: Slot<ListId>) -> Position {
    Position::new(slot.zone, slot.index)
}

/// Convert a finished gesture into (source, destination).
///
/// Slots are numbered before the dragged item is removed, while the list
/// pair counts the destination after removal, so a drop further down the
/// same list shifts up by one.
pub fn gesture_positions(outcome: DragOutcome<ListId>) -> (Position, Option<Position>) {
    let source = outcome.source;
    let destination = outcome.destination.map(|slot| {
        if slot.zone == source.zone && slot.index > source.index {
            Position::new(slot.zone, slot.index - 1)
        } else {
            position(slot)
        }
    });
    (position(source), destination)
}

// ========================
// Store Helper Functions
// ========================

/// Apply a drag result to the lists
pub fn store_apply_drag(store: &AppStore, outcome: DragOutcome<ListId>) -> Option<ItemId> {
    let (source, destination) = gesture_positions(outcome);
    store.lists().write().apply_drag(source, destination)
}

/// Set an item's value from its text input
pub fn store_update_value(store: &AppStore, list: ListId, id: ItemId, value: String) -> bool {
    store.lists().write().update_value(list, id, value)
}

/// Snapshot the right list
pub fn store_save(store: &AppStore) -> usize {
    store.lists().write().save()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_gen::IdGenerator;

    #[test]
    fn test_gesture_without_destination() {
        let outcome = DragOutcome {
            source: Slot::new(ListId::Right, 2),
            destination: None,
        };
        assert_eq!(gesture_positions(outcome), (Position::new(ListId::Right, 2), None));
    }

    #[test]
    fn test_gesture_across_lists() {
        let outcome = DragOutcome {
            source: Slot::new(ListId::Left, 1),
            destination: Some(Slot::new(ListId::Right, 0)),
        };
        let (source, destination) = gesture_positions(outcome);
        assert_eq!(source, Position::new(ListId::Left, 1));
        assert_eq!(destination, Some(Position::new(ListId::Right, 0)));
    }

    #[test]
    fn test_drop_lower_in_same_list_lands_before_hovered_row() {
        let mut ids = IdGenerator::new();
        let mut lists = ListPair::seeded(&mut ids, &["A", "B", "C"], &["D"]);

        // A dropped on C's row goes between B and C
        let (source, destination) = gesture_positions(DragOutcome {
            source: Slot::new(ListId::Left, 0),
            destination: Some(Slot::new(ListId::Left, 2)),
        });
        assert_eq!(destination, Some(Position::new(ListId::Left, 1)));
        lists.apply_drag(source, destination);
        let order: Vec<_> = lists.items(ListId::Left).iter().map(|item| item.text()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_drop_on_next_row_or_self_keeps_order() {
        for target in [0, 1] {
            let (source, destination) = gesture_positions(DragOutcome {
                source: Slot::new(ListId::Right, 0),
                destination: Some(Slot::new(ListId::Right, target)),
            });
            assert_eq!(destination, Some(source));
        }
    }

    #[test]
    fn test_trailing_slot_in_same_list_appends() {
        let mut ids = IdGenerator::new();
        let mut lists = ListPair::seeded(&mut ids, &["A", "B", "C"], &["D"]);
        let (source, destination) = gesture_positions(DragOutcome {
            source: Slot::new(ListId::Left, 0),
            destination: Some(Slot::new(ListId::Left, 3)),
        });
        lists.apply_drag(source, destination);
        let order: Vec<_> = lists.items(ListId::Left).iter().map(|item| item.text()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_drop_higher_in_same_list_is_unchanged() {
        let (_, destination) = gesture_positions(DragOutcome {
            source: Slot::new(ListId::Left, 2),
            destination: Some(Slot::new(ListId::Left, 0)),
        });
        assert_eq!(destination, Some(Position::new(ListId::Left, 0)));
    }
}
