//! List Pair
//!
//! The two item lists and the saved snapshot of the right list.
//! All commands are synchronous and never fail; invalid requests are no-ops.

use crate::id_gen::IdGenerator;
use crate::models::{Item, ItemId, ListId, Position};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListPair {
    left: Vec<Item>,
    right: Vec<Item>,
    /// None until the first save
    snapshot: Option<Vec<Item>>,
}

impl ListPair {
    /// Create both lists from seed labels, left first, drawing ids from `ids`
    pub fn seeded<S: AsRef<str>>(ids: &mut IdGenerator, left: &[S], right: &[S]) -> Self {
        let mut make = |labels: &[S]| -> Vec<Item> {
            labels
                .iter()
                .map(|label| Item::new(ids.next_id(), label.as_ref()))
                .collect()
        };
        let left = make(left);
        let right = make(right);
        Self {
            left,
            right,
            snapshot: None,
        }
    }

    pub fn items(&self, list: ListId) -> &[Item] {
        match list {
            ListId::Left => &self.left,
            ListId::Right => &self.right,
        }
    }

    fn items_mut(&mut self, list: ListId) -> &mut Vec<Item> {
        match list {
            ListId::Left => &mut self.left,
            ListId::Right => &mut self.right,
        }
    }

    pub fn item(&self, list: ListId, id: ItemId) -> Option<&Item> {
        self.items(list).iter().find(|item| item.id() == id)
    }

    /// Total items across both lists
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Rows captured by the last save
    pub fn snapshot(&self) -> Option<&[Item]> {
        self.snapshot.as_deref()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Apply a finished drag: no destination means nothing happens
    pub fn apply_drag(&mut self, source: Position, destination: Option<Position>) -> Option<ItemId> {
        match destination {
            Some(destination) => self.move_item(source, destination),
            None => {
                log::debug!("[DND] Drop outside any list from {}#{}, ignored", source.list, source.index);
                None
            }
        }
    }

    /// Move one item; `to.index` counts positions after the item was removed.
    ///
    /// Returns the moved item's id, or None if `from` names no item.
    pub fn move_item(&mut self, from: Position, to: Position) -> Option<ItemId> {
        let source = self.items_mut(from.list);
        if from.index >= source.len() {
            log::warn!(
                "[DND] No item at {}#{} (len {}), move ignored",
                from.list,
                from.index,
                source.len()
            );
            return None;
        }
        let item = source.remove(from.index);
        let id = item.id();

        let dest = self.items_mut(to.list);
        let index = to.index.min(dest.len());
        dest.insert(index, item);

        log::debug!(
            "[DND] Moved item {} from {}#{} to {}#{}",
            id,
            from.list,
            from.index,
            to.list,
            index
        );
        Some(id)
    }

    /// Replace the value of item `id` in `list`; false if it is not there
    pub fn update_value(&mut self, list: ListId, id: ItemId, value: impl Into<String>) -> bool {
        match self.items_mut(list).iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.set_value(value.into());
                true
            }
            None => {
                log::debug!("Item {} not in {} list, value update ignored", id, list);
                false
            }
        }
    }

    /// Capture the right list, replacing any earlier snapshot
    pub fn save(&mut self) -> usize {
        let rows = self.right.clone();
        let count = rows.len();
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&rows) {
                Ok(json) => log::debug!("[SAVE] {}", json),
                Err(err) => log::warn!("[SAVE] Could not serialize snapshot: {}", err),
            }
        }
        self.snapshot = Some(rows);
        log::info!("[SAVE] Saved {} rows", count);
        count
    }
}
