//! Item Id Generator
//!
//! Explicit monotonic counter, owned by whoever seeds the lists.

use crate::models::ItemId;

/// Hands out ids 1, 2, 3, ... and never repeats one
#[derive(Debug)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
