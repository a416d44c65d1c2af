//! Frontend Models
//!
//! Items and the two lists they live in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item identifier, unique for the lifetime of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two on-screen lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListId {
    Left,
    Right,
}

impl ListId {
    pub const ALL: [ListId; 2] = [ListId::Left, ListId::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListId::Left => "left",
            ListId::Right => "right",
        }
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled item with an editable value
///
/// `id` and `text` are fixed at creation; only `value` can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    text: String,
    value: String,
}

impl Item {
    /// Create an item with an empty value
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            value: String::new(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// A position inside one of the lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub list: ListId,
    pub index: usize,
}

impl Position {
    pub fn new(list: ListId, index: usize) -> Self {
        Self { list, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_starts_with_empty_value() {
        let item = Item::new(ItemId(1), "Item 1");
        assert_eq!(item.id(), ItemId(1));
        assert_eq!(item.text(), "Item 1");
        assert_eq!(item.value(), "");
    }

    #[test]
    fn test_list_id_serialization() {
        assert_eq!(ListId::Left.to_string(), "left");
        assert_eq!(serde_json::to_string(&ListId::Right).unwrap(), "\"right\"");
        assert_eq!(serde_json::from_str::<ListId>("\"left\"").unwrap(), ListId::Left);
    }

    #[test]
    fn test_item_serializes_flat_id() {
        let mut item = Item::new(ItemId(4), "Item 4");
        item.set_value("d".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 4, "text": "Item 4", "value": "d" }));
    }
}
