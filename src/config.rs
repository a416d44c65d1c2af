//! App Configuration
//!
//! Optional JSON embedded in the host page:
//!
//! ```html
//! <script id="dnd-lists-config" type="application/json">
//!   { "title": "Pick items", "right": { "seed": ["A", "B"] } }
//! </script>
//! ```
//!
//! Every field falls back to its default, so partial configs are fine.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::ListId;

/// Id of the `<script>` element holding the config JSON
pub const CONFIG_ELEMENT_ID: &str = "dnd-lists-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct AppConfig {
    pub title: String,
    pub left: ListConfig,
    pub right: ListConfig,
    pub table_heading: String,
    /// One of off/error/warn/info/debug/trace
    pub log_level: String,
}

/// Heading and seed labels for one list
#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    pub heading: String,
    pub seed: Vec<String>,
}

/// Config as written in the page; anything missing takes its default
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    title: Option<String>,
    left: RawListConfig,
    right: RawListConfig,
    table_heading: Option<String>,
    log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawListConfig {
    heading: Option<String>,
    seed: Option<Vec<String>>,
}

impl RawListConfig {
    fn resolve(self, list: ListId) -> ListConfig {
        let defaults = ListConfig::default_for(list);
        ListConfig {
            heading: self.heading.unwrap_or(defaults.heading),
            seed: self.seed.unwrap_or(defaults.seed),
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            title: raw.title.unwrap_or(defaults.title),
            left: raw.left.resolve(ListId::Left),
            right: raw.right.resolve(ListId::Right),
            table_heading: raw.table_heading.unwrap_or(defaults.table_heading),
            log_level: raw.log_level.unwrap_or(defaults.log_level),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Drag and Drop".to_string(),
            left: ListConfig::default_for(ListId::Left),
            right: ListConfig::default_for(ListId::Right),
            table_heading: "Table".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ListConfig {
    /// Three "Item N" labels per list, numbered left to right
    pub fn default_for(list: ListId) -> Self {
        let (heading, first) = match list {
            ListId::Left => ("Left Drop Zone", 1),
            ListId::Right => ("Right Drop Zone", 4),
        };
        Self {
            heading: heading.to_string(),
            seed: (first..first + 3).map(|n| format!("Item {}", n)).collect(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn list(&self, list: ListId) -> &ListConfig {
        match list {
            ListId::Left => &self.left,
            ListId::Right => &self.right,
        }
    }

    pub fn level_filter(&self) -> AppResult<log::LevelFilter> {
        log::LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| AppError::LogLevel(self.log_level.clone()))
    }

    /// Read config from the page, falling back to defaults.
    ///
    /// Returns the config plus the error that forced a fallback, if any,
    /// so it can be logged once the logger is up.
    pub fn load() -> (Self, Option<AppError>) {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
            _ => (Self::default(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_matches_item_numbers() {
        let config = AppConfig::default();
        assert_eq!(config.left.seed, vec!["Item 1", "Item 2", "Item 3"]);
        assert_eq!(config.right.seed, vec!["Item 4", "Item 5", "Item 6"]);
        assert_eq!(config.list(ListId::Right).heading, "Right Drop Zone");
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = AppConfig::from_json(
            r#"{ "title": "Pick", "right": { "heading": "Chosen" }, "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(config.title, "Pick");
        assert_eq!(config.right.heading, "Chosen");
        assert_eq!(config.right.seed, ListConfig::default_for(ListId::Right).seed);
        assert_eq!(config.left, ListConfig::default_for(ListId::Left));
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_seed_only_override_keeps_heading() {
        let config =
            AppConfig::from_json(r#"{ "title": "Pick items", "right": { "seed": ["A", "B"] } }"#)
                .unwrap();
        assert_eq!(config.title, "Pick items");
        assert_eq!(config.right.heading, "Right Drop Zone");
        assert_eq!(config.right.seed, vec!["A", "B"]);
        assert_eq!(config.left, ListConfig::default_for(ListId::Left));
        assert_eq!(config.table_heading, "Table");
    }

    #[test]
    fn test_explicit_empty_seed_is_kept() {
        let config = AppConfig::from_json(r#"{ "left": { "seed": [] } }"#).unwrap();
        assert!(config.left.seed.is_empty());
        assert_eq!(config.left.heading, "Left Drop Zone");
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = AppConfig::from_json("{ title: ").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_unknown_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        let err = config.level_filter().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level `loud`");
    }
}
