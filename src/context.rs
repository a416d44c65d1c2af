//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::config::AppConfig;
use crate::models::ListId;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Drag state shared by both lists
    pub dnd: DndSignals<ListId>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(dnd: DndSignals<ListId>, config: AppConfig) -> Self {
        Self {
            dnd,
            config: StoredValue::new(config),
        }
    }

    pub fn title(&self) -> String {
        self.config.with_value(|c| c.title.clone())
    }

    /// Column heading for a list
    pub fn heading(&self, list: ListId) -> String {
        self.config.with_value(|c| c.list(list).heading.clone())
    }

    pub fn table_heading(&self) -> String {
        self.config.with_value(|c| c.table_heading.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
