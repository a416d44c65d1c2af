//! Item Row Component
//!
//! One draggable item: an input bound to its value, then its label.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_app_context;
use crate::models::{Item, ListId};
use crate::store::{store_update_value, use_app_store, AppStateStoreFields, AppStore};

/// A single row; also the drop target for its own index
#[component]
pub fn ItemRow(list: ListId, index: usize, item: Item) -> impl IntoView {
    let dnd = use_app_context().dnd;
    let store: AppStore = use_app_store();

    let id = item.id();
    let text = item.text().to_string();
    let slot = Slot::new(list, index);

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, slot);
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = move || {
        let mut c = String::from("item");
        if dnd.is_dragging(slot) { c.push_str(" dragging"); }
        if dnd.is_drop_target(slot) { c.push_str(" drop-target"); }
        c
    };

    // Read through the store so edits show without re-keying the row
    let value = move || {
        store
            .lists()
            .read()
            .item(list, id)
            .map(|item| item.value().to_string())
            .unwrap_or_default()
    };

    view! {
        <div
            class=row_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <input
                type="text"
                prop:value=value
                on:input=move |ev| {
                    store_update_value(&store, list, id, event_target_value(&ev));
                }
            />
            <span class="item-text">" : " {text}</span>
        </div>
    }
}
