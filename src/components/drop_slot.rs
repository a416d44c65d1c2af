//! Drop Slot Component
//!
//! Trailing drop target after the last row of a list.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_app_context;
use crate::models::ListId;

/// Drop target that appends to `list` (index = current length)
#[component]
pub fn DropSlot(list: ListId, index: usize) -> impl IntoView {
    let dnd = use_app_context().dnd;
    let slot = Slot::new(list, index);

    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if dnd.is_active() { c.push_str(" armed"); }
        if dnd.is_drop_target(slot) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
