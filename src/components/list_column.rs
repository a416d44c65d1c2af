//! List Column Component
//!
//! Heading, draggable rows and a trailing drop slot for one list.

use leptos::prelude::*;

use crate::components::{DropSlot, ItemRow};
use crate::context::use_app_context;
use crate::models::ListId;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListColumn(list: ListId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = ctx.dnd;

    let rows = move || {
        store
            .lists()
            .read()
            .items(list)
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let count = move || store.lists().read().items(list).len();

    view! {
        <div class="col">
            <h2>{ctx.heading(list)}</h2>
            <div class=move || if dnd.is_active() { "drop-zone dragging" } else { "drop-zone" }>
                <For
                    each=rows
                    // Index is part of the key: handlers capture their slot
                    key=|(index, item)| (item.id(), *index)
                    children=move |(index, item)| {
                        view! { <ItemRow list=list index=index item=item /> }
                    }
                />
                {move || {
                    let len = count();
                    view! { <DropSlot list=list index=len /> }
                }}
            </div>
            <p class="item-count">{move || format!("{} items", count())}</p>
        </div>
    }
}
