//! Drag-and-Drop Lists App
//!
//! Two list columns, a Save button and the saved table.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::components::{ListColumn, SnapshotTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::id_gen::IdGenerator;
use crate::list_pair::ListPair;
use crate::models::ListId;
use crate::store::{store_apply_drag, store_save, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Items are only ever created here
    let mut ids = IdGenerator::new();
    let lists = ListPair::seeded(&mut ids, config.left.seed.as_slice(), config.right.seed.as_slice());
    log::info!("[APP] Seeded {} items", lists.len());

    let store = Store::new(AppState { lists });
    provide_context(store);

    let dnd = create_dnd_signals::<ListId>();
    bind_global_mouseup(dnd, move |outcome| {
        log::debug!("[DND] Drop: {:?}", outcome);
        store_apply_drag(&store, outcome);
    });

    let ctx = AppContext::new(dnd, config);
    provide_context(ctx);

    view! {
        <div class="container">
            <h1 class="page-title">{ctx.title()}</h1>
            <div class="row">
                {ListId::ALL
                    .into_iter()
                    .map(|list| view! { <ListColumn list=list /> })
                    .collect_view()}
            </div>
            <button class="save-btn" on:click=move |_| { store_save(&store); }>
                "Save"
            </button>
            <SnapshotTable />
        </div>
    }
}
