//! Snapshot Table Component
//!
//! Rows captured by the last save. Renders nothing before the first save.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SnapshotTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let has_snapshot = move || store.lists().read().has_snapshot();
    let rows = move || {
        store
            .lists()
            .read()
            .snapshot()
            .map(<[Item]>::to_vec)
            .unwrap_or_default()
    };

    view! {
        <Show when=has_snapshot>
            <div class="pt-3">
                <h2>{ctx.table_heading()}</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Item ID"</th>
                            <th>"Text"</th>
                            <th>"Value"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|item| view! {
                            <tr>
                                <td>{item.id().0}</td>
                                <td>{item.text().to_string()}</td>
                                <td>{item.value().to_string()}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
