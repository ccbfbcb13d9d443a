//! Item Table Component
//!
//! Renders the rows produced by the view pipeline.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemTable() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let empty_message = move || {
        if ctx.is_searching() {
            "Sonuç bulunamadı."
        } else if store.list().read().is_empty() {
            "Listeniz boş."
        } else {
            "Filtreye uyan ürün yok."
        }
    };

    view! {
        <table class="table table-striped table-bordered table-hover mt-3">
            <thead>
                <tr>
                    <th>"Ürün Adı"</th>
                    <th>"Market"</th>
                    <th>"Kategori"</th>
                    <th>"Satın Alındı"</th>
                    <th>"Sil"</th>
                </tr>
            </thead>
            <tbody>
                // Keyed on bought state so a toggle re-renders the row
                <For
                    each=move || ctx.rows.get()
                    key=|item| (item.id, item.is_bought)
                    children=move |item| view! { <ItemRow item=item /> }
                />
                <Show when=move || ctx.rows.with(|rows| rows.is_empty())>
                    <tr class="empty-row">
                        <td colspan="5">{empty_message}</td>
                    </tr>
                </Show>
            </tbody>
        </table>
    }
}
