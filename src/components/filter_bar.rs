//! Filter Bar Component
//!
//! Shop and category selects plus the bought-status radio group.

use leptos::prelude::*;

use crate::catalog::{Category, Shop};
use crate::components::CatalogSelect;
use crate::filter::StatusFilter;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let shop = Signal::derive(move || store.filter().get().shop.map(|s| s.id()));
    let category = Signal::derive(move || store.filter().get().category.map(|c| c.id()));

    view! {
        <div class="mt-3">
            <label class="form-label">"Filtrele"</label>
            <div class="d-flex">
                <CatalogSelect
                    options=Shop::options()
                    placeholder="Market Seçin"
                    value=shop
                    on_change=move |id| store.filter().write().shop = id.and_then(Shop::from_id)
                    class="form-select form-select-sm me-2"
                />
                <CatalogSelect
                    options=Category::options()
                    placeholder="Kategori Seçin"
                    value=category
                    on_change=move |id| store.filter().write().category = id.and_then(Category::from_id)
                    class="form-select form-select-sm me-2"
                />
                <div class="d-flex align-items-center">
                    {StatusFilter::ALL.into_iter().map(|status| view! {
                        <div class="form-check me-2">
                            <input
                                class="form-check-input"
                                type="radio"
                                name="filterStatus"
                                id=status.dom_id()
                                prop:checked=move || store.filter().get().status == status
                                on:change=move |_| store.filter().write().status = status
                            />
                            <label class="form-check-label" for=status.dom_id()>
                                {status.label()}
                            </label>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
