//! New Item Form Component
//!
//! Name, shop and category inputs; every field resets after an add.

use leptos::prelude::*;

use crate::catalog::{Category, Shop};
use crate::components::CatalogSelect;
use crate::store::{store_add_item, use_app_store};

/// Form for appending items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (shop, set_shop) = signal::<Option<u32>>(None);
    let (category, set_category) = signal::<Option<u32>>(None);

    // No validation: blank names and unset selects are accepted
    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_item(
            &store,
            name.get(),
            shop.get().and_then(Shop::from_id),
            category.get().and_then(Category::from_id),
        );
        set_name.set(String::new());
        set_shop.set(None);
        set_category.set(None);
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="mb-3">
                <label class="form-label" for="item-name">"Ürün"</label>
                <input
                    id="item-name"
                    class="form-control"
                    type="text"
                    placeholder="Ürün girin."
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label">"Market"</label>
                <CatalogSelect
                    options=Shop::options()
                    placeholder="Market Seçin"
                    value=shop
                    on_change=move |id| set_shop.set(id)
                    class="form-select"
                />
            </div>
            <div class="mb-3">
                <label class="form-label">"Kategori"</label>
                <CatalogSelect
                    options=Category::options()
                    placeholder="Kategori Seçin"
                    value=category
                    on_change=move |id| set_category.set(id)
                    class="form-select"
                />
            </div>
            <button type="submit" class="btn btn-primary">"Ürün Ekle"</button>
        </form>
    }
}
