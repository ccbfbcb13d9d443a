//! Search Box Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Free-text search input; writes the raw query, debouncing happens downstream
#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="mt-3">
            <label class="form-label" for="search">"Arama"</label>
            <input
                id="search"
                class="form-control"
                type="text"
                placeholder="Arama yapın..."
                autocomplete="off"
                prop:value=move || store.query().get()
                on:input=move |ev| store.query().set(event_target_value(&ev))
            />
        </div>
    }
}
