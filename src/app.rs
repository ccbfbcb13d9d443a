//! Shopping List App
//!
//! Root component: owns the store, wires the view pipeline and the
//! completion celebration, and lays out form, search, filters and table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::celebration::celebrate;
use crate::completion::CompletionDetector;
use crate::components::{FilterBar, ItemTable, NewItemForm, SearchBox};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::debounce::use_debounced;
use crate::store::{AppState, AppStateStoreFields};
use crate::pipeline::derive_rows;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let debounced_query = use_debounced(Signal::derive(move || store.query().get()), config.debounce_ms);

    let threshold = config.search_threshold;
    let rows = Memo::new(move |_| {
        let query = debounced_query.get();
        let criteria = store.filter().get();
        derive_rows(store.list().read().list(), &criteria, &query, threshold)
    });

    provide_context(AppContext::new(debounced_query, rows));

    // Celebrate once each time the whole list becomes bought
    let mut detector = CompletionDetector::new();
    Effect::new(move |_| {
        let celebration = detector.observe(store.list().read().list());
        if let Some(celebration) = celebration {
            celebrate(&config, celebration);
        }
    });

    view! {
        <div class="container">
            <h1>"Alışveriş Listesi"</h1>

            <NewItemForm />

            <SearchBox />

            <FilterBar />

            <ItemTable />

            <p class="item-count">
                {move || {
                    let list = store.list().read();
                    format!("{} / {} satın alındı", list.bought_count(), list.len())
                }}
            </p>
        </div>
    }
}
