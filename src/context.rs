//! Application Context
//!
//! Derived view state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Item;

/// App-wide derived signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Search query after debouncing
    pub debounced_query: ReadSignal<String>,
    /// Rows to render: filtered list, or search results while searching
    pub rows: Memo<Vec<Item>>,
}

impl AppContext {
    pub fn new(debounced_query: ReadSignal<String>, rows: Memo<Vec<Item>>) -> Self {
        Self { debounced_query, rows }
    }

    /// Whether search results currently replace the filtered list
    pub fn is_searching(&self) -> bool {
        self.debounced_query.with(|query| !query.is_empty())
    }
}
