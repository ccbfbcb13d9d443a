//! Global Application State Store
//!
//! `ItemStore` owns the shopping list; `AppState` wraps it together with the
//! filter and search inputs in a `reactive_stores` store for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{Category, Shop};
use crate::filter::FilterCriteria;
use crate::models::{Item, ItemId};

/// Ordered collection of shopping list items
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new unbought item and return its id
    pub fn add(&mut self, name: impl Into<String>, shop: Option<Shop>, category: Option<Category>) -> ItemId {
        let mut id = ItemId::generate();
        while self.contains(&id) {
            id = ItemId::generate();
        }
        self.items.push(Item::new(id, name.into(), shop, category));
        log::debug!("added item {} ({} total)", id, self.items.len());
        id
    }

    /// Flip `is_bought` for the item with `id`; returns the new value, or `None` if absent
    pub fn toggle_bought(&mut self, id: &ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == *id)?;
        item.is_bought = !item.is_bought;
        log::debug!("item {} bought={}", id, item.is_bought);
        Some(item.is_bought)
    }

    /// Remove the item with `id`; returns whether anything was removed
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        let removed = self.items.len() != before;
        if removed {
            log::debug!("removed item {}", id);
        }
        removed
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| item.id == *id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn bought_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_bought).count()
    }

    /// Non-empty and every item bought
    pub fn all_bought(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.is_bought)
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The shopping list
    pub list: ItemStore,
    /// Active shop/category/status filters
    pub filter: FilterCriteria,
    /// Raw search input (undebounced)
    pub query: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add an item to the list
pub fn store_add_item(store: &AppStore, name: String, shop: Option<Shop>, category: Option<Category>) {
    store.list().write().add(name, shop, category);
}

/// Toggle the bought flag of an item by ID
pub fn store_toggle_item(store: &AppStore, id: ItemId) {
    store.list().write().toggle_bought(&id);
}

/// Remove an item from the list by ID
pub fn store_remove_item(store: &AppStore, id: ItemId) {
    store.list().write().remove(&id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_appends_unbought_item() {
        let mut store = ItemStore::new();
        store.add("Ekmek", Some(Shop::Bim), Some(Category::Firin));
        store.add("Elma", None, Some(Category::Meyve));

        let last = store.list().last().unwrap();
        assert_eq!(last.name, "Elma");
        assert_eq!(last.shop, None);
        assert_eq!(last.category, Some(Category::Meyve));
        assert!(!last.is_bought);
        assert_eq!(store.list()[0].name, "Ekmek");
    }

    #[test]
    fn test_add_accepts_empty_and_duplicate_names() {
        let mut store = ItemStore::new();
        let a = store.add("", None, None);
        let b = store.add("", None, None);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_stay_unique_across_mutations() {
        let mut store = ItemStore::new();
        let mut ids = Vec::new();
        for i in 0..50 {
            ids.push(store.add(format!("item {}", i), None, None));
            if i % 3 == 0 {
                store.toggle_bought(&ids[i / 2]);
            }
            if i % 7 == 0 {
                store.remove(&ids[i / 3]);
            }
        }
        let unique: HashSet<ItemId> = store.list().iter().map(|item| item.id).collect();
        assert_eq!(unique.len(), store.len());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = ItemStore::new();
        let id = store.add("Süt", Some(Shop::Migros), None);

        assert_eq!(store.toggle_bought(&id), Some(true));
        assert_eq!(store.toggle_bought(&id), Some(false));
        assert!(!store.list()[0].is_bought);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut store = ItemStore::new();
        store.add("Süt", None, None);
        let before = store.clone();

        assert_eq!(store.toggle_bought(&ItemId::generate()), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut store = ItemStore::new();
        let keep = store.add("Peynir", None, Some(Category::Sarkuteri));
        let gone = store.add("Ampul", None, Some(Category::Elektirik));

        assert!(store.remove(&gone));
        let after_first = store.clone();
        assert!(!store.remove(&gone));
        assert_eq!(store, after_first);
        assert!(store.contains(&keep));
    }

    #[test]
    fn test_all_bought() {
        let mut store = ItemStore::new();
        assert!(!store.all_bought());

        let a = store.add("a", None, None);
        let b = store.add("b", None, None);
        store.toggle_bought(&a);
        assert!(!store.all_bought());
        assert_eq!(store.bought_count(), 1);

        store.toggle_bought(&b);
        assert!(store.all_bought());
    }
}
