//! Frontend Models
//!
//! Shopping list entry and its identifier.

use std::fmt;

use ulid::Ulid;

use crate::catalog::{Category, Shop};

/// Opaque item identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Ulid);

impl ItemId {
    pub fn generate() -> Self {
        Self(Ulid::new())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shopping list entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub shop: Option<Shop>,
    pub category: Option<Category>,
    pub is_bought: bool,
}

impl Item {
    pub fn new(id: ItemId, name: String, shop: Option<Shop>, category: Option<Category>) -> Self {
        Self {
            id,
            name,
            shop,
            category,
            is_bought: false,
        }
    }

    pub fn shop_name(&self) -> &'static str {
        self.shop.map(|s| s.name()).unwrap_or("")
    }

    pub fn category_name(&self) -> &'static str {
        self.category.map(|c| c.name()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(ItemId::generate(), "Süt".to_string(), Some(Shop::Migros), None);
        assert_eq!(item.name, "Süt");
        assert!(!item.is_bought);
        assert_eq!(item.shop_name(), "Migros");
        assert_eq!(item.category_name(), "");
    }
}
