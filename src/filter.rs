//! List Filters
//!
//! Shop / category / bought-status criteria applied before rendering.

use crate::catalog::{Category, Shop};
use crate::models::Item;

/// Bought-status radio selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Bought,
    NotBought,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Bought, StatusFilter::NotBought];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Tümü",
            StatusFilter::Bought => "Satın Alınanlar",
            StatusFilter::NotBought => "Satın Alınmayanlar",
        }
    }

    /// DOM id for the radio input
    pub fn dom_id(&self) -> &'static str {
        match self {
            StatusFilter::All => "filterAll",
            StatusFilter::Bought => "filterBought",
            StatusFilter::NotBought => "filterNotBought",
        }
    }

    pub fn accepts(&self, is_bought: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Bought => is_bought,
            StatusFilter::NotBought => !is_bought,
        }
    }
}

/// Active filter selectors; `None` means unconstrained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub shop: Option<Shop>,
    pub category: Option<Category>,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn matches(&self, item: &Item) -> bool {
        self.shop.map_or(true, |shop| item.shop == Some(shop))
            && self.category.map_or(true, |category| item.category == Some(category))
            && self.status.accepts(item.is_bought)
    }
}

/// Items matching every criterion, in source order
pub fn apply_filters(items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
    items.iter().filter(|item| criteria.matches(item)).cloned().collect()
}
