//! View Pipeline
//!
//! Derives the rows shown in the table from the list, the filters and the
//! debounced search query. A non-empty query replaces the filtered rows with
//! search results over the whole list; the filters are not applied to them.

use crate::filter::{apply_filters, FilterCriteria};
use crate::models::Item;
use crate::search::fuzzy_search;

pub fn derive_rows(items: &[Item], criteria: &FilterCriteria, debounced_query: &str, threshold: f64) -> Vec<Item> {
    if debounced_query.is_empty() {
        return apply_filters(items, criteria);
    }
    fuzzy_search(items, debounced_query, threshold)
        .into_iter()
        .map(|hit| hit.item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Shop};
    use crate::filter::StatusFilter;
    use crate::models::ItemId;
    use crate::search::DEFAULT_THRESHOLD;

    fn sample() -> Vec<Item> {
        vec![
            Item::new(ItemId::generate(), "Milk".to_string(), Some(Shop::Migros), None),
            Item::new(ItemId::generate(), "Eggs".to_string(), Some(Shop::Bim), Some(Category::Sarkuteri)),
        ]
    }

    #[test]
    fn test_empty_query_uses_filters() {
        let items = sample();
        let criteria = FilterCriteria { shop: Some(Shop::Bim), ..Default::default() };

        let rows = derive_rows(&items, &criteria, "", DEFAULT_THRESHOLD);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Eggs");
    }

    #[test]
    fn test_search_overrides_filters() {
        let items = sample();
        // Filter that would exclude "Milk"
        let criteria = FilterCriteria {
            shop: Some(Shop::Bim),
            category: Some(Category::Sarkuteri),
            status: StatusFilter::Bought,
        };

        let rows = derive_rows(&items, &criteria, "milk", DEFAULT_THRESHOLD);
        assert_eq!(rows[0].name, "Milk");
        assert!(rows.iter().all(|row| row.name != "Eggs"));
    }

    #[test]
    fn test_no_match_yields_empty() {
        let rows = derive_rows(&sample(), &FilterCriteria::default(), "zzzzzz", DEFAULT_THRESHOLD);
        assert!(rows.is_empty());
    }
}
