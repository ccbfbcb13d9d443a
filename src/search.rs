//! Fuzzy Search
//!
//! Typo-tolerant matching of a query against item name, shop and category,
//! scored by `fuse-rust` (bitap with location penalty, lower is better).
//! Equal scores prefer the shorter matched field, so a whole-field match
//! ranks above the same text inside a longer field.

use std::cmp::Ordering;

use fuse_rust::Fuse;

use crate::models::Item;

/// Default acceptance threshold
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// One ranked search result
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub item: Item,
    pub score: f64,
    /// Char length of the field that produced `score`
    matched_len: usize,
}

impl SearchHit {
    fn rank(&self, other: &Self) -> Ordering {
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
            .then(self.matched_len.cmp(&other.matched_len))
    }
}

/// Search `items` for `query`, best match first; items scoring above `threshold` are dropped
pub fn fuzzy_search(items: &[Item], query: &str, threshold: f64) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }
    let fuse = Fuse {
        threshold,
        ..Fuse::default()
    };

    let mut hits: Vec<SearchHit> = items
        .iter()
        .filter_map(|item| {
            let (score, matched_len) = best_field_match(&fuse, query, item)?;
            (score <= threshold).then(|| SearchHit {
                item: item.clone(),
                score,
                matched_len,
            })
        })
        .collect();

    // Stable sort keeps insertion order among full ties
    hits.sort_by(SearchHit::rank);
    log::debug!("search {:?}: {} of {} items matched", query, hits.len(), items.len());
    hits
}

/// Best `(score, field length)` over the item's non-empty fields
fn best_field_match(fuse: &Fuse, query: &str, item: &Item) -> Option<(f64, usize)> {
    [item.name.as_str(), item.shop_name(), item.category_name()]
        .into_iter()
        .filter(|text| !text.is_empty())
        .filter_map(|text| {
            fuse.search_text_in_string(query, text)
                .map(|result| (result.score, text.chars().count()))
        })
        .min_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then(a.1.cmp(&b.1))
        })
}
