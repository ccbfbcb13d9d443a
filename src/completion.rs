//! Completion Detector
//!
//! Fires a one-shot celebration the moment every item on a non-empty list is
//! bought, and re-arms as soon as that stops being true.

use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionState {
    #[default]
    Armed,
    Fired,
}

/// Emitted on the `Armed -> Fired` transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    pub item_count: usize,
}

#[derive(Debug, Default)]
pub struct CompletionDetector {
    state: CompletionState,
}

impl CompletionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current list; returns a celebration at most once per all-bought run
    pub fn observe(&mut self, items: &[Item]) -> Option<Celebration> {
        let all_bought = !items.is_empty() && items.iter().all(|item| item.is_bought);

        match (self.state, all_bought) {
            (CompletionState::Armed, true) => {
                self.state = CompletionState::Fired;
                log::info!("all {} items bought", items.len());
                Some(Celebration { item_count: items.len() })
            }
            (CompletionState::Fired, false) => {
                self.state = CompletionState::Armed;
                log::debug!("completion detector re-armed");
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
impl CompletionDetector {
    fn state(&self) -> CompletionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ItemStore;

    #[test]
    fn test_fires_once_per_run() {
        let mut store = ItemStore::new();
        let a = store.add("a", None, None);
        let b = store.add("b", None, None);
        let mut detector = CompletionDetector::new();
        let mut fired = 0;

        assert!(detector.observe(store.list()).is_none());

        store.toggle_bought(&a);
        fired += detector.observe(store.list()).map_or(0, |_| 1);
        store.toggle_bought(&b);
        fired += detector.observe(store.list()).map_or(0, |_| 1);
        assert_eq!(fired, 1);
        assert_eq!(detector.state(), CompletionState::Fired);

        // Unrelated re-observation while still all bought
        assert!(detector.observe(store.list()).is_none());

        store.toggle_bought(&a);
        assert!(detector.observe(store.list()).is_none());
        assert_eq!(detector.state(), CompletionState::Armed);

        store.toggle_bought(&a);
        let celebration = detector.observe(store.list());
        assert_eq!(celebration, Some(Celebration { item_count: 2 }));
    }

    #[test]
    fn test_never_fires_on_empty_list() {
        let mut detector = CompletionDetector::new();
        assert!(detector.observe(&[]).is_none());
        assert_eq!(detector.state(), CompletionState::Armed);
    }

    #[test]
    fn test_removing_last_unbought_item_fires() {
        let mut store = ItemStore::new();
        let a = store.add("a", None, None);
        let b = store.add("b", None, None);
        let mut detector = CompletionDetector::new();

        store.toggle_bought(&a);
        assert!(detector.observe(store.list()).is_none());

        store.remove(&b);
        assert!(detector.observe(store.list()).is_some());

        store.remove(&a);
        assert!(detector.observe(store.list()).is_none());
        assert_eq!(detector.state(), CompletionState::Armed);
    }
}
