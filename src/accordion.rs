//! Open/closed memory for the per-category accordion sections.
//!
//! Entries live under `budget_<budgetId>_cat_<category>` as `"1"` (open) or
//! `"0"` (closed). Older pages wrote the same format, so it must not change.
//! Nothing here ever fails: a missing or broken store reads as collapsed.

use crate::storage::{KeyValueStore, LocalStorage};

const OPEN: &str = "1";
const CLOSED: &str = "0";

pub fn accordion_key(budget_id: i64, category: &str) -> String {
    format!("budget_{}_cat_{}", budget_id, category)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccordionStateStore<S> {
    store: S,
}

impl AccordionStateStore<LocalStorage> {
    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }
}

impl<S: KeyValueStore> AccordionStateStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn restore(&self, budget_id: i64, category: &str) -> bool {
        self.store
            .get(&accordion_key(budget_id, category))
            .map_or(false, |value| value == OPEN)
    }

    pub fn persist(&self, budget_id: i64, category: &str, is_open: bool) {
        let key = accordion_key(budget_id, category);
        let value = if is_open { OPEN } else { CLOSED };
        if let Err(e) = self.store.set(&key, value) {
            log::debug!("accordion state for {} not saved: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn key_format_is_stable() {
        assert_eq!(accordion_key(5, "food"), "budget_5_cat_food");
        assert_eq!(accordion_key(12, "fixed_costs"), "budget_12_cat_fixed_costs");
    }

    #[test]
    fn unknown_pair_restores_collapsed() {
        let state = AccordionStateStore::new(MemoryStore::new());
        assert!(!state.restore(5, "food"));
    }

    #[test]
    fn persist_then_restore_tracks_latest_value() {
        let state = AccordionStateStore::new(MemoryStore::new());

        state.persist(5, "food", true);
        assert!(state.restore(5, "food"));

        state.persist(5, "food", false);
        assert!(!state.restore(5, "food"));
    }

    #[test]
    fn budgets_with_same_category_are_independent() {
        let state = AccordionStateStore::new(MemoryStore::new());

        state.persist(5, "food", true);
        assert!(state.restore(5, "food"));
        assert!(!state.restore(7, "food"));

        state.persist(7, "food", true);
        state.persist(5, "food", false);
        assert!(!state.restore(5, "food"));
        assert!(state.restore(7, "food"));
    }

    #[test]
    fn reads_values_written_by_older_pages() {
        let store = MemoryStore::new();
        store.set("budget_3_cat_rent", "1").unwrap();
        store.set("budget_3_cat_food", "0").unwrap();
        store.set("budget_3_cat_misc", "true").unwrap();

        let state = AccordionStateStore::new(&store);
        assert!(state.restore(3, "rent"));
        assert!(!state.restore(3, "food"));
        assert!(!state.restore(3, "misc"));
    }

    #[test]
    fn writes_use_one_and_zero() {
        let store = MemoryStore::new();
        let state = AccordionStateStore::new(&store);

        state.persist(9, "travel", true);
        assert_eq!(store.get("budget_9_cat_travel").as_deref(), Some("1"));
        state.persist(9, "travel", false);
        assert_eq!(store.get("budget_9_cat_travel").as_deref(), Some("0"));
    }

    #[test]
    fn unavailable_store_is_silent_and_collapsed() {
        let state = AccordionStateStore::new(MemoryStore::unavailable());
        state.persist(5, "food", true);
        assert!(!state.restore(5, "food"));
    }
}
