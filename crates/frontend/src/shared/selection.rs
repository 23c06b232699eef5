//! Cross-page row selection for lazily paged grids.
//!
//! The tracker owns the global selection of a list session. Rows are matched
//! by key, never by reference, so a row re-fetched on a later visit to its
//! page is recognised as selected.
//!
//! Besides plain toggling it supports a "select the first N rows" bulk mode:
//! `set_desired_count` selects from the current page and
//! `reconcile_on_page_load` keeps filling the selection, in page order, as
//! further pages are loaded until N rows are selected.

use crate::shared::errors::ValidationError;
use std::collections::HashSet;
use std::hash::Hash;

/// Rows that can be tracked by a [`SelectionTracker`]
pub trait Selectable: Clone {
    type Key: Eq + Hash + Clone;

    /// Stable identity of the row
    fn selection_key(&self) -> Self::Key;
}

/// Header checkbox state, derived from the page rows and the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone)]
pub struct SelectionTracker<T: Selectable> {
    /// Selected rows in selection order
    items: Vec<T>,
    keys: HashSet<T::Key>,
    /// 0 when bulk mode is inactive
    desired_count: usize,
}

impl<T: Selectable> Default for SelectionTracker<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            keys: HashSet::new(),
            desired_count: 0,
        }
    }
}

impl<T: Selectable> SelectionTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Target of the bulk mode, 0 when inactive
    pub fn desired_count(&self) -> usize {
        self.desired_count
    }

    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.keys.contains(key)
    }

    /// All selected rows, in the order they were selected
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected_keys(&self) -> HashSet<T::Key> {
        self.keys.clone()
    }

    /// Selects the row if it is not selected, deselects it otherwise.
    ///
    /// In bulk mode a row is not selected once the desired count is reached.
    pub fn toggle_row(&mut self, item: &T) {
        let key = item.selection_key();
        if self.keys.contains(&key) {
            self.remove(&key);
        } else if self.has_room() {
            self.insert(item.clone());
        }
    }

    /// Selects (`checked`) or deselects every row of the page. Rows of other
    /// pages keep their state. In bulk mode selection stops at the desired
    /// count, in page order.
    pub fn toggle_all_on_page(&mut self, page_items: &[T], checked: bool) {
        if checked {
            for item in page_items {
                if !self.has_room() {
                    break;
                }
                if !self.keys.contains(&item.selection_key()) {
                    self.insert(item.clone());
                }
            }
        } else {
            let page_keys: HashSet<T::Key> =
                page_items.iter().map(Selectable::selection_key).collect();
            self.items
                .retain(|item| !page_keys.contains(&item.selection_key()));
            self.keys.retain(|key| !page_keys.contains(key));
        }
    }

    /// Activates bulk mode for `count` rows.
    ///
    /// The selection is replaced by the first `count` rows of the current
    /// page; later pages are filled in by [`Self::reconcile_on_page_load`].
    /// A count that is not positive is rejected and leaves the state as is.
    pub fn set_desired_count(&mut self, count: i64, page_items: &[T]) -> Result<(), ValidationError> {
        if count <= 0 {
            return Err(ValidationError::InvalidCount);
        }
        let count = usize::try_from(count).map_err(|_| ValidationError::InvalidCount)?;

        self.desired_count = count;
        self.items.clear();
        self.keys.clear();
        for item in page_items.iter().take(count) {
            if !self.keys.contains(&item.selection_key()) {
                self.insert(item.clone());
            }
        }
        Ok(())
    }

    /// Fills the bulk selection from a freshly loaded page.
    ///
    /// Walks the page in order and selects rows not yet selected while the
    /// selection is below the desired count. Does nothing while bulk mode is
    /// inactive. Returns the number of rows added.
    pub fn reconcile_on_page_load(&mut self, page_items: &[T]) -> usize {
        if self.desired_count == 0 {
            return 0;
        }

        let mut added = 0;
        for item in page_items {
            if self.items.len() >= self.desired_count {
                break;
            }
            if !self.keys.contains(&item.selection_key()) {
                self.insert(item.clone());
                added += 1;
            }
        }
        added
    }

    /// Selected rows of the page, in page order
    pub fn current_page_selection(&self, page_items: &[T]) -> Vec<T> {
        page_items
            .iter()
            .filter(|item| self.keys.contains(&item.selection_key()))
            .cloned()
            .collect()
    }

    /// State of the "select all on page" checkbox. Computed on every call so
    /// it can never drift from the selection.
    pub fn header_state(&self, page_items: &[T]) -> HeaderCheckState {
        if page_items.is_empty() {
            return HeaderCheckState::Unchecked;
        }

        let selected = page_items
            .iter()
            .filter(|item| self.keys.contains(&item.selection_key()))
            .count();

        if selected == 0 {
            HeaderCheckState::Unchecked
        } else if selected == page_items.len() {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }

    /// Drops the selection and leaves bulk mode.
    pub fn clear(&mut self) {
        self.items.clear();
        self.keys.clear();
        self.desired_count = 0;
    }

    /// Whether one more row may be selected
    fn has_room(&self) -> bool {
        self.desired_count == 0 || self.items.len() < self.desired_count
    }

    fn insert(&mut self, item: T) {
        self.keys.insert(item.selection_key());
        self.items.push(item);
    }

    fn remove(&mut self, key: &T::Key) {
        self.keys.remove(key);
        self.items.retain(|item| &item.selection_key() != key);
    }
}

/// Parses the bulk-select form input: a positive base-10 integer.
pub fn parse_desired_count(input: &str) -> Result<i64, ValidationError> {
    match input.trim().parse::<i64>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ValidationError::InvalidCount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        label: String,
    }

    impl Selectable for Row {
        type Key = u32;

        fn selection_key(&self) -> u32 {
            self.id
        }
    }

    fn rows(ids: std::ops::Range<u32>) -> Vec<Row> {
        ids.map(|id| Row {
            id,
            label: format!("row {}", id),
        })
        .collect()
    }

    fn ids(tracker: &SelectionTracker<Row>) -> Vec<u32> {
        tracker.items().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_toggle_row_keeps_odd_toggles() {
        let page = rows(0..5);
        let mut tracker = SelectionTracker::new();
        let sequence = [0, 1, 2, 1, 3, 0, 0, 4, 4, 4];
        for i in sequence {
            tracker.toggle_row(&page[i]);
        }

        let mut counts = [0usize; 5];
        for i in sequence {
            counts[i] += 1;
        }
        for (i, count) in counts.iter().enumerate() {
            assert_eq!(tracker.is_selected(&(i as u32)), count % 2 == 1, "row {}", i);
        }
        assert_eq!(ids(&tracker), vec![2, 3, 0, 4]);
    }

    #[test]
    fn test_toggle_row_matches_by_key() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle_row(&Row { id: 7, label: "first fetch".into() });
        tracker.toggle_row(&Row { id: 7, label: "second fetch".into() });
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_toggle_row_keeps_desired_count() {
        let page = rows(0..5);
        let mut tracker = SelectionTracker::new();
        tracker.set_desired_count(3, &page).unwrap();
        tracker.toggle_row(&page[0]);
        assert_eq!(tracker.desired_count(), 3);
        assert_eq!(ids(&tracker), vec![1, 2]);
    }

    #[test]
    fn test_toggle_all_respects_desired_count() {
        let page1 = rows(0..10);
        let page2 = rows(10..20);
        let mut tracker = SelectionTracker::new();
        tracker.set_desired_count(3, &page1).unwrap();

        tracker.toggle_all_on_page(&page1, true);
        assert!(tracker.len() <= tracker.desired_count());
        tracker.toggle_all_on_page(&page2, true);
        assert_eq!(tracker.len(), 3);
        assert_eq!(ids(&tracker), vec![0, 1, 2]);

        tracker.toggle_row(&page1[0]);
        tracker.toggle_all_on_page(&page2, true);
        assert_eq!(ids(&tracker), vec![1, 2, 10]);
        assert_eq!(tracker.desired_count(), 3);
    }

    #[test]
    fn test_toggle_row_stops_at_desired_count() {
        let page = rows(0..10);
        let mut tracker = SelectionTracker::new();
        tracker.set_desired_count(3, &page).unwrap();

        tracker.toggle_row(&page[5]);
        assert_eq!(ids(&tracker), vec![0, 1, 2]);
        assert_eq!(tracker.desired_count(), 3);

        tracker.toggle_row(&page[1]);
        tracker.toggle_row(&page[5]);
        assert_eq!(ids(&tracker), vec![0, 2, 5]);
    }

    #[test]
    fn test_toggle_all_round_trip() {
        let page1 = rows(0..4);
        let page2 = rows(10..14);
        let mut tracker = SelectionTracker::new();
        tracker.toggle_row(&page1[1]);
        tracker.toggle_row(&page2[2]);
        let before = ids(&tracker);

        tracker.toggle_all_on_page(&page2, true);
        assert_eq!(tracker.len(), 5);
        tracker.toggle_all_on_page(&page2, false);

        assert_eq!(ids(&tracker), vec![1]);
        assert!(!tracker.is_selected(&12));

        tracker.toggle_row(&page2[2]);
        assert_eq!(ids(&tracker), before);
    }

    #[test]
    fn test_toggle_all_round_trip_without_page_rows() {
        let page1 = rows(0..4);
        let page2 = rows(10..14);
        let mut tracker = SelectionTracker::new();
        tracker.toggle_all_on_page(&page1, true);
        let before = ids(&tracker);

        tracker.toggle_all_on_page(&page2, true);
        tracker.toggle_all_on_page(&page2, false);
        assert_eq!(ids(&tracker), before);
    }

    #[test]
    fn test_toggle_all_does_not_duplicate() {
        let page = rows(0..4);
        let mut tracker = SelectionTracker::new();
        tracker.toggle_row(&page[2]);
        tracker.toggle_all_on_page(&page, true);
        tracker.toggle_all_on_page(&page, true);
        assert_eq!(ids(&tracker), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_set_desired_count_selects_page_prefix() {
        let page = rows(0..10);
        for n in 1..=10 {
            let mut tracker = SelectionTracker::new();
            tracker.toggle_row(&Row { id: 99, label: String::new() });
            tracker.set_desired_count(n, &page).unwrap();

            let selection = tracker.current_page_selection(&page);
            assert_eq!(selection.len(), n as usize);
            assert_eq!(selection, page[..n as usize].to_vec());
            assert!(!tracker.is_selected(&99));
        }
    }

    #[test]
    fn test_set_desired_count_short_page() {
        let page = rows(0..4);
        let mut tracker = SelectionTracker::new();
        tracker.set_desired_count(10, &page).unwrap();
        assert_eq!(tracker.len(), 4);
        assert_eq!(tracker.desired_count(), 10);
    }

    #[test]
    fn test_set_desired_count_rejects_non_positive() {
        let page = rows(0..4);
        let mut tracker = SelectionTracker::new();
        tracker.toggle_row(&page[3]);

        assert_eq!(tracker.set_desired_count(0, &page), Err(ValidationError::InvalidCount));
        assert_eq!(tracker.set_desired_count(-3, &page), Err(ValidationError::InvalidCount));

        assert_eq!(ids(&tracker), vec![3]);
        assert_eq!(tracker.desired_count(), 0);
    }

    #[test]
    fn test_reconcile_fills_across_pages() {
        let page1 = rows(0..10);
        let page2 = rows(10..20);
        let page3 = rows(20..30);
        let mut tracker = SelectionTracker::new();

        tracker.set_desired_count(15, &page1).unwrap();
        assert_eq!(tracker.len(), 10);

        assert_eq!(tracker.reconcile_on_page_load(&page2), 5);
        assert_eq!(tracker.len(), 15);
        assert_eq!(
            tracker.current_page_selection(&page2),
            page2[..5].to_vec()
        );

        assert_eq!(tracker.reconcile_on_page_load(&page3), 0);
        assert_eq!(tracker.reconcile_on_page_load(&page2), 0);
        assert_eq!(tracker.len(), 15);
    }

    #[test]
    fn test_reconcile_revisiting_page_is_idempotent() {
        let page1 = rows(0..10);
        let mut tracker = SelectionTracker::new();
        tracker.set_desired_count(15, &page1).unwrap();
        assert_eq!(tracker.reconcile_on_page_load(&page1), 0);
        assert_eq!(tracker.len(), 10);
    }

    #[test]
    fn test_reconcile_never_exceeds_desired_count() {
        let pages: Vec<Vec<Row>> = (0..6).map(|p| rows(p * 7..p * 7 + 7)).collect();
        for desired in 1..=30i64 {
            let mut tracker = SelectionTracker::new();
            tracker.set_desired_count(desired, &pages[0]).unwrap();
            for order in [[1, 3, 2, 0, 5, 4], [5, 5, 1, 0, 2, 3]] {
                for index in order {
                    tracker.reconcile_on_page_load(&pages[index]);
                    assert!(tracker.len() <= desired as usize);
                }
            }
        }
    }

    #[test]
    fn test_reconcile_refills_after_manual_deselect() {
        let page1 = rows(0..4);
        let page2 = rows(4..8);
        let mut tracker = SelectionTracker::new();
        tracker.set_desired_count(4, &page1).unwrap();
        tracker.toggle_row(&page1[0]);
        assert_eq!(tracker.reconcile_on_page_load(&page2), 1);
        assert_eq!(ids(&tracker), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reconcile_inactive_without_bulk_mode() {
        let page = rows(0..4);
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.reconcile_on_page_load(&page), 0);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_header_state() {
        let page = rows(0..3);
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.header_state(&page), HeaderCheckState::Unchecked);
        tracker.toggle_row(&page[0]);
        assert_eq!(tracker.header_state(&page), HeaderCheckState::Indeterminate);
        tracker.toggle_all_on_page(&page, true);
        assert_eq!(tracker.header_state(&page), HeaderCheckState::Checked);
        assert_eq!(tracker.header_state(&[]), HeaderCheckState::Unchecked);
    }

    #[test]
    fn test_header_state_follows_reconcile() {
        let page1 = rows(0..4);
        let page2 = rows(4..8);
        let mut tracker = SelectionTracker::new();
        tracker.set_desired_count(6, &page1).unwrap();
        assert_eq!(tracker.header_state(&page1), HeaderCheckState::Checked);
        tracker.reconcile_on_page_load(&page2);
        assert_eq!(tracker.header_state(&page2), HeaderCheckState::Indeterminate);
    }

    #[test]
    fn test_clear() {
        let page = rows(0..4);
        let mut tracker = SelectionTracker::new();
        tracker.set_desired_count(2, &page).unwrap();
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.desired_count(), 0);
        assert_eq!(tracker.reconcile_on_page_load(&page), 0);
    }

    #[test]
    fn test_parse_desired_count() {
        assert_eq!(parse_desired_count("15"), Ok(15));
        assert_eq!(parse_desired_count("  7 "), Ok(7));
        assert_eq!(parse_desired_count("0"), Err(ValidationError::InvalidCount));
        assert_eq!(parse_desired_count("-3"), Err(ValidationError::InvalidCount));
        assert_eq!(parse_desired_count("abc"), Err(ValidationError::InvalidCount));
        assert_eq!(parse_desired_count(""), Err(ValidationError::InvalidCount));
        assert_eq!(parse_desired_count("1.5"), Err(ValidationError::InvalidCount));
    }
}
