//! Previous/next navigation through the sorted review collection.
//!
//! The navigator stores only the selected item. Its position is recomputed
//! against whatever order the caller passes in, so re-sorting while the
//! detail view is open never leaves a stale index behind.

use crate::catalog::Review;

use super::swipe::{SwipeDirection, SwipeGesture};

/// Item shown in the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailItem {
    /// A review, by article number.
    Review(u64),
    /// A product, by product number.
    Product(u64),
}

/// Returns the position of `selection` in `sorted`.
///
/// Products and reviews absent from `sorted` have no position.
#[must_use]
pub fn current_index(selection: Option<DetailItem>, sorted: &[&Review]) -> Option<usize> {
    let Some(DetailItem::Review(id)) = selection else {
        return None;
    };
    sorted.iter().position(|review| review.id == id)
}

/// Selection cursor for the detail view plus its swipe tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailNavigator {
    selection: Option<DetailItem>,
    gesture: SwipeGesture,
}

impl DetailNavigator {
    /// Creates a navigator with the given swipe threshold.
    #[must_use]
    pub const fn with_swipe_threshold(threshold: u32) -> Self {
        Self {
            selection: None,
            gesture: SwipeGesture::new(threshold),
        }
    }

    /// Selects an item for the detail view.
    pub const fn select(&mut self, item: DetailItem) {
        self.selection = Some(item);
    }

    /// Closes the detail view.
    pub const fn clear(&mut self) {
        self.selection = None;
    }

    /// Returns the selected item.
    #[must_use]
    pub const fn selection(&self) -> Option<DetailItem> {
        self.selection
    }

    /// Position of the selection in `sorted`.
    #[must_use]
    pub fn current_index(&self, sorted: &[&Review]) -> Option<usize> {
        current_index(self.selection, sorted)
    }

    /// Selects the following review. Returns false at the end of the list
    /// or when the selection is not a review in `sorted`.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::catalog::Review;
    /// use storefront::reviews::{DetailItem, DetailNavigator};
    ///
    /// let reviews = [Review::new(1), Review::new(2)];
    /// let sorted: Vec<&Review> = reviews.iter().collect();
    /// let mut navigator = DetailNavigator::default();
    /// navigator.select(DetailItem::Review(1));
    ///
    /// assert!(navigator.next(&sorted));
    /// assert_eq!(navigator.selection(), Some(DetailItem::Review(2)));
    /// assert!(!navigator.next(&sorted), "already at the last review");
    /// ```
    pub fn next(&mut self, sorted: &[&Review]) -> bool {
        let Some(index) = self.current_index(sorted) else {
            return false;
        };
        self.select_at(sorted, index.saturating_add(1))
    }

    /// Selects the preceding review. Returns false at the start of the list
    /// or when the selection is not a review in `sorted`.
    pub fn previous(&mut self, sorted: &[&Review]) -> bool {
        let Some(index) = self.current_index(sorted) else {
            return false;
        };
        let Some(target) = index.checked_sub(1) else {
            return false;
        };
        self.select_at(sorted, target)
    }

    /// Starts a swipe at horizontal position `x`.
    pub const fn begin_swipe(&mut self, x: i64) {
        self.gesture.begin(x);
    }

    /// Records the latest swipe position.
    pub const fn update_swipe(&mut self, x: i64) {
        self.gesture.update(x);
    }

    /// Ends the swipe and navigates if it passed the threshold.
    ///
    /// Returns true when the selection changed.
    pub fn end_swipe(&mut self, sorted: &[&Review]) -> bool {
        match self.gesture.end() {
            Some(SwipeDirection::Next) => self.next(sorted),
            Some(SwipeDirection::Previous) => self.previous(sorted),
            None => false,
        }
    }

    /// Returns true while a swipe is in progress.
    #[must_use]
    pub const fn is_swiping(&self) -> bool {
        self.gesture.is_active()
    }

    fn select_at(&mut self, sorted: &[&Review], index: usize) -> bool {
        let Some(review) = sorted.get(index) else {
            return false;
        };
        self.selection = Some(DetailItem::Review(review.id));
        true
    }
}
