//! Review presentation controllers.
//!
//! - [`sort`] orders the fetched reviews for display.
//! - [`reveal`] stages the timed toast reveal of the newest reviews.
//! - [`navigator`] and [`swipe`] page through the sorted reviews in the
//!   detail view.
//!
//! None of these perform I/O; they operate on already-fetched reviews.

pub mod navigator;
pub mod reveal;
pub mod sort;
pub mod swipe;

pub use navigator::{DetailItem, DetailNavigator, current_index};
pub use reveal::{RevealScheduler, RevealState, RevealTask, RevealTimings, TimerTicket};
pub use sort::{SortOrder, UnknownSortOrder, sort_reviews};
pub use swipe::{DEFAULT_SWIPE_THRESHOLD, SwipeDirection, SwipeGesture};
