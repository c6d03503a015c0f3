//! Horizontal swipe gesture recognition.

/// Default minimum displacement, in pixels, for a swipe to navigate.
pub const DEFAULT_SWIPE_THRESHOLD: u32 = 50;

/// Outcome of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward swipe: advance to the next item.
    Next,
    /// Rightward swipe: return to the previous item.
    Previous,
}

/// Tracks one horizontal drag between touch start and touch end.
///
/// Displacement is measured from the start position to the latest update.
/// A gesture only navigates when its magnitude strictly exceeds the
/// threshold; the state resets when the gesture ends, whatever the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeGesture {
    threshold: u32,
    start_x: Option<i64>,
    current_x: Option<i64>,
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeGesture {
    /// Creates an idle gesture tracker.
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self {
            threshold,
            start_x: None,
            current_x: None,
        }
    }

    /// Returns the navigation threshold in pixels.
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns true between [`Self::begin`] and [`Self::end`].
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Starts a gesture at horizontal position `x`.
    pub const fn begin(&mut self, x: i64) {
        self.start_x = Some(x);
        self.current_x = Some(x);
    }

    /// Records the latest horizontal position. Ignored when idle.
    pub const fn update(&mut self, x: i64) {
        if self.start_x.is_some() {
            self.current_x = Some(x);
        }
    }

    /// Net displacement so far; negative values point left.
    #[must_use]
    pub const fn displacement(&self) -> i64 {
        match (self.start_x, self.current_x) {
            (Some(start), Some(current)) => current.saturating_sub(start),
            _ => 0,
        }
    }

    /// Ends the gesture, returning the navigation it triggers, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::reviews::{SwipeDirection, SwipeGesture};
    ///
    /// let mut gesture = SwipeGesture::default();
    /// gesture.begin(200);
    /// gesture.update(149);
    /// assert_eq!(gesture.end(), Some(SwipeDirection::Next));
    ///
    /// gesture.begin(200);
    /// gesture.update(250);
    /// assert_eq!(gesture.end(), None, "exactly the threshold does not navigate");
    /// ```
    pub fn end(&mut self) -> Option<SwipeDirection> {
        let displacement = self.displacement();
        self.start_x = None;
        self.current_x = None;

        let threshold = i64::from(self.threshold);
        if displacement < threshold.saturating_neg() {
            Some(SwipeDirection::Next)
        } else if displacement > threshold {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }
}
