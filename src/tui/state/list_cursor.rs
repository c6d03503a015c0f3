//! Cursor and scroll position for a vertical list.

/// Cursor position and scroll offset within a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed).
    pub position: usize,
    /// First visible row.
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Clamps the cursor to a list of `count` items.
    ///
    /// An empty list resets the cursor and scroll offset to zero.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.scroll_offset = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Moves the cursor down by one position within `count` items.
    pub const fn down(&mut self, count: usize) {
        if self.position.saturating_add(1) < count {
            self.position = self.position.saturating_add(1);
        }
    }

    /// Moves the cursor to `position`.
    pub const fn set(&mut self, position: usize) {
        self.position = position;
    }

    /// Adjusts the scroll offset so the cursor stays inside the viewport.
    pub const fn ensure_visible(&mut self, visible_height: usize) {
        if self.position < self.scroll_offset {
            self.scroll_offset = self.position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.position >= viewport_end {
            self.scroll_offset = self
                .position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
