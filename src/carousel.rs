// SPDX-License-Identifier: MPL-2.0
//! Slide cursor for the per-suite photo carousels.
//!
//! Unlike the gallery lightbox, a carousel owns its position: it is a
//! plain index over a slide count, stepped with wraparound. The slides
//! themselves live with the caller; the cursor only tracks where it is.

/// Position within a fixed number of slides, wrapping at both ends.
///
/// # Example
///
/// ```
/// use araucarias::carousel::SlideCursor;
///
/// let mut cursor = SlideCursor::new(4);
/// cursor.rewind();
/// assert_eq!(cursor.index(), 3); // Wrapped to the last slide
/// assert_eq!(cursor.position(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    /// Creates a cursor over `len` slides, starting at the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Returns the current zero-based slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the 1-based position for "N / M" counters, or `0` when
    /// there are no slides.
    #[must_use]
    pub fn position(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.index + 1
        }
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the cursor has no slides to point at.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Steps to the next slide, wrapping from the last back to the first.
    /// Does nothing when there are no slides.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Steps to the previous slide, wrapping from the first to the last.
    /// Does nothing when there are no slides.
    pub fn rewind(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps straight to a slide, as the indicator dots do.
    /// Out-of-range targets are ignored.
    pub fn jump(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

impl Default for SlideCursor {
    fn default() -> Self {
        Self::new(0)
    }
}
