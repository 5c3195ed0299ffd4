//! Selection regions
//! A region is a (start, end) pair of char offsets into a view's buffer

/// A selection region. `start` and `end` are char offsets; `end` is the
/// caret side and may sit before `start` when the selection is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Region { start, end }
    }

    /// A zero-width region (a bare caret) at `pos`.
    #[must_use]
    pub fn caret(pos: usize) -> Self {
        Region { start: pos, end: pos }
    }

    /// The lower offset of the region regardless of direction.
    #[must_use]
    pub fn begin(&self) -> usize {
        self.start.min(self.end)
    }

    /// The higher offset of the region regardless of direction.
    #[must_use]
    pub fn finish(&self) -> usize {
        self.start.max(self.end)
    }

    #[must_use]
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Collapse the region to a bare caret at its end position.
    #[must_use]
    pub fn collapsed_to_end(&self) -> Self {
        Region::caret(self.end)
    }
}
