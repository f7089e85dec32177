use crate::domain::ports::DEFAULT_WINDOW_SIZE;

/// Sliding view over the category strip.
///
/// The offset is always kept within `0..=max_offset()`; shift requests past
/// either end are ignored rather than wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWindow {
    categories: Vec<String>,
    window_size: usize,
    offset: usize,
}

impl CategoryWindow {
    pub fn new(categories: Vec<String>) -> Self {
        Self::with_window_size(categories, DEFAULT_WINDOW_SIZE)
    }

    pub fn with_window_size(categories: Vec<String>, window_size: usize) -> Self {
        Self {
            categories,
            window_size: window_size.max(1),
            offset: 0,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.categories.len().saturating_sub(self.window_size)
    }

    pub fn can_shift_left(&self) -> bool {
        self.offset > 0
    }

    pub fn can_shift_right(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Returns `true` if the window moved.
    pub fn shift_left(&mut self) -> bool {
        if !self.can_shift_left() {
            return false;
        }
        self.offset -= 1;
        tracing::trace!("Category window shifted left to offset {}", self.offset);
        true
    }

    /// Returns `true` if the window moved.
    pub fn shift_right(&mut self) -> bool {
        if !self.can_shift_right() {
            return false;
        }
        self.offset += 1;
        tracing::trace!("Category window shifted right to offset {}", self.offset);
        true
    }

    /// Labels currently visible; fewer than `window_size` when the strip is short.
    pub fn visible_window(&self) -> &[String] {
        let end = (self.offset + self.window_size).min(self.categories.len());
        &self.categories[self.offset..end]
    }

    /// Label of the n-th visible chip.
    pub fn visible_label(&self, position: usize) -> Option<&str> {
        self.visible_window().get(position).map(String::as_str)
    }
}
