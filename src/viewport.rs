//! Viewport windowing over dataset rows
//!
//! Tracks which slice of a row sequence is visible and which row is
//! selected, with all movement clamped to bounds. The core never renders;
//! the host asks for the visible range and draws it however it likes.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A bounded window over a sequence of rows, with an optional selection.
///
/// Offsets are clamped so the window never runs past the end, and the
/// selection is clamped to the row count. Shrinking the total (a dataset
/// refresh) re-clamps both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    offset: usize,
    total_rows: usize,
    visible_rows: usize,
    selected: Option<usize>,
}

impl Viewport {
    /// Create a viewport over `total_rows` rows showing `visible_rows` at a
    /// time.
    #[must_use]
    pub fn new(total_rows: usize, visible_rows: usize) -> Self {
        Self {
            offset: 0,
            total_rows,
            visible_rows,
            selected: None,
        }
    }

    /// First visible row index.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Set the first visible row, clamped to valid bounds.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    /// Total row count.
    #[inline]
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Number of rows shown at once.
    #[inline]
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Replace the total row count, re-clamping offset and selection.
    pub fn set_total_rows(&mut self, total: usize) {
        self.total_rows = total;
        self.offset = self.offset.min(self.max_offset());
        if let Some(sel) = self.selected {
            if sel >= total {
                self.selected = total.checked_sub(1);
            }
        }
    }

    /// Replace the visible row count, re-clamping the offset.
    pub fn set_visible_rows(&mut self, visible: usize) {
        self.visible_rows = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Currently selected row, if any.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Set the selected row, clamping to the last row and scrolling it into
    /// view.
    pub fn select(&mut self, row: Option<usize>) {
        self.selected = match row {
            Some(r) if r >= self.total_rows => self.total_rows.checked_sub(1),
            other => other,
        };
        if let Some(sel) = self.selected {
            self.ensure_visible(sel);
        }
    }

    /// Move the selection down one row; selects the first row when nothing
    /// is selected. No-op at the last row.
    pub fn select_next(&mut self) {
        let next = match self.selected {
            Some(sel) if sel + 1 < self.total_rows => Some(sel + 1),
            Some(sel) => Some(sel),
            None if self.total_rows > 0 => Some(0),
            None => None,
        };
        self.select(next);
    }

    /// Move the selection up one row; selects the first row when nothing is
    /// selected. No-op at row zero.
    pub fn select_prev(&mut self) {
        let prev = match self.selected {
            Some(sel) if sel > 0 => Some(sel - 1),
            Some(sel) => Some(sel),
            None if self.total_rows > 0 => Some(0),
            None => None,
        };
        self.select(prev);
    }

    /// Scroll down one row.
    pub fn scroll_down(&mut self) {
        self.set_offset(self.offset.saturating_add(1));
    }

    /// Scroll up one row.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) {
        self.set_offset(self.offset.saturating_add(self.visible_rows.max(1)));
    }

    /// Scroll up one page.
    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.visible_rows.max(1));
    }

    /// Jump to the first row.
    pub fn home(&mut self) {
        self.offset = 0;
    }

    /// Jump so the last row is visible.
    pub fn end(&mut self) {
        self.offset = self.max_offset();
    }

    /// Scroll the minimum amount needed to bring a row into view.
    pub fn ensure_visible(&mut self, row: usize) {
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.visible_rows {
            self.offset = row.saturating_sub(self.visible_rows.saturating_sub(1));
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// The range of row indices currently in view.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.visible_rows).min(self.total_rows);
        self.offset..end
    }

    /// Check whether a row index is currently in view.
    #[must_use]
    pub fn is_visible(&self, row: usize) -> bool {
        self.visible_range().contains(&row)
    }

    /// Whether the content exceeds the window.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.total_rows > self.visible_rows
    }

    fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }
}
