//! Dataset viewer
//!
//! Glues the pieces together for a rendering host: a viewport over the
//! rows, uniform cell access through the adapter, and the inspector state
//! machine wired to the snapshot's dimensions. The host draws; this type
//! decides what is visible and what the inspector is looking at.

use crate::adapter::DatasetAdapter;
use crate::detail::RecordDetailView;
use crate::error::Result;
use crate::format::truncate_string;
use crate::inspector::InspectorState;
use crate::record::{Dataset, Record};
use crate::viewport::Viewport;

/// Rows sampled when sizing columns.
const WIDTH_SAMPLE_ROWS: usize = 20;

/// A windowed table view over a dataset snapshot with inspector state.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use visor::{Dataset, DatasetViewer, Record};
///
/// let dataset = Dataset::new(vec![
///     Record::from_value(json!({"id": "a", "score": 1.0}))?,
///     Record::from_value(json!({"id": "b", "score": 2.0}))?,
/// ]);
/// let mut viewer = DatasetViewer::new(dataset);
/// viewer.open_inspector(1, 0)?;
/// assert_eq!(viewer.inspector_record()?.unwrap().get("id"), Some(&json!("b")));
/// # Ok::<(), visor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetViewer {
    adapter: DatasetAdapter,
    viewport: Viewport,
    inspector: InspectorState,
    column_widths: Vec<u16>,
    display_width: u16,
    visible_rows: u16,
}

impl DatasetViewer {
    /// Create a viewer with default dimensions (80x24).
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self::with_dimensions(dataset, 80, 24)
    }

    /// Create a viewer with specific display dimensions.
    ///
    /// Height includes one header line.
    #[must_use]
    pub fn with_dimensions(dataset: Dataset, width: u16, height: u16) -> Self {
        let adapter = DatasetAdapter::new(dataset);
        let visible_rows = height.saturating_sub(1);
        let column_widths = adapter.calculate_column_widths(width, WIDTH_SAMPLE_ROWS);
        let viewport = Viewport::new(adapter.row_count(), visible_rows as usize);

        Self {
            adapter,
            viewport,
            inspector: InspectorState::Closed,
            column_widths,
            display_width: width,
            visible_rows,
        }
    }

    /// Update display dimensions, recalculating widths and the window.
    pub fn set_dimensions(&mut self, width: u16, height: u16) {
        self.display_width = width;
        self.visible_rows = height.saturating_sub(1);
        self.column_widths = self
            .adapter
            .calculate_column_widths(width, WIDTH_SAMPLE_ROWS);
        self.viewport.set_visible_rows(self.visible_rows as usize);
    }

    /// Replace the dataset snapshot with a fresh one.
    ///
    /// This is the refresh action: the previous snapshot is discarded
    /// wholesale, the window re-clamps, and any inspector state that no
    /// longer resolves against the new snapshot collapses to closed rather
    /// than being reinterpreted.
    pub fn refresh(&mut self, dataset: Dataset) {
        self.adapter = DatasetAdapter::new(dataset);
        self.column_widths = self
            .adapter
            .calculate_column_widths(self.display_width, WIDTH_SAMPLE_ROWS);
        self.viewport.set_total_rows(self.adapter.row_count());
        self.inspector = self
            .inspector
            .sanitize(self.adapter.row_count(), self.adapter.column_count());
    }

    /// The adapter over the current snapshot.
    #[inline]
    #[must_use]
    pub fn adapter(&self) -> &DatasetAdapter {
        &self.adapter
    }

    /// Total row count.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.adapter.row_count()
    }

    /// Column count.
    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.adapter.column_count()
    }

    /// Check whether the snapshot has no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapter.is_empty()
    }

    /// Calculated column widths.
    #[inline]
    #[must_use]
    pub fn column_widths(&self) -> &[u16] {
        &self.column_widths
    }

    /// Number of data rows shown at once.
    #[inline]
    #[must_use]
    pub fn visible_row_count(&self) -> u16 {
        self.visible_rows
    }

    // Window and selection

    /// Current scroll offset.
    #[inline]
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.viewport.offset()
    }

    /// Set the scroll offset, clamped.
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.viewport.set_offset(offset);
    }

    /// Scroll down one row.
    pub fn scroll_down(&mut self) {
        self.viewport.scroll_down();
    }

    /// Scroll up one row.
    pub fn scroll_up(&mut self) {
        self.viewport.scroll_up();
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) {
        self.viewport.page_down();
    }

    /// Scroll up one page.
    pub fn page_up(&mut self) {
        self.viewport.page_up();
    }

    /// Jump to the first row.
    pub fn home(&mut self) {
        self.viewport.home();
    }

    /// Jump to the last page.
    pub fn end(&mut self) {
        self.viewport.end();
    }

    /// Currently selected row.
    #[inline]
    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        self.viewport.selected()
    }

    /// Select a row, scrolling it into view.
    pub fn select_row(&mut self, row: usize) {
        self.viewport.select(Some(row));
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.viewport.select(None);
    }

    /// Select the next row.
    pub fn select_next(&mut self) {
        self.viewport.select_next();
    }

    /// Select the previous row.
    pub fn select_prev(&mut self) {
        self.viewport.select_prev();
    }

    // Inspector

    /// Current inspector state.
    #[inline]
    #[must_use]
    pub fn inspector(&self) -> InspectorState {
        self.inspector
    }

    /// Restore inspector state from a navigation token, discarding anything
    /// that does not resolve against the current snapshot.
    pub fn restore_inspector(&mut self, token: Option<u64>) {
        self.inspector = InspectorState::from_token(token)
            .sanitize(self.adapter.row_count(), self.adapter.column_count());
    }

    /// The navigation token for the current inspector state.
    #[must_use]
    pub fn inspector_token(&self) -> Option<u64> {
        self.inspector.token()
    }

    /// Open the inspector on a cell.
    ///
    /// # Errors
    ///
    /// Propagates codec errors when there are no columns or the column
    /// index is out of range.
    pub fn open_inspector(&mut self, row: usize, col: usize) -> Result<()> {
        self.inspector = self.inspector.open(row, col, self.adapter.column_count())?;
        Ok(())
    }

    /// Close the inspector.
    pub fn close_inspector(&mut self) {
        self.inspector = self.inspector.close();
    }

    /// Move the inspector to the next record; no-op at the last row or when
    /// closed.
    ///
    /// # Errors
    ///
    /// Propagates codec errors when the open address cannot be decoded.
    pub fn inspector_next(&mut self) -> Result<()> {
        self.inspector = self
            .inspector
            .next(self.adapter.row_count(), self.adapter.column_count())?;
        Ok(())
    }

    /// Move the inspector to the previous record; no-op at row 0 or when
    /// closed.
    ///
    /// # Errors
    ///
    /// Propagates codec errors when the open address cannot be decoded.
    pub fn inspector_prev(&mut self) -> Result<()> {
        self.inspector = self.inspector.prev(self.adapter.column_count())?;
        Ok(())
    }

    /// The full record the inspector is open on, if any.
    ///
    /// # Errors
    ///
    /// Returns a bounds error when the open address points past the
    /// snapshot (a stale token the host never sanitized).
    pub fn inspector_record(&self) -> Result<Option<&Record>> {
        match self.inspector.selected_row(self.adapter.column_count())? {
            Some(row) => Ok(Some(self.adapter.record(row)?)),
            None => Ok(None),
        }
    }

    /// A detail view of the open record, sized to this viewer's display.
    ///
    /// # Errors
    ///
    /// Same errors as [`DatasetViewer::inspector_record`].
    pub fn inspector_detail(&self) -> Result<Option<RecordDetailView>> {
        match self.inspector.selected_row(self.adapter.column_count())? {
            Some(row) => {
                self.adapter.record(row)?;
                Ok(RecordDetailView::with_dimensions(
                    &self.adapter,
                    row,
                    self.display_width,
                    self.visible_rows.saturating_add(1),
                ))
            }
            None => Ok(None),
        }
    }

    // Rendering helpers

    /// Column headers truncated to their widths.
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        self.adapter
            .field_names()
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let width = self.column_widths.get(i).copied().unwrap_or(10) as usize;
                truncate_string(name, width)
            })
            .collect()
    }

    /// Visible rows as formatted cell strings.
    #[must_use]
    pub fn visible_rows_data(&self) -> Vec<Vec<String>> {
        self.viewport
            .visible_range()
            .map(|row| self.format_row(row))
            .collect()
    }

    /// Render the header line.
    #[must_use]
    pub fn render_header_line(&self) -> String {
        self.headers().join(" ")
    }

    /// Render the header and the visible rows as lines.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.visible_rows as usize + 1);
        lines.push(self.render_header_line());
        for row in self.viewport.visible_range() {
            lines.push(self.format_row(row).join(" "));
        }
        lines
    }

    /// Check whether a row is the selection.
    #[must_use]
    pub fn is_row_selected(&self, row: usize) -> bool {
        self.viewport.selected() == Some(row)
    }

    fn format_row(&self, row: usize) -> Vec<String> {
        (0..self.adapter.column_count())
            .map(|col| {
                let width = self.column_widths.get(col).copied().unwrap_or(10) as usize;
                match self.adapter.cell_text(row, col) {
                    Ok(Some(text)) => truncate_string(&text, width),
                    Ok(None) => String::new(),
                    Err(_) => "<error>".to_string(),
                }
            })
            .collect()
    }
}
