//! Record detail view
//!
//! The expanded view of one full record, as shown in the inspector overlay:
//! every field with its value, wrapped to a display width, with an internal
//! scroll window for long content and a pretty-JSON rendition of the whole
//! record for export.

use unicode_width::UnicodeWidthChar;

use crate::adapter::DatasetAdapter;
use crate::format::format_value;
use crate::viewport::Viewport;

/// Detail view of a single record.
///
/// Built from the record itself, not the schema, so fields absent from the
/// sample still show up here.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use visor::{Dataset, DatasetAdapter, Record, RecordDetailView};
///
/// let dataset = Dataset::new(vec![
///     Record::from_value(json!({"id": "a", "score": 1.5}))?,
/// ]);
/// let adapter = DatasetAdapter::new(dataset);
/// let detail = RecordDetailView::new(&adapter, 0).unwrap();
/// assert!(detail.render().contains("id:"));
/// # Ok::<(), visor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordDetailView {
    row_index: usize,
    fields: Vec<(String, String)>,
    json: String,
    scroll: Viewport,
    display_width: u16,
}

impl RecordDetailView {
    /// Create a detail view for a row with default dimensions.
    ///
    /// Returns `None` when the row is out of bounds.
    #[must_use]
    pub fn new(adapter: &DatasetAdapter, row_index: usize) -> Option<Self> {
        Self::with_dimensions(adapter, row_index, 80, 24)
    }

    /// Create a detail view with specific display dimensions.
    #[must_use]
    pub fn with_dimensions(
        adapter: &DatasetAdapter,
        row_index: usize,
        width: u16,
        height: u16,
    ) -> Option<Self> {
        let record = adapter.record(row_index).ok()?;

        let fields: Vec<(String, String)> = record
            .iter()
            .map(|(name, value)| (name.to_string(), format_value(value)))
            .collect();
        let json = record.to_json_pretty();

        let total_lines = total_line_count(&fields, width);
        // Title and blank line stay pinned above the scrolling region.
        let visible_lines = height.saturating_sub(2) as usize;
        let scroll = Viewport::new(total_lines, visible_lines);

        Some(Self {
            row_index,
            fields,
            json,
            scroll,
            display_width: width,
        })
    }

    /// The row index on display.
    #[inline]
    #[must_use]
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a formatted field value by name.
    #[must_use]
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a field name/value pair by position.
    #[must_use]
    pub fn field_by_index(&self, index: usize) -> Option<(&str, &str)> {
        self.fields
            .get(index)
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The whole record as pretty-printed JSON.
    ///
    /// What the host copies to the clipboard on the inspector's copy
    /// action.
    #[must_use]
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Scroll down one line.
    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }

    /// Scroll up one line.
    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }

    /// Scroll down one page.
    pub fn page_down(&mut self) {
        self.scroll.page_down();
    }

    /// Scroll up one page.
    pub fn page_up(&mut self) {
        self.scroll.page_up();
    }

    /// Current scroll offset in lines.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    /// Render the visible slice of the detail view as lines.
    pub fn render_lines(&self) -> Vec<String> {
        let max_width = self.display_width.saturating_sub(4) as usize;
        let mut all_lines = Vec::new();

        all_lines.push(format!("Record #{}", self.row_index + 1));
        all_lines.push(String::new());

        for (name, value) in &self.fields {
            all_lines.push(format!("{name}:"));
            for line in wrap_text(value, max_width) {
                all_lines.push(format!("  {line}"));
            }
            all_lines.push(String::new());
        }

        let range = self.scroll.visible_range();
        let end = range.end.min(all_lines.len());
        let start = range.start.min(end);
        all_lines[start..end].to_vec()
    }

    /// Render the visible slice as a single string.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }
}

/// Total lines the detail view needs for all fields at a given width.
fn total_line_count(fields: &[(String, String)], width: u16) -> usize {
    let max_width = width.saturating_sub(4) as usize;
    fields
        .iter()
        .map(|(_, value)| 1 + wrap_text(value, max_width).len() + 1)
        .sum::<usize>()
        .saturating_add(2)
}

/// Hard-wrap text to a maximum visual width in display columns.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0;
        for ch in line.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            // Wide characters never straddle the boundary.
            if current_width + ch_width > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
