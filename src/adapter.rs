//! Dataset adapter for rendering hosts
//!
//! Provides uniform tabular access over a [`Dataset`]: the host gets
//! explicit row/column counts, an ordered column list, formatted cell
//! strings, and a per-column render strategy. The host owns column order
//! and count as plain data; nothing here depends on any table-rendering
//! library's internal model.

use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::error::{Error, Result};
use crate::format::format_value;
use crate::record::{Dataset, Record};
use crate::schema::{FieldSchema, RenderStrategy};

/// Cap on any single column's sampled width, in display columns.
const MAX_COLUMN_WIDTH: usize = 50;

/// Uniform tabular access over a dataset snapshot.
///
/// Column order and count come from the dataset's sample-inferred schema.
/// Rows that lack a sampled field, or carry a different runtime type for
/// it, still render: the cell shows whatever value is actually there, or
/// blank when the field is absent.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use visor::{Dataset, DatasetAdapter, Record};
///
/// let dataset = Dataset::new(vec![
///     Record::from_value(json!({"id": "a", "score": 1.5}))?,
/// ]);
/// let adapter = DatasetAdapter::new(dataset);
/// assert_eq!(adapter.cell_text(0, 0)?, Some("a".to_string()));
/// # Ok::<(), visor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetAdapter {
    dataset: Dataset,
}

impl DatasetAdapter {
    /// Create an adapter over a dataset snapshot.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Create an adapter over an empty dataset.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            dataset: Dataset::empty(),
        }
    }

    /// The underlying dataset snapshot.
    #[inline]
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The schema inferred from the snapshot's sample record.
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &FieldSchema {
        self.dataset.schema()
    }

    /// Total row count.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.dataset.row_count()
    }

    /// Column count.
    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.dataset.column_count()
    }

    /// Check whether the snapshot has no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Field name for a column index.
    #[must_use]
    pub fn field_name(&self, col: usize) -> Option<&str> {
        self.schema().field(col).map(|(name, _)| name)
    }

    /// All field names in column order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.schema().field_names()
    }

    /// Render strategy for a column index.
    #[must_use]
    pub fn render_strategy(&self, col: usize) -> RenderStrategy {
        self.schema().render_strategy(col)
    }

    /// Get a record by row index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfBounds`] when `row` exceeds the snapshot.
    pub fn record(&self, row: usize) -> Result<&Record> {
        self.dataset.try_record(row)
    }

    /// Get the raw cell value.
    ///
    /// Returns `Ok(None)` when the record does not carry the sampled field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfBounds`] or [`Error::ColumnOutOfBounds`]
    /// for indices outside the snapshot.
    pub fn cell_value(&self, row: usize, col: usize) -> Result<Option<&Value>> {
        let record = self.dataset.try_record(row)?;
        let (name, _) = self.schema().field(col).ok_or(Error::ColumnOutOfBounds {
            requested: col,
            total: self.column_count(),
        })?;
        Ok(record.get(name))
    }

    /// Get a cell value as a single-line display string.
    ///
    /// # Errors
    ///
    /// Same bounds errors as [`DatasetAdapter::cell_value`].
    pub fn cell_text(&self, row: usize, col: usize) -> Result<Option<String>> {
        Ok(self.cell_value(row, col)?.map(format_value))
    }

    /// Calculate column widths for a display budget.
    ///
    /// Starts from header widths, widens by sampling up to `sample_rows`
    /// rows of content, then scales everything down proportionally if the
    /// total exceeds `max_width`. Visual widths come from `unicode-width`.
    #[must_use]
    pub fn calculate_column_widths(&self, max_width: u16, sample_rows: usize) -> Vec<u16> {
        let cols = self.column_count();
        if cols == 0 {
            return Vec::new();
        }

        let mut widths: Vec<u16> = self
            .field_names()
            .iter()
            .map(|name| clamp_width(UnicodeWidthStr::width(*name)))
            .collect();

        let sample_count = sample_rows.min(self.row_count());
        for row in 0..sample_count {
            for (col, width) in widths.iter_mut().enumerate() {
                if let Ok(Some(text)) = self.cell_text(row, col) {
                    *width = (*width).max(clamp_width(UnicodeWidthStr::width(text.as_str())));
                }
            }
        }

        for w in &mut widths {
            *w = (*w).max(3);
        }

        // One separator column between each pair.
        let separators = u16::try_from(cols.saturating_sub(1)).unwrap_or(u16::MAX);
        let available = max_width.saturating_sub(separators);

        // Sum in u32: thousands of 50-wide columns overflow u16.
        let total: u32 = widths.iter().map(|w| u32::from(*w)).sum();
        if total > u32::from(available) && available > 0 {
            let scale = f64::from(available) / f64::from(total);
            for w in &mut widths {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let scaled = (f64::from(*w) * scale) as u16;
                *w = scaled.max(3);
            }
        }

        widths
    }
}

fn clamp_width(width: usize) -> u16 {
    u16::try_from(width.min(MAX_COLUMN_WIDTH)).unwrap_or(u16::MAX)
}
