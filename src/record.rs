//! Record and dataset snapshot types
//!
//! A [`Record`] is one row of the dataset: an insertion-ordered mapping from
//! field name to JSON-like value. A [`Dataset`] is an immutable snapshot of
//! records with a schema inferred once, at construction, from the first
//! record. A "refresh" in the host is modeled as constructing an entirely
//! new `Dataset`; snapshots are never mutated in place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::schema::FieldSchema;

/// One row of the dataset: a field-name-to-value mapping.
///
/// Field order is insertion order and is what the inferred schema's column
/// order reflects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record from an ordered field mapping.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Create a record from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Data`] when the value is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::data(format!(
                "record must be a field mapping, got {other}"
            ))),
        }
    }

    /// Get a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Number of fields in this record.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// The underlying field mapping.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Render the whole record as pretty-printed JSON.
    ///
    /// This is what a host hands to the clipboard when the user copies the
    /// inspector content.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// An immutable snapshot of records with a cached, sample-inferred schema.
///
/// Length is fixed at creation. The schema is inferred from the first record
/// only; rows whose runtime types differ from the sample keep the sample's
/// classifications (a known, accepted limitation). Refreshing means building
/// a new `Dataset` and discarding this one, at which point any cell address
/// taken against this snapshot is stale and must be treated as out of range.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use visor::{Dataset, Record};
///
/// let rows = vec![
///     Record::from_value(json!({"id": "a", "score": 1.5}))?,
///     Record::from_value(json!({"id": "b", "score": 0.2}))?,
/// ];
/// let dataset = Dataset::new(rows);
/// assert_eq!(dataset.row_count(), 2);
/// assert_eq!(dataset.column_count(), 2);
/// # Ok::<(), visor::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
    schema: FieldSchema,
}

impl Dataset {
    /// Create a dataset snapshot, inferring the schema from the first
    /// record.
    ///
    /// An empty record list yields an empty schema and zero columns.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let schema = records
            .first()
            .map_or_else(FieldSchema::empty, |sample| {
                FieldSchema::infer(sample.fields())
            });
        Self { records, schema }
    }

    /// Create an empty dataset.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The cached schema inferred from the first record.
    #[must_use]
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Total row count.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Column count, equal to the sample record's field count.
    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Check whether the snapshot has no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by row index.
    #[must_use]
    pub fn record(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// Get a record by row index, or an error naming the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfBounds`] when `row` exceeds the snapshot.
    pub fn try_record(&self, row: usize) -> Result<&Record> {
        self.records.get(row).ok_or(Error::RowOutOfBounds {
            requested: row,
            total: self.records.len(),
        })
    }

    /// Iterate over records in row order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}
