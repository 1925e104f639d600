//! Sample-based schema inference
//!
//! Classifies every field of a single representative record by inspecting
//! its runtime value. The classification drives the per-column rendering
//! choice: numeric columns display as plain text, everything else routes to
//! an expandable inspector cell.
//!
//! Classification reflects only the sample. If other records carry a
//! different type for the same field name, that is accepted silently; the
//! inferrer never looks past the one record it is given.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum nesting depth followed by [`FieldSchema::infer`].
///
/// Object fields at the bound are still classified as objects, but their
/// nested schema is left empty.
pub const MAX_INFER_DEPTH: usize = 32;

/// The inferred structural type of a field's value in one sample record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Classification {
    /// The null marker.
    Null,
    /// Textual value.
    String,
    /// Numeric value (integer or float alike).
    Number,
    /// Boolean value.
    Boolean,
    /// Ordered sequence; element types are not inspected.
    Array,
    /// Nested field mapping with its own recursively inferred schema.
    Object {
        /// Schema inferred from the nested mapping.
        schema: FieldSchema,
    },
}

impl Classification {
    /// How a rendering layer should display cells of this classification.
    ///
    /// The distinction is deliberately binary: numeric values render as
    /// plain text, every other classification routes to an expandable cell,
    /// regardless of the finer-grained type computed here.
    #[must_use]
    pub fn render_strategy(&self) -> RenderStrategy {
        match self {
            Self::Number => RenderStrategy::PlainText,
            _ => RenderStrategy::Expandable,
        }
    }

    /// Short lowercase name of the classification.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object { .. } => "object",
        }
    }

    fn of_value(value: &Value, depth: usize) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Array(_) => Self::Array,
            Value::Object(fields) => Self::Object {
                schema: if depth == 0 {
                    FieldSchema::empty()
                } else {
                    FieldSchema::infer_at_depth(fields, depth - 1)
                },
            },
        }
    }
}

/// How a cell should be displayed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Render the value inline as text.
    PlainText,
    /// Render with an affordance to open the record inspector.
    Expandable,
}

/// Per-field classifications inferred from one sample record.
///
/// Every field key present in the sample appears exactly once, in the
/// sample's insertion order. No field is invented or dropped. The host's
/// column order and column count both come from here.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use visor::{Classification, FieldSchema};
///
/// let sample = json!({"id": "a", "score": 0.5});
/// let schema = FieldSchema::infer(sample.as_object().unwrap());
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.get("score"), Some(&Classification::Number));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    fields: Vec<(String, Classification)>,
}

impl FieldSchema {
    /// An empty schema with no fields.
    #[must_use]
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Infer a schema from a single sample record.
    ///
    /// Walks the sample's entries in insertion order, classifying each by
    /// its runtime value and descending into nested mappings down to
    /// [`MAX_INFER_DEPTH`]. Re-running on the same sample yields an
    /// identical schema.
    #[must_use]
    pub fn infer(sample: &Map<String, Value>) -> Self {
        Self::infer_at_depth(sample, MAX_INFER_DEPTH)
    }

    fn infer_at_depth(sample: &Map<String, Value>, depth: usize) -> Self {
        let fields = sample
            .iter()
            .map(|(name, value)| (name.clone(), Classification::of_value(value, depth)))
            .collect();
        Self { fields }
    }

    /// Number of fields in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field's classification by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Classification> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Get a field's name and classification by column index.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<(&str, &Classification)> {
        self.fields.get(index).map(|(n, c)| (n.as_str(), c))
    }

    /// Field names in column order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate over `(name, classification)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Classification)> {
        self.fields.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Render strategy for a column index.
    ///
    /// Defaults to [`RenderStrategy::Expandable`] when the index is out of
    /// range, so a confused host errs toward the richer display.
    #[must_use]
    pub fn render_strategy(&self, index: usize) -> RenderStrategy {
        self.fields
            .get(index)
            .map_or(RenderStrategy::Expandable, |(_, c)| c.render_strategy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Map<String, Value> {
        json!({
            "a": "x",
            "b": 1,
            "c": true,
            "d": null,
            "e": [1, 2],
            "f": {"g": 1}
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn f_infer_classifications() {
        let schema = FieldSchema::infer(&sample());
        assert_eq!(schema.get("a"), Some(&Classification::String));
        assert_eq!(schema.get("b"), Some(&Classification::Number));
        assert_eq!(schema.get("c"), Some(&Classification::Boolean));
        assert_eq!(schema.get("d"), Some(&Classification::Null));
        assert_eq!(schema.get("e"), Some(&Classification::Array));
    }

    #[test]
    fn f_infer_nested_object() {
        let schema = FieldSchema::infer(&sample());
        let Some(Classification::Object { schema: nested }) = schema.get("f") else {
            panic!("FALSIFIED: 'f' should classify as object");
        };
        assert_eq!(nested.get("g"), Some(&Classification::Number));
        assert_eq!(nested.len(), 1);
    }

    #[test]
    fn f_infer_preserves_order() {
        let schema = FieldSchema::infer(&sample());
        assert_eq!(schema.field_names(), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn f_infer_every_key_exactly_once() {
        let schema = FieldSchema::infer(&sample());
        assert_eq!(schema.len(), 6);
        let names = schema.field_names();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped, "FALSIFIED: a key appeared twice");
    }

    #[test]
    fn f_infer_idempotent() {
        let s = sample();
        assert_eq!(FieldSchema::infer(&s), FieldSchema::infer(&s));
    }

    #[test]
    fn f_infer_empty_sample() {
        let schema = FieldSchema::infer(&Map::new());
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }

    #[test]
    fn f_infer_array_contents_opaque() {
        let s = json!({"mixed": [1, "two", null]})
            .as_object()
            .cloned()
            .unwrap();
        let schema = FieldSchema::infer(&s);
        assert_eq!(schema.get("mixed"), Some(&Classification::Array));
    }

    #[test]
    fn f_infer_depth_bound() {
        // Build nesting deeper than the bound; inference must terminate and
        // still classify the innermost reachable level as object.
        let mut value = json!({"leaf": 1});
        for _ in 0..(MAX_INFER_DEPTH + 4) {
            value = json!({ "inner": value });
        }
        let sample = value.as_object().cloned().unwrap();
        let schema = FieldSchema::infer(&sample);

        let mut current = &schema;
        let mut depth = 0;
        while let Some(Classification::Object { schema: nested }) = current.get("inner") {
            current = nested;
            depth += 1;
            if nested.is_empty() {
                break;
            }
        }
        assert!(depth <= MAX_INFER_DEPTH + 1);
        assert!(current.is_empty(), "FALSIFIED: depth bound not applied");
    }

    #[test]
    fn f_render_strategy_binary() {
        let schema = FieldSchema::infer(&sample());
        // b is the only number
        assert_eq!(schema.render_strategy(1), RenderStrategy::PlainText);
        for idx in [0usize, 2, 3, 4, 5] {
            assert_eq!(schema.render_strategy(idx), RenderStrategy::Expandable);
        }
    }

    #[test]
    fn f_render_strategy_out_of_range() {
        let schema = FieldSchema::infer(&sample());
        assert_eq!(schema.render_strategy(99), RenderStrategy::Expandable);
    }

    #[test]
    fn f_field_by_index() {
        let schema = FieldSchema::infer(&sample());
        let (name, class) = schema.field(2).unwrap();
        assert_eq!(name, "c");
        assert_eq!(class, &Classification::Boolean);
        assert!(schema.field(6).is_none());
    }

    #[test]
    fn f_type_names() {
        let schema = FieldSchema::infer(&sample());
        let names: Vec<&str> = schema.iter().map(|(_, c)| c.type_name()).collect();
        assert_eq!(
            names,
            vec!["string", "number", "boolean", "null", "array", "object"]
        );
    }

    #[test]
    fn f_schema_serde_round_trip() {
        let schema = FieldSchema::infer(&sample());
        let json = serde_json::to_string(&schema).unwrap();
        let back: FieldSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }
}
