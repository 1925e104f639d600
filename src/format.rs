//! Cell formatting utilities
//!
//! Turns JSON-like field values into single-line display strings for table
//! cells, with width-aware truncation for narrow columns.

use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a field value as a single-line display string.
///
/// Strings render verbatim, numbers and booleans via their canonical text,
/// null as `NULL`, and arrays/objects as compact JSON previews. The result
/// is what a table cell shows; the inspector shows the structured value.
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| "<invalid>".to_string())
        }
    }
}

/// Truncate a string to fit within a maximum display width.
///
/// Width is visual width (`unicode-width`), not byte or char count, so CJK
/// text truncates correctly. Adds a two-dot ellipsis when truncation occurs;
/// widths below 3 just take leading characters.
#[must_use]
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if max_width < 3 {
        return take_width(s, max_width);
    }
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = take_width(s, max_width.saturating_sub(2));
    result.push_str("..");
    result
}

/// Calculate the visual display width of a string.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Take leading characters up to a visual width budget.
fn take_width(s: &str, budget: usize) -> String {
    let mut result = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        result.push(ch);
        used += w;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn f_format_string() {
        assert_eq!(format_value(&json!("hello")), "hello");
    }

    #[test]
    fn f_format_number_integer() {
        assert_eq!(format_value(&json!(42)), "42");
    }

    #[test]
    fn f_format_number_float() {
        assert_eq!(format_value(&json!(0.5)), "0.5");
    }

    #[test]
    fn f_format_boolean() {
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(false)), "false");
    }

    #[test]
    fn f_format_null() {
        assert_eq!(format_value(&json!(null)), "NULL");
    }

    #[test]
    fn f_format_array_compact() {
        assert_eq!(format_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn f_format_object_compact() {
        assert_eq!(format_value(&json!({"g": 1})), r#"{"g":1}"#);
    }

    #[test]
    fn f_truncate_short() {
        assert_eq!(truncate_string("hello", 20), "hello");
    }

    #[test]
    fn f_truncate_exact() {
        assert_eq!(truncate_string("hello", 5), "hello");
    }

    #[test]
    fn f_truncate_long() {
        let result = truncate_string("hello world", 8);
        assert_eq!(result, "hello ..");
        assert!(display_width(&result) <= 8);
    }

    #[test]
    fn f_truncate_tiny_width() {
        assert_eq!(truncate_string("hello", 2), "he");
        assert_eq!(truncate_string("hello", 0), "");
    }

    #[test]
    fn f_truncate_wide_chars() {
        // Each CJK character is two columns wide.
        let result = truncate_string("データセット", 6);
        assert!(
            display_width(&result) <= 6,
            "FALSIFIED: width {} exceeds 6",
            display_width(&result)
        );
        assert!(result.ends_with(".."));
    }

    #[test]
    fn f_display_width_ascii() {
        assert_eq!(display_width("abc"), 3);
    }

    #[test]
    fn f_display_width_cjk() {
        assert_eq!(display_width("デー"), 4);
    }
}
