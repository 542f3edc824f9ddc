//! Shared utility functions for decoding model output.
//!
//! ## JSON Extraction Helpers
//!
//! Ergonomic helpers for reading loosely-typed `serde_json::Value`s:
//! - `json_string`, `json_string_or` - Extract strings
//! - `json_string_array` - Extract string arrays
//! - `json_bool`, `json_f64` - Extract primitives
//!
//! Models are inconsistent about scalar types (`"true"`, `"0.8"`), so the
//! primitive helpers accept the string spellings too.

use std::collections::HashSet;

// =============================================================================
// JSON Value Extraction Helpers
// =============================================================================

/// Extract string from JSON value by key.
#[inline]
pub fn json_string(value: &serde_json::Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(String::from)
}

/// Extract string with default value.
#[inline]
pub fn json_string_or(value: &serde_json::Value, key: &str, default: &str) -> String {
    json_string(value, key).unwrap_or_else(|| default.to_string())
}

/// Extract string array from JSON value by key.
///
/// A bare string is treated as a one-element array.
pub fn json_string_array(value: &serde_json::Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(serde_json::Value::Array(arr)) => arr
            .iter()
            .filter_map(|s| s.as_str().map(String::from))
            .collect(),
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Extract boolean by key, accepting `"true"`/`"false"` strings.
pub fn json_bool(value: &serde_json::Value, key: &str) -> Option<bool> {
    match value.get(key)? {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Extract a finite f64 by key, accepting numeric strings.
pub fn json_f64(value: &serde_json::Value, key: &str) -> Option<f64> {
    let number = match value.get(key)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

// =============================================================================
// Range Helpers
// =============================================================================

/// Clamp into [0, 1]; non-finite input maps to 0.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Clamp into [-1, 1]; non-finite input maps to 0.
#[inline]
pub fn clamp_signed_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

// =============================================================================
// String Utilities
// =============================================================================

/// Trim labels, drop empties and repeated entries (case-insensitive),
/// keeping first-seen order.
pub fn dedupe_labels(labels: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .filter(|l| seen.insert(l.to_lowercase()))
        .collect()
}

/// Capitalize the first character of a string.
#[inline]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Truncate to a character budget for log previews.
pub fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_helpers() {
        let v = json!({
            "name": "rust",
            "flag": "true",
            "score": "0.5",
            "tags": ["a", 1, "b"],
            "single": "solo"
        });
        assert_eq!(json_string(&v, "name").as_deref(), Some("rust"));
        assert_eq!(json_string_or(&v, "missing", "dflt"), "dflt");
        assert_eq!(json_bool(&v, "flag"), Some(true));
        assert_eq!(json_f64(&v, "score"), Some(0.5));
        assert_eq!(json_string_array(&v, "tags"), vec!["a", "b"]);
        assert_eq!(json_string_array(&v, "single"), vec!["solo"]);
        assert!(json_string_array(&v, "missing").is_empty());
    }

    #[test]
    fn test_json_f64_rejects_non_numbers() {
        let v = json!({"score": "high", "nan": "NaN"});
        assert_eq!(json_f64(&v, "score"), None);
        assert_eq!(json_f64(&v, "nan"), None);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_signed_unit(-7.0), -1.0);
        assert_eq!(clamp_signed_unit(0.25), 0.25);
    }

    #[test]
    fn test_dedupe_labels() {
        let labels = vec![
            " joy ".to_string(),
            "Joy".to_string(),
            "".to_string(),
            "hope".to_string(),
        ];
        assert_eq!(dedupe_labels(labels), vec!["joy", "hope"]);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("machine"), "Machine");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("abcdefghij", 4), "abcd...");
    }
}
