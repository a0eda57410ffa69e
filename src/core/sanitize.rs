// src/core/sanitize.rs

use serde_json::Value;

use crate::config::consts::NAN_TEXT;

fn is_label_sep(ch: char) -> bool {
    ch.is_whitespace() || ch == '-' || ch == '–'
}

/// Canonical feature key for a raw spec label.
///
/// Every run of whitespace, hyphens or en-dashes becomes one `_`, then the
/// whole thing is lowercased. `"Selfie Camera"` → `"selfie_camera"`.
/// An empty label stays empty; callers treat that as "no usable name".
pub fn normalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut prev_sep = false;
    for ch in label.chars() {
        if is_label_sep(ch) {
            if !prev_sep { out.push('_'); prev_sep = true; }
        } else {
            out.push(ch);
            prev_sep = false;
        }
    }
    out.to_lowercase()
}

/// Uppercased maker name with spaces and hyphens dropped.
/// `"Samsung Galaxy"` → `"SAMSUNGGALAXY"`.
pub fn maker_prefix(maker_name: &str) -> String {
    maker_name
        .split([' ', '-'])
        .map(|part| part.to_uppercase())
        .collect()
}

/// A (normalized) label that carries no usable name.
pub fn is_sentinel_label(label: &str) -> bool {
    label.is_empty() || label == NAN_TEXT
}

/// A nested sub-spec value that carries nothing worth keeping.
/// Absent (`null`) counts as the literal `"nan"`.
pub fn is_sentinel_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty() || s == NAN_TEXT,
        _ => false,
    }
}
