// src/core/mod.rs

pub mod sanitize;

pub use sanitize::{is_sentinel_label, is_sentinel_value, maker_prefix, normalize_label};
