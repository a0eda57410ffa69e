// src/error.rs
use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeatureError>;

#[derive(Debug, Error)]
pub enum FeatureError {
    /// A parser whose trigger name cannot be derived or is not canonical.
    /// `index` is the position inside a batch registration, if any.
    #[error("parser {} is malformed: {name:?} does not name a canonical trigger", index_text(.index))]
    MalformedParser { index: Option<usize>, name: String },

    #[error("malformed catalog at {path}: expected {expected}")]
    Malformed { path: String, expected: &'static str },

    #[error("catalog is empty; nothing to build a table from")]
    EmptyCatalog,

    #[error("no device records; a table needs at least one row")]
    EmptyRecords,

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn index_text(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("at index {i}"),
        None    => s!("argument"),
    }
}
