// src/features/schema.rs

use std::collections::HashSet;

use crate::config::consts::NOTES_FEATURE;

/// Union of every feature name any record has populated, in first-seen order.
/// Only grows.
#[derive(Clone, Debug)]
pub struct CorpusSchema {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl Default for CorpusSchema {
    fn default() -> Self {
        let mut schema = Self { names: Vec::new(), seen: HashSet::new() };
        schema.register(NOTES_FEATURE);
        schema
    }
}

impl CorpusSchema {
    /// Fresh schema holding only the reserved notes column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent; `true` if the name is new.
    pub fn register(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(s!(name));
        self.names.push(s!(name));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true: the notes column is always there.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
