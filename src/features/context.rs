// src/features/context.rs

use std::collections::HashSet;

use super::{CorpusSchema, ParserRegistry};

/// Everything one processing run accumulates. A new run gets a new context;
/// nothing leaks between them.
#[derive(Debug, Default)]
pub struct FeatureContext {
    pub registry: ParserRegistry,
    pub(crate) schema: CorpusSchema,
    parsed: Vec<String>,
    parsed_seen: HashSet<String>,
}

impl FeatureContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run with parsers already registered.
    pub fn with_registry(registry: ParserRegistry) -> Self {
        Self { registry, ..Self::default() }
    }

    pub fn schema(&self) -> &CorpusSchema {
        &self.schema
    }

    /// Feature names that came out of a registered transformation, first-seen order.
    pub fn parsed_features(&self) -> &[String] {
        &self.parsed
    }

    pub(crate) fn mark_parsed(&mut self, name: &str) {
        if self.parsed_seen.insert(s!(name)) {
            self.parsed.push(s!(name));
        }
    }
}
