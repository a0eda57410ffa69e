// src/features/registry.rs
//! Per-run table of user transformations, keyed by trigger name.
//!
//! A trigger is a canonical feature name (`battery_hl`). When the expander
//! meets that name it hands the raw value to the transformation, which
//! returns the derived features to store instead.

use std::collections::HashMap;
use std::fmt;

use log::{info, warn};
use serde_json::Value;

use crate::config::consts::PARSER_PREFIX;
use crate::core::sanitize::normalize_label;
use crate::error::{FeatureError, Result};
use super::FeatureValue;

/// Transformation signature: raw spec value → ordered derived features.
pub type ParseFn = dyn Fn(&Value) -> Vec<(String, FeatureValue)>;

/// A transformation plus the trigger it answers to.
pub struct Parser {
    trigger: String,
    /// What the caller called it; reported when the trigger is unusable
    name: String,
    func: Box<ParseFn>,
}

impl Parser {
    pub fn new<F>(trigger: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Vec<(String, FeatureValue)> + 'static,
    {
        let trigger = trigger.into();
        Self { name: trigger.clone(), trigger, func: Box::new(func) }
    }

    /// Naming-convention constructor: `parse_battery_hl` answers to `battery_hl`.
    /// A name without the prefix yields an empty trigger, which registration rejects.
    pub fn named<F>(fn_name: &str, func: F) -> Self
    where
        F: Fn(&Value) -> Vec<(String, FeatureValue)> + 'static,
    {
        let trigger = fn_name.strip_prefix(PARSER_PREFIX).unwrap_or_default();
        Self { name: s!(fn_name), ..Self::new(trigger, func) }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn apply(&self, raw: &Value) -> Vec<(String, FeatureValue)> {
        (self.func)(raw)
    }

    /// Triggers are matched verbatim against derived feature names, so
    /// they have to already be in normalized form.
    fn is_canonical(&self) -> bool {
        !self.trigger.is_empty() && normalize_label(&self.trigger) == self.trigger
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").field("trigger", &self.trigger).finish_non_exhaustive()
    }
}

#[derive(Default, Debug)]
pub struct ParserRegistry {
    by_trigger: HashMap<String, Parser>,
    order: Vec<String>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parser. `Ok(false)` when the trigger is already taken:
    /// the first registration stays, the newcomer is dropped with a warning.
    pub fn register(&mut self, parser: Parser) -> Result<bool> {
        self.insert(parser, None)
    }

    /// Add parsers in order, stopping at the first malformed one.
    /// Everything before it stays registered. Returns how many were added.
    pub fn register_all<I>(&mut self, parsers: I) -> Result<usize>
    where
        I: IntoIterator<Item = Parser>,
    {
        let mut added = 0;
        for (index, parser) in parsers.into_iter().enumerate() {
            if self.insert(parser, Some(index))? {
                added += 1;
            }
        }
        Ok(added)
    }

    fn insert(&mut self, parser: Parser, index: Option<usize>) -> Result<bool> {
        if !parser.is_canonical() {
            return Err(FeatureError::MalformedParser { index, name: parser.name });
        }
        if self.by_trigger.contains_key(&parser.trigger) {
            warn!(
                "Parser for {} already exists; the new one was not added",
                parser.trigger
            );
            return Ok(false);
        }
        self.order.push(parser.trigger.clone());
        self.by_trigger.insert(parser.trigger.clone(), parser);
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.by_trigger.clear();
        self.order.clear();
        info!("All existing parsers have been cleared");
    }

    pub fn lookup(&self, name: &str) -> Option<&Parser> {
        self.by_trigger.get(name)
    }

    pub fn is_managed(&self, name: &str) -> bool {
        self.by_trigger.contains_key(name)
    }

    /// Triggers in registration order.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
