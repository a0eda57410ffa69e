// src/features/record.rs

use std::collections::HashMap;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::config::consts::{DEVICE_ID, MAKER_ID, MAKER_NAME, NOTES_FEATURE, SPECS_KEY};
use crate::core::sanitize::{is_sentinel_label, normalize_label};
use super::{expand, CorpusSchema, FeatureContext, FeatureValue};

/// Flat feature set of one device, built once from its raw catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceRecord {
    features: HashMap<String, FeatureValue>,
    /// Names in the order this record populated them
    populated: Vec<String>,
}

impl DeviceRecord {
    fn empty() -> Self {
        Self { features: HashMap::new(), populated: Vec::new() }
    }

    /// Identity first, then plain top-level fields as-is, then every entry of
    /// the nested specs group through the normalizer/expander.
    pub fn build(
        raw: &Map<String, Value>,
        device_id: &str,
        maker_name: &str,
        maker_id: u32,
        ctx: &mut FeatureContext,
    ) -> Self {
        let mut record = Self::empty();
        record.populate(NOTES_FEATURE, FeatureValue::Notes(Map::new()), &mut ctx.schema);

        record.populate(MAKER_NAME, maker_name.into(), &mut ctx.schema);
        record.populate(MAKER_ID, maker_id.into(), &mut ctx.schema);
        record.populate(DEVICE_ID, device_id.into(), &mut ctx.schema);

        for (info_name, info) in raw {
            if info_name == SPECS_KEY { continue; }
            record.populate(info_name, FeatureValue::from_raw(info), &mut ctx.schema);
        }

        match raw.get(SPECS_KEY) {
            Some(Value::Object(specs)) => record.add_specs(specs, ctx),
            Some(other) => warn!(
                "{device_id}: {SPECS_KEY} is not an object (got {}), specs skipped",
                kind_of(other)
            ),
            None => warn!("{device_id}: no {SPECS_KEY} group"),
        }

        record
    }

    fn add_specs(&mut self, specs: &Map<String, Value>, ctx: &mut FeatureContext) {
        for (label, value) in specs {
            let name = normalize_label(label);
            if is_sentinel_label(&name) {
                warn!("Spec {label:?} has no usable name, skipped");
                continue;
            }
            match value {
                Value::Object(group) => expand::flatten_group(self, &name, group, ctx),
                _ => { self.populate(&name, FeatureValue::from_raw(value), &mut ctx.schema); }
            }
        }
    }

    /// First write wins; a repeat name is logged and ignored.
    /// Every name that lands here is also added to `schema`.
    pub(crate) fn populate(&mut self, name: &str, value: FeatureValue, schema: &mut CorpusSchema) -> bool {
        if self.features.contains_key(name) {
            warn!("Feature {name} already set on this device, later value dropped");
            return false;
        }
        self.features.insert(s!(name), value);
        self.populated.push(s!(name));
        schema.register(name);
        true
    }

    /// Keep the first note per parent spec.
    pub(crate) fn add_note(&mut self, parent: &str, note: &Value) -> bool {
        let Some(FeatureValue::Notes(notes)) = self.features.get_mut(NOTES_FEATURE) else {
            return false;
        };
        if notes.contains_key(parent) {
            debug!("Note for {parent} already present, later note dropped");
            return false;
        }
        notes.insert(s!(parent), note.clone());
        true
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.features.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }

    /// Populated names in discovery order.
    pub fn feature_names(&self) -> &[String] {
        &self.populated
    }

    pub fn to_map(&self) -> HashMap<String, FeatureValue> {
        self.features.clone()
    }

    pub fn notes(&self) -> Option<&Map<String, Value>> {
        self.features.get(NOTES_FEATURE).and_then(FeatureValue::as_notes)
    }

    pub fn device_id(&self) -> Option<&str> {
        self.features.get(DEVICE_ID).and_then(FeatureValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.populated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.populated.is_empty()
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null      => "null",
        Value::Bool(_)   => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object",
    }
}
