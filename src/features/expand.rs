// src/features/expand.rs
//
// Raw spec entry → zero or more flat features on one record.

use log::debug;
use serde_json::{Map, Value};

use crate::core::sanitize::{is_sentinel_label, is_sentinel_value, normalize_label};
use super::{DeviceRecord, FeatureContext, FeatureValue};

/// Store `raw` under `name`, or under whatever the parser registered for
/// `name` derives from it. `name` is used exactly as given.
pub fn expand(record: &mut DeviceRecord, name: &str, raw: &Value, ctx: &mut FeatureContext) {
    let derived = match ctx.registry.lookup(name) {
        Some(parser) => parser.apply(raw),
        None => {
            record.populate(name, FeatureValue::from_raw(raw), &mut ctx.schema);
            return;
        }
    };

    for (feature, value) in derived {
        if record.populate(&feature, value, &mut ctx.schema) {
            ctx.mark_parsed(&feature);
        }
    }
}

/// One level of `sub label -> value` under an already-normalized `parent`.
///
/// | label usable | value usable | result                                |
/// |--------------|--------------|---------------------------------------|
/// | no           | no           | dropped                               |
/// | no           | yes          | note under `parent` (first one kept)  |
/// | yes          | no           | dropped                               |
/// | yes          | yes          | `expand("<parent>_<label>", value)`   |
pub fn flatten_group(
    record: &mut DeviceRecord,
    parent: &str,
    group: &Map<String, Value>,
    ctx: &mut FeatureContext,
) {
    for (sub_label, sub_value) in group {
        let label = normalize_label(sub_label);
        let label_ok = !is_sentinel_label(&label);
        let value_ok = !is_sentinel_value(sub_value);

        match (label_ok, value_ok) {
            (true, true) => {
                let derived = format!("{parent}_{label}");
                expand(record, &derived, sub_value, ctx);
            }
            (false, true) => {
                record.add_note(parent, sub_value);
            }
            (true, false) => debug!("{parent}_{label}: empty value dropped"),
            (false, false) => debug!("{parent}: blank sub-spec dropped"),
        }
    }
}
