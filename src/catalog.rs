// src/catalog.rs

use std::{fs, path::Path};

use log::info;
use serde_json::{Map, Value};

use crate::{
    core::sanitize::maker_prefix,
    error::{FeatureError, Result},
    features::{DeviceRecord, FeatureContext},
    progress::Progress,
    table::{Table, TableBuilder},
};

/// One device entry as scraped: plain fields plus the `device_specs` group.
#[derive(Clone, Debug, PartialEq)]
pub struct RawDevice {
    pub key: String,
    pub fields: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Maker {
    /// Dense, 0-based, in file order
    pub id: u32,
    pub name: String,
    pub devices: Vec<RawDevice>,
}

/// `maker -> device key -> fields`, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    makers: Vec<Maker>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        info!(
            "Loaded {}: {} makers, {} devices",
            path.display(),
            catalog.makers.len(),
            catalog.device_count()
        );
        Ok(catalog)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    pub fn from_value(root: Value) -> Result<Self> {
        let Value::Object(makers_raw) = root else {
            return Err(malformed(s!("$"), "an object of makers"));
        };

        let mut makers = Vec::with_capacity(makers_raw.len());
        for (id, (name, devices_raw)) in (0u32..).zip(makers_raw) {
            let Value::Object(devices_raw) = devices_raw else {
                return Err(malformed(format!("$.{name}"), "an object of devices"));
            };
            let mut devices = Vec::with_capacity(devices_raw.len());
            for (key, fields) in devices_raw {
                let Value::Object(fields) = fields else {
                    return Err(malformed(format!("$.{name}.{key}"), "an object of device fields"));
                };
                devices.push(RawDevice { key, fields });
            }
            makers.push(Maker { id, name, devices });
        }
        Ok(Self { makers })
    }

    /// `(maker_id, maker_name)` pairs, ids counting from 0.
    pub fn list_makers(&self) -> Vec<(u32, String)> {
        self.makers.iter().map(|m| (m.id, m.name.clone())).collect()
    }

    pub fn device_count(&self) -> usize {
        self.makers.iter().map(|m| m.devices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.makers.is_empty()
    }
}

fn malformed(path: String, expected: &'static str) -> FeatureError {
    FeatureError::Malformed { path, expected }
}

/// `"Samsung Galaxy"` + `"d7"` → `"SAMSUNGGALAXY_d7"`.
pub fn device_id(maker_name: &str, device_key: &str) -> String {
    format!("{}_{}", maker_prefix(maker_name), device_key)
}

/// One record per device, makers and devices in catalog order.
pub fn build_devices(
    catalog: &Catalog,
    ctx: &mut FeatureContext,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<DeviceRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(catalog.makers.len());
    }

    let mut records = Vec::with_capacity(catalog.device_count());
    for maker in &catalog.makers {
        for device in &maker.devices {
            let id = device_id(&maker.name, &device.key);
            records.push(DeviceRecord::build(&device.fields, &id, &maker.name, maker.id, ctx));
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(maker.id);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    info!(
        "Built {} devices, {} features in schema",
        records.len(),
        ctx.schema().len()
    );
    records
}

/// Whole pipeline: catalog → records → dense table.
pub fn create_table(
    catalog: &Catalog,
    ctx: &mut FeatureContext,
    progress: Option<&mut dyn Progress>,
) -> Result<Table> {
    if catalog.is_empty() {
        return Err(FeatureError::EmptyCatalog);
    }
    let records = build_devices(catalog, ctx, progress);
    TableBuilder::build(&records, ctx.schema())
}
