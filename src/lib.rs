// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;

pub mod catalog;
pub mod csv;
pub mod file;
pub mod gui;
pub mod logging;
pub mod progress;
pub mod table;

pub use catalog::{build_devices, create_table, device_id, Catalog};
pub use error::{FeatureError, Result};
pub use features::{CorpusSchema, DeviceRecord, FeatureContext, FeatureValue, Parser, ParserRegistry};
pub use table::{Cell, Table, TableBuilder};
