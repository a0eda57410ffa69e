// src/features/mod.rs
//! # Feature engine
//!
//! Turns one raw, irregular device entry into a flat set of named features
//! and keeps the corpus-wide list of every feature name seen so far.
//!
//! ## Pieces
//! - `value` – `FeatureValue`, the scalar kinds a feature can hold.
//! - `registry` – `ParserRegistry`: trigger name → user transformation.
//! - `expand` – one spec entry (or a one-level nested group) → features.
//! - `record` – `DeviceRecord`, the per-device feature set.
//! - `schema` – `CorpusSchema`, union of names across all records.
//! - `context` – `FeatureContext`, owns registry + schema for one run.
//!
//! ## Call chain
//! ```text
//! catalog::build_devices → DeviceRecord::build
//!                              ↘ expand::flatten_group → expand::expand
//!                                   ↘ ParserRegistry::lookup (optional fan-out)
//!                              ↘ CorpusSchema::register (every populated name)
//! ```
//!
//! ## Invariants
//! - Every name on any record is in the schema.
//! - The schema starts with `device_notes` and only grows.
//! - Within one record a name is written once; later writes are dropped.
//!
//! Nothing here does IO. Loading and export live in `catalog` and `file`.

pub mod context;
pub mod expand;
pub mod record;
pub mod registry;
pub mod schema;
pub mod value;

pub use context::FeatureContext;
pub use record::DeviceRecord;
pub use registry::{ParseFn, Parser, ParserRegistry};
pub use schema::CorpusSchema;
pub use value::FeatureValue;
