// src/config/consts.rs

// Reserved catalog keys
pub const SPECS_KEY: &str = "device_specs";

// Identity features set on every record
pub const MAKER_NAME: &str = "maker_name";
pub const MAKER_ID: &str = "maker_id";
pub const DEVICE_ID: &str = "device_id";

// Reserved feature holding per-device annotations; seeds every schema
pub const NOTES_FEATURE: &str = "device_notes";

// Literal stand-in for absent labels/values during nested flattening
pub const NAN_TEXT: &str = "nan";

// Parser naming convention: `parse_<trigger>`
pub const PARSER_PREFIX: &str = "parse_";

// Local state
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "devices";
