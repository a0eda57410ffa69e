// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use serde_json::{Map, Value};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::write_table;
use crate::error::{FeatureError, Result};
use crate::table::Table;

/// Write the table to `export.out_path()` in the chosen format.
/// Returns the final path written to.
pub fn export_table(export: &ExportOptions, table: &Table) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(&path)?);
    match export.format.delim() {
        Some(sep) => write_table(&mut out, table, export.include_headers, &export.missing, sep)?,
        None => {
            debug_assert_eq!(export.format, ExportFormat::Json);
            serde_json::to_writer_pretty(&mut out, &json_records(table)?)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    info!(
        "Export: {} rows × {} columns → {}",
        table.n_rows(),
        table.n_cols(),
        path.display()
    );
    Ok(path)
}

/// One object per device; features the device lacks are left out.
pub fn json_records(table: &Table) -> Result<Vec<Map<String, Value>>> {
    let mut records = Vec::with_capacity(table.n_rows());
    for row in 0..table.n_rows() {
        let mut obj = Map::new();
        for (name, cell) in table.row(row) {
            if let Some(v) = cell.value() {
                obj.insert(s!(name), serde_json::to_value(v)?);
            }
        }
        records.push(obj);
    }
    Ok(records)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(FeatureError::Usage(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
