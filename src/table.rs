// src/table.rs
//
// Dense device × feature table built from sparse records.

use std::collections::HashMap;

use log::debug;

use crate::error::{FeatureError, Result};
use crate::features::{CorpusSchema, DeviceRecord, FeatureValue};

/// A table cell. `Missing` means the device never had the feature and is
/// never confused with a present value, `FeatureValue::Null` included.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Missing,
    Value(FeatureValue),
}

impl Cell {
    pub fn value(&self) -> Option<&FeatureValue> {
        match self {
            Cell::Missing  => None,
            Cell::Value(v) => Some(v),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Flat text, `missing` standing in for absent features.
    pub fn render(&self, missing: &str) -> String {
        match self {
            Cell::Missing  => s!(missing),
            Cell::Value(v) => v.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Column {
    name: String,
    cells: Vec<Cell>,
}

/// Rows = devices in processing order, columns = schema order.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    n_rows: usize,
}

impl Table {
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.index.get(name).map(|&ix| self.columns[ix].cells.as_slice())
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        self.column(name).and_then(|cells| cells.get(row))
    }

    /// `(column, cell)` pairs of one row. Empty past the last row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (&str, &Cell)> {
        self.columns
            .iter()
            .filter_map(move |c| c.cells.get(row).map(|cell| (c.name.as_str(), cell)))
    }

    /// Only the features the device actually had.
    pub fn row_features(&self, row: usize) -> HashMap<String, FeatureValue> {
        self.row(row)
            .filter_map(|(name, cell)| cell.value().map(|v| (s!(name), v.clone())))
            .collect()
    }

    /// How many devices have this feature.
    pub fn present_count(&self, name: &str) -> usize {
        self.column(name)
            .map(|cells| cells.iter().filter(|c| !c.is_missing()).count())
            .unwrap_or(0)
    }
}

pub struct TableBuilder;

impl TableBuilder {
    /// Column by column in schema order, reading each feature off every
    /// record and filling `Cell::Missing` where a record lacks it.
    pub fn build(records: &[DeviceRecord], schema: &CorpusSchema) -> Result<Table> {
        if records.is_empty() {
            return Err(FeatureError::EmptyRecords);
        }

        let mut columns = Vec::with_capacity(schema.len());
        let mut index = HashMap::with_capacity(schema.len());
        for name in schema.names() {
            let cells = records
                .iter()
                .map(|r| r.get(name).cloned().map_or(Cell::Missing, Cell::Value))
                .collect();
            index.insert(name.clone(), columns.len());
            columns.push(Column { name: name.clone(), cells });
        }

        debug!("Table built: {} rows × {} columns", records.len(), columns.len());
        Ok(Table { columns, index, n_rows: records.len() })
    }
}
