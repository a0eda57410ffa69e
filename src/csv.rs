// src/csv.rs
use std::io::{self, Write};

use crate::table::Table;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One table row as text cells, `missing` for absent features.
pub fn render_row(table: &Table, row: usize, missing: &str) -> Vec<String> {
    table.row(row).map(|(_, cell)| cell.render(missing)).collect()
}

/// Stream the whole table as CSV/TSV.
pub fn write_table<W: Write>(
    mut w: W,
    table: &Table,
    include_headers: bool,
    missing: &str,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        let headers: Vec<&str> = table.column_names().collect();
        write_row(&mut w, &headers, sep)?;
    }
    for row in 0..table.n_rows() {
        write_row(&mut w, &render_row(table, row, missing), sep)?;
    }
    Ok(())
}

/// Whole table as one string, for the clipboard.
pub fn table_to_string(table: &Table, include_headers: bool, missing: &str, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, table, include_headers, missing, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
