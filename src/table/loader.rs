//! CSV ingest into `Table`
//!
//! Parsing is delegated to the `csv` crate; this module only types the
//! fields. A field that parses as `f64` becomes `Cell::Number`, anything
//! else stays text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, info};

use super::{Cell, Table};
use crate::error::Error;

fn type_cell(field: &str) -> Cell {
    let trimmed = field.trim();
    match trimmed.parse::<f64>() {
        Ok(n) => Cell::Number(n),
        Err(_) => Cell::Text(trimmed.to_string()),
    }
}

/// Read a headered CSV stream into a `Table`.
///
/// Records whose width differs from the header width are rejected with the
/// 1-based record number.
pub fn load_table_from_reader<R: Read>(reader: R) -> Result<Table, Error> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let mut table = Table::new(headers);

    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row: Vec<Cell> = record.iter().map(type_cell).collect();
        table.push_row(row).map_err(|_| {
            Error::InvalidArgument(format!(
                "record {}: expected {} fields, found {}",
                idx + 1,
                table.n_cols(),
                record.len()
            ))
        })?;
    }

    debug!("loaded {} rows x {} columns", table.n_rows(), table.n_cols());
    Ok(table)
}

/// Read a CSV file into a `Table`
pub fn load_table_from_path<P: AsRef<Path>>(path: P) -> Result<Table, Error> {
    let path = path.as_ref();
    info!("loading CSV from {}", path.display());
    let file = File::open(path)?;
    load_table_from_reader(file)
}
