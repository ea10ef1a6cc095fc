use crate::{Cell, LoadError, Table};
use std::path::Path;

/// Reads a CSV file with a header row. A CSV file holds exactly one sheet.
pub(crate) fn read(path: &Path) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| LoadError::read(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::read(path, e))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LoadError::read(path, e))?;
        rows.push(record.iter().map(Cell::from_text).collect());
    }

    Ok(Table::from_rows(headers, rows))
}
