//! This crate loads a tabular dataset, such as a sheet of monthly visitor
//! counts, from a spreadsheet workbook or a CSV file.
//!
//! Column names are normalized, trimmed and lower-cased, so that lookups do
//! not depend on how the header was typed in the file. Workbooks are read
//! with `calamine` when the `xlsx` feature is enabled, which it is by default.
//!
//! ```no_run
//! let table = sheetload::load("Tubes_Mosi.xlsx", "DataTrain").unwrap();
//! let kuta = table.numeric_column("Kuta").unwrap_or_default();
//! ```

mod cache;
mod delimited;
mod error;
mod table;
mod workbook;

pub use cache::Loader;
pub use error::LoadError;
pub use table::{normalize, Cell, Column, Table};

use std::path::Path;

/// The kinds of file the loader understands, chosen by extension.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Workbook,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        match extension.as_str() {
            "csv" => Some(Format::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Format::Workbook),
            _ => None,
        }
    }
}

/// Reads the named sheet from the file at `path`.
///
/// CSV files contain a single sheet, so the sheet name is not checked for
/// them.
pub fn load<P: AsRef<Path>>(path: P, sheet: &str) -> Result<Table, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_owned()));
    }

    match Format::from_path(path) {
        Some(Format::Csv) => delimited::read(path),
        Some(Format::Workbook) => workbook::read(path, sheet),
        None => Err(LoadError::read(path, "unsupported file extension")),
    }
}
