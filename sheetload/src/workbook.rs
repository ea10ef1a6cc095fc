use crate::{LoadError, Table};
use std::path::Path;

#[cfg(feature = "xlsx")]
pub(crate) fn read(path: &Path, sheet: &str) -> Result<Table, LoadError> {
    use calamine::{open_workbook_auto, Reader};

    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::read(path, e))?;

    // sheet names are matched the way column names are
    let wanted = crate::normalize(sheet);
    let name = workbook
        .sheet_names()
        .into_iter()
        .find(|name| crate::normalize(name) == wanted)
        .ok_or_else(|| LoadError::SheetNotFound(sheet.to_string()))?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| LoadError::Unreadable {
            sheet: name.clone(),
            reason: e.to_string(),
        })?;

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| c.to_string()).collect(),
        None => return Ok(Table::default()),
    };

    let body = rows.map(|row| row.iter().map(cell).collect()).collect();

    Ok(Table::from_rows(headers, body))
}

#[cfg(feature = "xlsx")]
fn cell(data: &calamine::Data) -> crate::Cell {
    use crate::Cell;
    use calamine::Data;

    match data {
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) if v.is_finite() => Cell::Number(*v),
        Data::Float(_) | Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from_text(s),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(not(feature = "xlsx"))]
pub(crate) fn read(path: &Path, _sheet: &str) -> Result<Table, LoadError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    Err(LoadError::MissingDependency(extension))
}
