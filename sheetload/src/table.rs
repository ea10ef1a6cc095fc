//! An in-memory table of named columns.

use core::fmt;

/// Normalizes a column name for lookups: surrounding whitespace is removed
/// and letters are lower-cased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A single cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Interprets text read from a file. Blank text and `NaN` are missing
    /// values, text that parses as a finite number becomes a number.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Cell::Empty;
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Empty,
            Ok(v) if v.is_finite() => Cell::Number(v),
            _ => Cell::Text(text.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // integral values such as years print without a fraction
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

/// A column keeps the header as it appeared in the file and the normalized
/// key used for lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    header: String,
    key: String,
    cells: Vec<Cell>,
}

impl Column {
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// An ordered collection of equally long columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Builds a table from a header row and body rows. Short rows are padded
    /// with empty cells and cells beyond the header are ignored.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|header| Column {
                key: normalize(&header),
                header,
                cells: Vec::with_capacity(rows.len()),
            })
            .collect();

        let count = rows.len();

        for row in rows {
            let mut row = row.into_iter();
            for column in columns.iter_mut() {
                column.cells.push(row.next().unwrap_or(Cell::Empty));
            }
        }

        Self {
            columns,
            rows: count,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    /// A table without rows or without columns holds no data.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column headers as they appeared in the file.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header()).collect()
    }

    /// Looks up a column by name. The name is normalized first.
    pub fn column(&self, name: &str) -> Option<&Column> {
        let key = normalize(name);
        self.columns.iter().find(|c| c.key == key)
    }

    /// The numeric values of a column with missing and non-numeric cells
    /// dropped.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name)
            .map(|c| c.cells.iter().filter_map(Cell::as_f64).collect())
    }

    /// Keys of all columns which are not excluded. Exclusions are normalized.
    pub fn columns_except<S: AsRef<str>>(&self, excluded: &[S]) -> Vec<&str> {
        let excluded: Vec<String> = excluded.iter().map(|e| normalize(e.as_ref())).collect();
        self.columns
            .iter()
            .map(|c| c.key())
            .filter(|key| !excluded.iter().any(|e| e.as_str() == *key))
            .collect()
    }

    /// Returns the cells of one row.
    pub fn row(&self, index: usize) -> Option<Vec<&Cell>> {
        if index >= self.rows {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.cells[index]).collect())
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        (0..self.rows).filter_map(move |i| self.row(i))
    }
}
