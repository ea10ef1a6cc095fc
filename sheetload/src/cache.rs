//! Memoized loading keyed by file and sheet.

use crate::{load, LoadError, Table};
use log::{debug, error};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A loader which remembers every table it has read successfully. Failed
/// reads are not remembered and will be attempted again on the next call.
#[derive(Default)]
pub struct Loader {
    tables: Mutex<HashMap<(PathBuf, String), Arc<Table>>>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for the path and sheet, reading it on first use.
    pub fn load<P: AsRef<Path>>(&self, path: P, sheet: &str) -> Result<Arc<Table>, LoadError> {
        let key = (path.as_ref().to_path_buf(), sheet.to_string());

        if let Some(table) = self.tables.lock().get(&key) {
            debug!("cached table for {}", key.0.display());
            return Ok(table.clone());
        }

        let table = Arc::new(load(&key.0, sheet)?);
        debug!(
            "loaded {} rows and {} columns from {}",
            table.len(),
            table.columns().len(),
            key.0.display()
        );

        self.tables.lock().insert(key, table.clone());

        Ok(table)
    }

    /// Like `load`, but a failure is logged and an empty table is returned.
    pub fn load_or_empty<P: AsRef<Path>>(&self, path: P, sheet: &str) -> Arc<Table> {
        match self.load(path, sheet) {
            Ok(table) => table,
            Err(e) => {
                error!("{e}");
                Arc::new(Table::default())
            }
        }
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.lock().is_empty()
    }

    /// Forget every cached table.
    pub fn clear(&self) {
        self.tables.lock().clear();
    }
}
