use std::path::PathBuf;
use thiserror::Error;

/// Errors returned when loading a dataset.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("sheet not found: {0}")]
    SheetNotFound(String),
    #[error("failed to read sheet {sheet}: {reason}")]
    Unreadable { sheet: String, reason: String },
    #[error("reading {0} files requires building with the `xlsx` feature")]
    MissingDependency(String),
    #[error("failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },
}

impl LoadError {
    pub(crate) fn read<E: ToString>(path: &std::path::Path, e: E) -> Self {
        Self::Read {
            path: path.to_owned(),
            reason: e.to_string(),
        }
    }
}
