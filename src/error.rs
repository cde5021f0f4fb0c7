use std::path::PathBuf;
use thiserror::Error;

pub type DicResult<T> = Result<T, DicError>;

#[derive(Error, Debug)]
pub enum DicError {
    #[error("Failed to load spreadsheet {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    #[error("Failed to write dictionary {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}

impl DicError {
    pub(crate) fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        DicError::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DicError::Write {
            path: path.into(),
            source,
        }
    }
}
