//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`NavigatorError`] which covers all failure modes of
//! gradebook-navigator. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`NavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, NavigatorError>`
//!
//! # Error Categories
//! - **Connectivity**: the dataset file cannot be opened or parsed; fatal at
//!   startup, the run loop is never entered
//! - **Query**: the dataset opened but is internally inconsistent (a foreign
//!   id does not resolve)
//! - **I/O**: reading the operator's input or writing to the terminal failed
//!
//! User mistakes (invalid menu key, out-of-range disambiguation index,
//! malformed number) are deliberately NOT represented here: they are handled
//! in place with a printed message and a re-rendered menu, never as `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for gradebook-navigator
#[derive(Error, Debug)]
pub enum NavigatorError {
    // Repository connectivity errors (fatal at startup)
    #[error("Cannot open dataset '{path}': {source}")]
    DatasetUnreachable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot parse dataset '{path}': {source}")]
    DatasetMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No dataset file found. Pass --data <PATH> or set GRADEBOOK_DATA.")]
    DatasetNotConfigured,

    // Repository query errors (dataset opened but is inconsistent)
    #[error("Dataset is inconsistent: {table} row references missing {reference} id {id}")]
    DanglingReference {
        table: &'static str,
        reference: &'static str,
        id: u32,
    },

    // Terminal I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using NavigatorError
pub type Result<T> = std::result::Result<T, NavigatorError>;

impl NavigatorError {
    /// Create a connectivity error for a dataset file that cannot be read
    pub fn dataset_unreachable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DatasetUnreachable {
            path: path.into(),
            source,
        }
    }

    /// Create a connectivity error for a dataset file that cannot be parsed
    pub fn dataset_malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::DatasetMalformed {
            path: path.into(),
            source,
        }
    }

    /// Create a dangling-reference query error
    pub fn dangling_reference(table: &'static str, reference: &'static str, id: u32) -> Self {
        Self::DanglingReference {
            table,
            reference,
            id,
        }
    }

    /// True for errors that must abort startup before the run loop
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(
            self,
            Self::DatasetUnreachable { .. }
                | Self::DatasetMalformed { .. }
                | Self::DatasetNotConfigured
                | Self::DanglingReference { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_unreachable_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = NavigatorError::dataset_unreachable("/data/gradebook.json", io_err);
        assert!(err.to_string().contains("/data/gradebook.json"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_dataset_malformed_display() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ invalid").unwrap_err();
        let err = NavigatorError::dataset_malformed("/data/gradebook.json", parse_err);
        assert!(err.to_string().contains("Cannot parse dataset"));
        assert!(err.to_string().contains("/data/gradebook.json"));
    }

    #[test]
    fn test_dangling_reference_display() {
        let err = NavigatorError::dangling_reference("enrollment", "course", 42);
        assert_eq!(
            err.to_string(),
            "Dataset is inconsistent: enrollment row references missing course id 42"
        );
    }

    #[test]
    fn test_startup_fatality_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(NavigatorError::dataset_unreachable("x.json", io_err).is_fatal_at_startup());
        assert!(NavigatorError::DatasetNotConfigured.is_fatal_at_startup());

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(!NavigatorError::Io(io_err).is_fatal_at_startup());
    }
}
