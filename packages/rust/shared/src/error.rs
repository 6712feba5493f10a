//! Error types for aortascreen.
//!
//! Library crates use [`AortascreenError`] via `thiserror`.
//! The CLI app wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all aortascreen operations.
#[derive(Debug, thiserror::Error)]
pub enum AortascreenError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Input file does not exist.
    #[error("input file '{}' not found — export your sheet as CSV and check the path", path.display())]
    InputNotFound { path: PathBuf },

    /// Required column missing from the input header.
    #[error("column '{column}' not found in input (available: {available})")]
    MissingColumn { column: String, available: String },

    /// CSV parsing or writing error.
    #[error("csv error: {0}")]
    Csv(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, AortascreenError>;

impl AortascreenError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a CSV error from any displayable message.
    pub fn csv(msg: impl std::fmt::Display) -> Self {
        Self::Csv(msg.to_string())
    }

    /// Create a missing-column error listing the headers that were found.
    pub fn missing_column(column: impl Into<String>, available: &[String]) -> Self {
        Self::MissingColumn {
            column: column.into(),
            available: available.join(", "),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = AortascreenError::config("bad delimiter name 'colon'");
        assert_eq!(err.to_string(), "config error: bad delimiter name 'colon'");

        let err = AortascreenError::missing_column(
            "Title",
            &["Id".to_string(), "Abstract".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "column 'Title' not found in input (available: Id, Abstract)"
        );
    }

    #[test]
    fn input_not_found_names_the_path() {
        let err = AortascreenError::InputNotFound {
            path: PathBuf::from("your_titles.csv"),
        };
        assert!(err.to_string().contains("your_titles.csv"));
        assert!(err.to_string().contains("not found"));
    }
}
