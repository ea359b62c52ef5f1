//! File source errors.

use std::path::PathBuf;

use thiserror::Error;

use kiloton_core::KilotonError;

/// Result type for file source operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading a test record file.
#[derive(Debug, Error)]
pub enum FileError {
    /// The data file does not exist.
    #[error("data file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The header row lacks a required column.
    #[error("missing column '{0}' in header")]
    MissingColumn(&'static str),

    /// A row has an empty required field and incomplete rows are not dropped.
    #[error("line {line}: missing value for '{column}'")]
    MissingField {
        /// 1-based line number in the file.
        line: u64,
        /// Column header of the empty field.
        column: &'static str,
    },

    /// A field could not be parsed (e.g. a non-numeric yield).
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the file.
        line: u64,
        /// Parser message.
        message: String,
    },

    /// A field parsed but is not a valid domain value.
    #[error("line {line}: {source}")]
    Invalid {
        /// 1-based line number in the file.
        line: u64,
        /// The rejected value.
        #[source]
        source: KilotonError,
    },

    /// Low-level CSV reader failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FileError::NotFound(PathBuf::from("/data/nuclear_explosions.csv"));
        assert_eq!(
            err.to_string(),
            "data file not found: /data/nuclear_explosions.csv"
        );

        let err = FileError::MissingField {
            line: 12,
            column: "Data.Yeild.Upper",
        };
        assert_eq!(err.to_string(), "line 12: missing value for 'Data.Yeild.Upper'");
    }
}
