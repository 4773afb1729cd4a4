//! Error types for the section mapping conversion.
//!
//! Two levels, matched by the caller to produce the user-facing message:
//!
//! - [`CsvError`] - reading and decoding the input file
//! - [`ConvertError`] - the whole conversion run
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while reading and decoding the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode the input bytes.
    #[error("Failed to decode input: {0}")]
    Encoding(String),

    /// Malformed CSV data.
    #[error("Invalid CSV format: {0}")]
    Malformed(#[from] csv::Error),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level errors for a conversion run.
///
/// This is the error type returned by [`crate::pipeline::convert_file`].
/// The first three variants are the specific failure kinds reported to the
/// operator; everything else renders as a generic failure with its cause.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file does not exist at the expected path.
    #[error("Cannot find {}, make sure the file exists", path.display())]
    FileNotFound { path: PathBuf },

    /// A required column is absent from the header or from a data row.
    #[error("CSV is missing required column '{column}'")]
    MissingField { column: String },

    /// A required field does not hold a base-10 integer.
    #[error("Row {row}, column '{column}': cannot convert value '{value}' to an integer")]
    ValueConversion {
        row: usize,
        column: String,
        value: String,
    },

    /// CSV reading/decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// The serialized document failed the embedded schema check.
    #[error("Generated document failed schema check: {0}")]
    SchemaCheck(String),

    /// Failed to write the output file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Exit code for `--strict` mode, one per reported failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::FileNotFound { .. } => 2,
            ConvertError::MissingField { .. } => 3,
            ConvertError::ValueConversion { .. } => 4,
            _ => 1,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> ConvertError
        let csv_err = CsvError::EmptyFile;
        let convert_err: ConvertError = csv_err.into();
        assert!(convert_err.to_string().contains("empty"));

        let missing = ConvertError::MissingField {
            column: "volume".into(),
        };
        assert!(missing.to_string().contains("volume"));
    }

    #[test]
    fn test_value_conversion_format() {
        let err = ConvertError::ValueConversion {
            row: 3,
            column: "pdfPageStart".into(),
            value: "12a".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Row 3"));
        assert!(msg.contains("pdfPageStart"));
        assert!(msg.contains("'12a'"));
    }

    #[test]
    fn test_file_not_found_names_path() {
        let err = ConvertError::FileNotFound {
            path: PathBuf::from("public/journals/mapping.csv"),
        };
        assert!(err.to_string().contains("public/journals/mapping.csv"));
    }

    #[test]
    fn test_strict_exit_codes() {
        let not_found = ConvertError::FileNotFound {
            path: PathBuf::from("x.csv"),
        };
        let missing = ConvertError::MissingField {
            column: "volume".into(),
        };
        let conversion = ConvertError::ValueConversion {
            row: 2,
            column: "volume".into(),
            value: "".into(),
        };
        let other: ConvertError = CsvError::EmptyFile.into();

        assert_eq!(not_found.exit_code(), 2);
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(conversion.exit_code(), 4);
        assert_eq!(other.exit_code(), 1);
    }
}
