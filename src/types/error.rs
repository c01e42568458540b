//! Error types for the YNAB CSV converter
//!
//! Every failure is terminal for the conversion it belongs to: nothing is
//! written and a single descriptive error is returned to the caller.
//!
//! # Error Categories
//!
//! - **Option Errors**: unknown source, unsupported date format, invalid cutoff date
//! - **Input Errors**: missing input, wrong extension, empty content
//! - **Shape Errors**: header-only files, header mismatch against the source schema
//! - **File I/O Errors**: read or write failures in the filesystem collaborator

use thiserror::Error;

/// Main error type for a conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The requested source is not in the registry
    #[error("Source {name} is not valid. List of valid sources: [ {valid} ]")]
    UnknownSource {
        /// The source name that was requested
        name: String,
        /// Comma separated, sorted list of registered sources
        valid: String,
    },

    /// The requested output date format is not one of the supported dialects
    #[error("Date format {format} is not valid. List of valid dateformats: [ {allowed} ]")]
    InvalidDateFormat {
        /// The rejected format string
        format: String,
        /// Comma separated list of supported dialects
        allowed: String,
    },

    /// The cutoff date does not strictly parse under the effective date format
    #[error("{date} is not a valid date for {format} date format")]
    InvalidDate {
        /// The rejected date string
        date: String,
        /// The date format it was checked against
        format: String,
    },

    /// No input was provided at all
    #[error("A valid {expected} needs to be provided")]
    MissingInput {
        /// What kind of input was expected (`.csv file` or `csv string`)
        expected: String,
    },

    /// The input file name does not end in `.csv`
    #[error("File {path} does not have a .csv extension")]
    InvalidExtension {
        /// The rejected path
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input content is empty after trimming
    #[error("CSV file is empty")]
    EmptyInput,

    /// The input only contains a header row
    #[error("CSV file only contains the header row")]
    NoDataRows,

    /// The header row does not match the source schema
    #[error("CSV headers are not the same as the source config headers. Expected header rows: [ {expected} ]")]
    HeaderMismatch {
        /// Expected header cells joined by the effective delimiter
        expected: String,
    },
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ConvertError>;

// Conversion from io::Error to ConvertError
impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ConvertError
impl From<csv::Error> for ConvertError {
    fn from(error: csv::Error) -> Self {
        ConvertError::IoError {
            message: format!("Failed to write CSV: {}", error),
        }
    }
}

// Helper functions for creating common errors

impl ConvertError {
    /// Create an UnknownSource error listing the valid sources
    pub fn unknown_source(name: &str, valid: &[&str]) -> Self {
        ConvertError::UnknownSource {
            name: name.to_string(),
            valid: valid.join(","),
        }
    }

    /// Create an InvalidDateFormat error listing the allowed dialects
    pub fn invalid_date_format(format: &str, allowed: &[&str]) -> Self {
        ConvertError::InvalidDateFormat {
            format: format.to_string(),
            allowed: allowed.join(","),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: &str, format: &str) -> Self {
        ConvertError::InvalidDate {
            date: date.to_string(),
            format: format.to_string(),
        }
    }

    /// Create a MissingInput error for an absent input file
    pub fn missing_input() -> Self {
        ConvertError::MissingInput {
            expected: ".csv file".to_string(),
        }
    }

    /// Create an InvalidExtension error
    pub fn invalid_extension(path: &str) -> Self {
        ConvertError::InvalidExtension {
            path: path.to_string(),
        }
    }

    /// Create an IoError that names the path involved
    pub fn io(path: &std::path::Path, error: &std::io::Error) -> Self {
        ConvertError::IoError {
            message: format!("{}: {}", path.display(), error),
        }
    }

    /// Create a HeaderMismatch error from the expected headers
    pub fn header_mismatch(headers: &[&str], delimiter: &str) -> Self {
        ConvertError::HeaderMismatch {
            expected: headers.join(delimiter),
        }
    }
}
