//! I/O module
//!
//! Handles output serialization and the filesystem collaborator.
//!
//! # Components
//!
//! - `csv_format` - YNAB CSV serialization
//! - `fs` - `tokio::fs` implementation of the input and output seams

pub mod csv_format;
pub mod fs;

pub use csv_format::write_ynab_csv;
pub use fs::TokioFs;
