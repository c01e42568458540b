//! Types module
//!
//! Contains core data structures used throughout the converter:
//! - `date_format`: the seven supported date dialects
//! - `schema`: bank schema declarations and the target field set
//! - `record`: the normalized output record
//! - `error`: error types for a conversion

pub mod date_format;
pub mod error;
pub mod record;
pub mod schema;

pub use date_format::DateFormat;
pub use error::{ConvertError, Result};
pub use record::TargetRecord;
pub use schema::{ColumnMap, SourceSchema, TargetField};
