//! Core conversion logic
//!
//! This module contains the pipeline stages, leaves first:
//! - `registry` - Static table of supported bank schemas
//! - `options` - Caller option validation and merging
//! - `splitter` - Input loading, header validation and row splitting
//! - `transformer` - Per-row field extraction and cutoff filtering
//! - `traits` - Filesystem collaborator seams

pub mod options;
pub mod registry;
pub mod splitter;
pub mod traits;
pub mod transformer;

pub use options::{ConvertOptions, OutputTarget, RunOptions};
pub use traits::{InputSource, OutputSink};
pub use transformer::RunContext;
