//! Collaborator traits for filesystem access
//!
//! The pipeline never touches the filesystem directly. Reading the source
//! file, probing for an output directory and persisting the generated text
//! all go through these seams so callers can swap in their own storage.

use crate::types::Result;
use std::future::Future;
use std::path::Path;

/// Loads the raw contents of a source file
pub trait InputSource {
    /// Read the whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> impl Future<Output = Result<String>> + Send;
}

/// Persists generated output
pub trait OutputSink {
    /// Whether `path` names an existing directory
    fn is_dir(&self, path: &Path) -> impl Future<Output = bool> + Send;

    /// Write `text` to `path`, replacing any existing file
    fn write(&self, path: &Path, text: &str) -> impl Future<Output = Result<()>> + Send;
}
