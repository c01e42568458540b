//! Tokio backed filesystem collaborator

use crate::core::traits::{InputSource, OutputSink};
use crate::types::{ConvertError, Result};
use std::future::Future;
use std::path::Path;

/// Reads and writes real files through `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

impl InputSource for TokioFs {
    fn read_to_string(&self, path: &Path) -> impl Future<Output = Result<String>> + Send {
        async move {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ConvertError::io(path, &e))
        }
    }
}

impl OutputSink for TokioFs {
    fn is_dir(&self, path: &Path) -> impl Future<Output = bool> + Send {
        async move {
            tokio::fs::metadata(path)
                .await
                .map(|metadata| metadata.is_dir())
                .unwrap_or(false)
        }
    }

    fn write(&self, path: &Path, text: &str) -> impl Future<Output = Result<()>> + Send {
        async move {
            tokio::fs::write(path, text)
                .await
                .map_err(|e| ConvertError::io(path, &e))
        }
    }
}
