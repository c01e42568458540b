//! Conversion pipeline
//!
//! Runs the stages of a conversion in order, each one feeding the next:
//!
//! ```text
//! ConvertOptions → validate → RunContext → load_content → split_rows
//!                                        → transform → write_ynab_csv → OutputSink
//! ```
//!
//! All state lives in the [`RunContext`] built for the call, so any number of
//! conversions can run concurrently on the same runtime.

use crate::core::options::{validate, ConvertOptions};
use crate::core::splitter::{load_content, split_rows};
use crate::core::traits::{InputSource, OutputSink};
use crate::core::transformer::{transform, RunContext};
use crate::io::csv_format::write_ynab_csv;
use crate::io::fs::TokioFs;
use crate::types::Result;
use log::{debug, info};
use std::fmt;
use std::path::PathBuf;

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutput {
    /// The generated file was persisted at `path`
    Written { path: PathBuf },
    /// Writing was disabled; the generated CSV text
    Generated(String),
}

impl fmt::Display for ConvertOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertOutput::Written { path } => {
                write!(f, "File {} written successfully!", path.display())
            }
            ConvertOutput::Generated(text) => f.write_str(text),
        }
    }
}

/// Render bank CSV content as YNAB CSV text
///
/// The synchronous middle of the pipeline: header check, row transformation
/// and serialization.
pub fn render(ctx: &RunContext, content: &str) -> Result<String> {
    let rows = split_rows(content, ctx.schema, &ctx.options.delimiter)?;
    let records = transform(ctx, &rows);
    write_ynab_csv(&records)
}

/// Runs conversions against a filesystem collaborator
#[derive(Debug, Clone, Default)]
pub struct Converter<F = TokioFs> {
    fs: F,
}

impl<F: InputSource + OutputSink> Converter<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Convert a bank export into a YNAB CSV
    ///
    /// `input` is a path to a `.csv` file, or the CSV text itself when the
    /// `csv_string` option is set. Nothing is written unless every stage
    /// succeeds.
    pub async fn convert(&self, input: &str, options: ConvertOptions) -> Result<ConvertOutput> {
        let options = validate(options, &self.fs).await?;
        let ctx = RunContext::new(options)?;
        debug!("Converting with source {}", ctx.schema.name);

        let content = load_content(input, ctx.options.csv_string, &self.fs).await?;
        let text = render(&ctx, &content)?;

        if !ctx.options.write {
            return Ok(ConvertOutput::Generated(text));
        }

        let path = ctx.options.output.path();
        self.fs.write(&path, &text).await?;
        info!("Wrote {}", path.display());

        Ok(ConvertOutput::Written { path })
    }
}

/// Convert a bank export using the real filesystem
pub async fn convert(input: &str, options: ConvertOptions) -> Result<ConvertOutput> {
    Converter::new(TokioFs).convert(input, options).await
}
