//! Options validation
//!
//! Callers describe a conversion with [`ConvertOptions`], where every field is
//! optional. [`validate`] checks those values against the registry and the
//! supported date dialects and merges them over the defaults, producing the
//! [`RunOptions`] owned by a single conversion.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. `source` must be registered
//! 2. `date_format` must be one of the seven dialects
//! 3. `last_date` must strictly parse under the effective date format
//! 4. `output` loses a trailing `.csv`; an existing directory becomes the output folder

use crate::core::registry;
use crate::core::traits::OutputSink;
use crate::types::{ConvertError, DateFormat, Result};
use chrono::NaiveDate;
use log::debug;
use std::path::{Path, PathBuf};

/// File stem used when the caller gives no output name, or only a directory
pub const DEFAULT_OUTPUT_STEM: &str = "ynab";

/// Cell delimiter used when neither the caller nor the schema provide one
pub const DEFAULT_DELIMITER: &str = ";";

/// Caller supplied options; `None` means "use the default"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertOptions {
    pub source: Option<String>,
    pub delimiter: Option<String>,
    pub date_format: Option<String>,
    pub last_date: Option<String>,
    pub payees: Option<Vec<String>>,
    pub output: Option<String>,
    pub csv_string: Option<bool>,
    pub write: Option<bool>,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = Some(delimiter.to_string());
        self
    }

    pub fn date_format(mut self, date_format: &str) -> Self {
        self.date_format = Some(date_format.to_string());
        self
    }

    pub fn last_date(mut self, last_date: &str) -> Self {
        self.last_date = Some(last_date.to_string());
        self
    }

    pub fn payees<I, S>(mut self, payees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payees = Some(payees.into_iter().map(Into::into).collect());
        self
    }

    pub fn output(mut self, output: &str) -> Self {
        self.output = Some(output.to_string());
        self
    }

    pub fn csv_string(mut self, csv_string: bool) -> Self {
        self.csv_string = Some(csv_string);
        self
    }

    pub fn write(mut self, write: bool) -> Self {
        self.write = Some(write);
        self
    }
}

/// Where the generated file goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Output directory; `None` writes relative to the working directory
    pub dir: Option<PathBuf>,
    /// File name without the `.csv` extension
    pub stem: String,
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self {
            dir: None,
            stem: DEFAULT_OUTPUT_STEM.to_string(),
        }
    }
}

impl OutputTarget {
    /// Full path of the file to write
    pub fn path(&self) -> PathBuf {
        let file_name = format!("{}.csv", self.stem);
        match &self.dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

/// Fully merged options for one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub source: String,
    pub delimiter: String,
    /// Dialect of the generated dates and of `last_date`
    pub date_format: DateFormat,
    /// Latest transaction date to keep, inclusive
    pub last_date: Option<NaiveDate>,
    /// Candidate payee names or patterns, tried in order against the memo
    pub payees: Vec<String>,
    pub output: OutputTarget,
    /// Whether the input is CSV text rather than a file path
    pub csv_string: bool,
    /// Whether to persist the result or hand the text back
    pub write: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source: registry::DEFAULT_SOURCE.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            date_format: DateFormat::default(),
            last_date: None,
            payees: Vec::new(),
            output: OutputTarget::default(),
            csv_string: false,
            write: true,
        }
    }
}

/// Validate caller options and merge them over the defaults
///
/// The sink is only used to probe whether `output` names an existing directory.
pub async fn validate<S: OutputSink>(options: ConvertOptions, sink: &S) -> Result<RunOptions> {
    let defaults = RunOptions::default();

    let source = options.source.unwrap_or(defaults.source);
    let schema = registry::lookup(&source)
        .ok_or_else(|| ConvertError::unknown_source(&source, &registry::names()))?;

    let date_format = match options.date_format {
        Some(format) => format
            .parse::<DateFormat>()
            .map_err(|_| ConvertError::invalid_date_format(&format, &DateFormat::patterns()))?,
        None => defaults.date_format,
    };

    let last_date = match options.last_date {
        Some(date) => Some(
            date_format
                .parse_strict(&date)
                .ok_or_else(|| ConvertError::invalid_date(&date, date_format.pattern()))?,
        ),
        None => None,
    };

    let output = match options.output.filter(|output| !output.is_empty()) {
        Some(output) => resolve_output(&output, sink).await,
        None => defaults.output,
    };

    let delimiter = options
        .delimiter
        .filter(|delimiter| !delimiter.is_empty())
        .unwrap_or_else(|| schema.delimiter.to_string());

    let payees = options
        .payees
        .unwrap_or_default()
        .into_iter()
        .map(|payee| payee.trim().to_string())
        .filter(|payee| !payee.is_empty())
        .collect();

    let run_options = RunOptions {
        source,
        delimiter,
        date_format,
        last_date,
        payees,
        output,
        csv_string: options.csv_string.unwrap_or(defaults.csv_string),
        write: options.write.unwrap_or(defaults.write),
    };
    debug!("Validated options: {:?}", run_options);

    Ok(run_options)
}

async fn resolve_output<S: OutputSink>(output: &str, sink: &S) -> OutputTarget {
    let stem = strip_csv_extension(output);

    if sink.is_dir(Path::new(stem)).await {
        OutputTarget {
            dir: Some(PathBuf::from(stem)),
            stem: DEFAULT_OUTPUT_STEM.to_string(),
        }
    } else {
        OutputTarget {
            dir: None,
            stem: stem.to_string(),
        }
    }
}

/// Drop a trailing `.csv`, ignoring case
fn strip_csv_extension(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match name.get(split..) {
        Some(ext) if ext.eq_ignore_ascii_case(".csv") => &name[..split],
        _ => name,
    }
}
