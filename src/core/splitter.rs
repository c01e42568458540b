//! CSV reader and splitter
//!
//! Turns the raw input into data lines: loads the file when the input is a
//! path, rejects empty or header-only content, and checks the header row
//! against the selected bank schema.

use crate::core::traits::InputSource;
use crate::types::{ConvertError, Result, SourceSchema};
use log::debug;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Resolve the input into CSV text
///
/// With `csv_string` set the input is the content itself. Otherwise it is a
/// path that must end in `.csv` and is read through the input collaborator.
pub async fn load_content<I: InputSource>(input: &str, csv_string: bool, source: &I) -> Result<String> {
    if csv_string {
        return Ok(input.to_string());
    }

    if input.trim().is_empty() {
        return Err(ConvertError::missing_input());
    }

    if !has_csv_extension(input) {
        return Err(ConvertError::invalid_extension(input));
    }

    debug!("Reading source file {}", input);
    source.read_to_string(Path::new(input)).await
}

fn has_csv_extension(name: &str) -> bool {
    let split = name.len().saturating_sub(4);
    name.get(split..)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(".csv"))
}

/// Split content into data lines after validating the header row
///
/// Carriage returns are removed and blank lines skipped. The first remaining
/// line is the header; its cells (empty ones dropped) must equal the schema
/// headers in count and order.
pub fn split_rows(content: &str, schema: &SourceSchema, delimiter: &str) -> Result<Vec<String>> {
    let content = content.trim_start_matches(BYTE_ORDER_MARK);
    if content.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let normalized = content.replace('\r', "");
    let mut lines = normalized.split('\n').filter(|line| !line.trim().is_empty());

    let header = lines.next().ok_or(ConvertError::EmptyInput)?;
    let rows: Vec<String> = lines.map(str::to_string).collect();

    if rows.is_empty() {
        return Err(ConvertError::NoDataRows);
    }

    let header_cells: Vec<&str> = header
        .split(delimiter)
        .filter(|cell| !cell.is_empty())
        .collect();

    if !schema.matches_headers(&header_cells) {
        return Err(ConvertError::header_mismatch(schema.headers, delimiter));
    }

    debug!("Found {} data rows for source {}", rows.len(), schema.name);
    Ok(rows)
}
