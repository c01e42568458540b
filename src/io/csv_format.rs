//! YNAB CSV serialization
//!
//! The generated file always uses `;` between fields, whatever delimiter the
//! bank export used, and has no newline after the last row.

use crate::types::{ConvertError, Result, TargetField, TargetRecord};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Field separator of the generated file
pub const YNAB_DELIMITER: u8 = b';';

/// Render records as YNAB CSV text
///
/// Writes the fixed `Date;Payee;Category;Memo;Outflow;Inflow` header followed
/// by one line per record. Fields are written as-is, without quoting.
pub fn write_ynab_csv(records: &[TargetRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(YNAB_DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(TargetField::ALL.iter().map(TargetField::heading))?;

    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConvertError::from(e.into_error()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| ConvertError::IoError {
        message: format!("Generated CSV is not valid UTF-8: {}", e),
    })?;

    if text.ends_with('\n') {
        text.pop();
    }

    Ok(text)
}
