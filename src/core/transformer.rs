//! Row transformer
//!
//! Maps each data line of a bank export onto a [`TargetRecord`]. Every target
//! field is produced by its own extraction rule, looked up in a static table
//! keyed by [`TargetField`]. Rules only see the per-run [`RunContext`] and the
//! cells of the current row, so concurrent conversions never share state.
//!
//! # Amount Columns
//!
//! Banks either export separate outflow and inflow columns, or a single signed
//! amount. When the schema maps both fields to the same column the sign
//! decides which side gets the value:
//!
//! ```text
//! Beløb    Outflow  Inflow
//! -99,00   99
//! 500,00            500
//! ```

use crate::core::options::RunOptions;
use crate::core::registry;
use crate::types::{ConvertError, Result, SourceSchema, TargetField, TargetRecord};
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use rust_decimal::Decimal;
use std::sync::LazyLock;

static REPEATED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Everything a single conversion needs while transforming rows
#[derive(Debug, Clone)]
pub struct RunContext {
    pub schema: &'static SourceSchema,
    pub options: RunOptions,
    payee_patterns: Vec<(String, Regex)>,
    today: NaiveDate,
}

impl RunContext {
    /// Build the context for a validated set of options
    pub fn new(options: RunOptions) -> Result<Self> {
        Self::with_today(options, Local::now().date_naive())
    }

    /// Build the context with a fixed fallback date for unparseable date cells
    pub fn with_today(options: RunOptions, today: NaiveDate) -> Result<Self> {
        let schema = registry::lookup(&options.source)
            .ok_or_else(|| ConvertError::unknown_source(&options.source, &registry::names()))?;

        let payee_patterns = options
            .payees
            .iter()
            .filter_map(|candidate| {
                let pattern = payee_pattern(candidate);
                if pattern.is_none() {
                    warn!("Ignoring payee candidate '{}': pattern too large", candidate);
                }
                pattern.map(|pattern| (candidate.clone(), pattern))
            })
            .collect();

        Ok(Self {
            schema,
            options,
            payee_patterns,
            today,
        })
    }

    fn cell<'a>(&self, cells: &[&'a str], field: TargetField) -> Option<&'a str> {
        self.schema
            .columns
            .get(field)
            .map(|index| cells.get(index).copied().unwrap_or(""))
    }

    /// Transaction date of a row, or `None` when the schema has no date column
    ///
    /// Cells that do not parse under the schema's dialect fall back to today.
    fn row_date(&self, cells: &[&str]) -> Option<NaiveDate> {
        let raw = self.cell(cells, TargetField::Date)?;
        let format = self.schema.date_format_for(self.options.date_format);
        let date = format.parse_lenient(raw).unwrap_or_else(|| {
            warn!("Could not parse date '{}' as {}, using today's date", raw, format);
            self.today
        });
        Some(date)
    }
}

/// A candidate is tried as a case-insensitive pattern, then as a literal
fn payee_pattern(candidate: &str) -> Option<Regex> {
    RegexBuilder::new(candidate)
        .case_insensitive(true)
        .build()
        .or_else(|_| {
            RegexBuilder::new(&regex::escape(candidate))
                .case_insensitive(true)
                .build()
        })
        .ok()
}

/// Extraction rule for one target field
pub type Extractor = fn(&RunContext, &[&str]) -> String;

/// Extraction rules in output order
pub const EXTRACTORS: [(TargetField, Extractor); 6] = [
    (TargetField::Date, extract_date),
    (TargetField::Payee, extract_payee),
    (TargetField::Category, extract_category),
    (TargetField::Memo, extract_memo),
    (TargetField::Outflow, extract_outflow),
    (TargetField::Inflow, extract_inflow),
];

fn extract_date(ctx: &RunContext, cells: &[&str]) -> String {
    ctx.row_date(cells)
        .map(|date| ctx.options.date_format.format(date))
        .unwrap_or_default()
}

fn extract_payee(ctx: &RunContext, cells: &[&str]) -> String {
    if let Some(payee) = ctx.cell(cells, TargetField::Payee) {
        return payee.to_string();
    }

    let memo = ctx.cell(cells, TargetField::Memo).unwrap_or("");
    ctx.payee_patterns
        .iter()
        .find(|(_, pattern)| pattern.is_match(memo))
        .map(|(name, _)| name.clone())
        .unwrap_or_default()
}

fn extract_category(ctx: &RunContext, cells: &[&str]) -> String {
    ctx.cell(cells, TargetField::Category)
        .unwrap_or_default()
        .to_string()
}

fn extract_memo(ctx: &RunContext, cells: &[&str]) -> String {
    ctx.cell(cells, TargetField::Memo)
        .map(|memo| REPEATED_WHITESPACE.replace_all(memo, " ").into_owned())
        .unwrap_or_default()
}

fn extract_outflow(ctx: &RunContext, cells: &[&str]) -> String {
    extract_amount(ctx, cells, TargetField::Outflow)
}

fn extract_inflow(ctx: &RunContext, cells: &[&str]) -> String {
    extract_amount(ctx, cells, TargetField::Inflow)
}

fn extract_amount(ctx: &RunContext, cells: &[&str], field: TargetField) -> String {
    let Some(raw) = ctx.cell(cells, field) else {
        return String::new();
    };
    let raw = raw.trim();

    // Single signed column: negative amounts are outflows, the rest inflows
    if ctx.schema.columns.has_combined_amount() {
        let negative = raw.starts_with('-');
        let suppressed = match field {
            TargetField::Outflow => !negative,
            _ => negative,
        };
        if suppressed {
            return String::new();
        }
    }

    if raw.is_empty() {
        return String::new();
    }

    match parse_amount(raw) {
        Some(amount) => amount.abs().normalize().to_string(),
        None => {
            warn!("Could not parse {} amount '{}', leaving it empty", field, raw);
            String::new()
        }
    }
}

/// Parse an amount written with either a decimal comma or a decimal point
///
/// When both separators appear, the last one is the decimal separator and the
/// other one groups thousands.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let normalized = match (raw.rfind(','), raw.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => raw.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => raw.replace(',', ""),
        (Some(_), None) => raw.replacen(',', ".", 1),
        _ => raw.to_string(),
    };
    normalized.parse::<Decimal>().ok()
}

/// Transform a single data line, or `None` when it falls after the cutoff date
pub fn transform_row(ctx: &RunContext, row: &str) -> Option<TargetRecord> {
    let cells: Vec<&str> = row.split(ctx.options.delimiter.as_str()).collect();

    if let Some(last_date) = ctx.options.last_date {
        if ctx.row_date(&cells).is_some_and(|date| date > last_date) {
            return None;
        }
    }

    let mut record = TargetRecord::default();
    for (field, extract) in EXTRACTORS {
        *record.field_mut(field) = extract(ctx, &cells);
    }
    Some(record)
}

/// Transform all data lines, preserving order and dropping rows after the cutoff
pub fn transform(ctx: &RunContext, rows: &[String]) -> Vec<TargetRecord> {
    let records: Vec<TargetRecord> = rows
        .iter()
        .filter_map(|row| transform_row(ctx, row))
        .collect();

    debug!(
        "Transformed {} rows, {} dropped by the cutoff date",
        records.len(),
        rows.len() - records.len()
    );
    records
}
