//! Bank schema types
//!
//! A [`SourceSchema`] declares the exact shape of one bank's CSV export and
//! how its columns map onto the six YNAB target fields.

use crate::types::DateFormat;
use std::fmt;

/// The six fields of the YNAB import format, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetField {
    Date,
    Payee,
    Category,
    Memo,
    Outflow,
    Inflow,
}

impl TargetField {
    /// All target fields in the order they appear in the generated file
    pub const ALL: [TargetField; 6] = [
        TargetField::Date,
        TargetField::Payee,
        TargetField::Category,
        TargetField::Memo,
        TargetField::Outflow,
        TargetField::Inflow,
    ];

    /// Column label in the generated file
    pub fn heading(&self) -> &'static str {
        match self {
            TargetField::Date => "Date",
            TargetField::Payee => "Payee",
            TargetField::Category => "Category",
            TargetField::Memo => "Memo",
            TargetField::Outflow => "Outflow",
            TargetField::Inflow => "Inflow",
        }
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// Source column index for each target field, `None` when the bank has no such column
///
/// Mapping `outflow` and `inflow` to the same index declares a single signed
/// amount column that the transformer splits by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: Option<usize>,
    pub payee: Option<usize>,
    pub category: Option<usize>,
    pub memo: Option<usize>,
    pub outflow: Option<usize>,
    pub inflow: Option<usize>,
}

impl ColumnMap {
    /// Source column for a target field
    pub fn get(&self, field: TargetField) -> Option<usize> {
        match field {
            TargetField::Date => self.date,
            TargetField::Payee => self.payee,
            TargetField::Category => self.category,
            TargetField::Memo => self.memo,
            TargetField::Outflow => self.outflow,
            TargetField::Inflow => self.inflow,
        }
    }

    /// Whether outflow and inflow share one signed amount column
    pub fn has_combined_amount(&self) -> bool {
        self.outflow.is_some() && self.outflow == self.inflow
    }
}

/// Declared CSV export shape of one bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSchema {
    /// Registry key
    pub name: &'static str,
    /// Expected header cells, exact text and order
    pub headers: &'static [&'static str],
    pub columns: ColumnMap,
    /// Dialect of the date column in the export, `None` when it follows the
    /// dialect requested for the output
    pub date_format: Option<DateFormat>,
    /// Default cell delimiter of the export
    pub delimiter: &'static str,
}

impl SourceSchema {
    /// Dialect to read the date column with, given the run's output dialect
    pub fn date_format_for(&self, output: DateFormat) -> DateFormat {
        self.date_format.unwrap_or(output)
    }

    /// Number of columns in the export
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether a header row matches this schema exactly (count and position)
    pub fn matches_headers(&self, cells: &[&str]) -> bool {
        self.headers.len() == cells.len()
            && self.headers.iter().zip(cells).all(|(expected, actual)| expected == actual)
    }
}
