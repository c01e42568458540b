//! Date dialects understood by the converter
//!
//! Bank exports and the generated YNAB file each use one of seven fixed
//! dialects. A dialect is spelled the way users pass it on the command line
//! (`DD/MM/YYYY`) and maps onto a chrono format string internally.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// One of the seven supported date dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `DD/MM/YYYY`
    #[default]
    DayMonthYearSlash,
    /// `YYYY/MM/DD`
    YearMonthDaySlash,
    /// `YYYY-MM-DD`
    YearMonthDayDash,
    /// `DD-MM-YYYY`
    DayMonthYearDash,
    /// `DD.MM.YYYY`
    DayMonthYearDot,
    /// `MM/DD/YYYY`
    MonthDayYearSlash,
    /// `YYYY.MM.DD`
    YearMonthDayDot,
}

impl DateFormat {
    /// Every supported dialect, in the order they are listed to users
    pub const ALL: [DateFormat; 7] = [
        DateFormat::DayMonthYearSlash,
        DateFormat::YearMonthDaySlash,
        DateFormat::YearMonthDayDash,
        DateFormat::DayMonthYearDash,
        DateFormat::DayMonthYearDot,
        DateFormat::MonthDayYearSlash,
        DateFormat::YearMonthDayDot,
    ];

    /// The user-facing spelling of the dialect
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYearSlash => "DD/MM/YYYY",
            DateFormat::YearMonthDaySlash => "YYYY/MM/DD",
            DateFormat::YearMonthDayDash => "YYYY-MM-DD",
            DateFormat::DayMonthYearDash => "DD-MM-YYYY",
            DateFormat::DayMonthYearDot => "DD.MM.YYYY",
            DateFormat::MonthDayYearSlash => "MM/DD/YYYY",
            DateFormat::YearMonthDayDot => "YYYY.MM.DD",
        }
    }

    fn chrono_format(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYearSlash => "%d/%m/%Y",
            DateFormat::YearMonthDaySlash => "%Y/%m/%d",
            DateFormat::YearMonthDayDash => "%Y-%m-%d",
            DateFormat::DayMonthYearDash => "%d-%m-%Y",
            DateFormat::DayMonthYearDot => "%d.%m.%Y",
            DateFormat::MonthDayYearSlash => "%m/%d/%Y",
            DateFormat::YearMonthDayDot => "%Y.%m.%d",
        }
    }

    /// Spellings of all dialects, for error messages
    pub fn patterns() -> Vec<&'static str> {
        Self::ALL.iter().map(DateFormat::pattern).collect()
    }

    /// Parse a date exactly as written in this dialect
    ///
    /// No surrounding whitespace, no missing zero padding. A value is accepted
    /// only if formatting the parsed date gives back the same string.
    pub fn parse_strict(&self, value: &str) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(value, self.chrono_format()).ok()?;
        (self.format(date) == value).then_some(date)
    }

    /// Parse a date cell from a bank export
    ///
    /// Surrounding whitespace and unpadded day/month numbers are tolerated.
    pub fn parse_lenient(&self, value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), self.chrono_format()).ok()
    }

    /// Render a date in this dialect
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.chrono_format()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.pattern() == s)
            .ok_or_else(|| format!("Unsupported date format: {}", s))
    }
}
