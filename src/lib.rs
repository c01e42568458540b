//! YNAB CSV Converter Library
//! # Overview
//!
//! Converts bank-exported transaction ledgers into the CSV layout that YNAB
//! (You Need A Budget) imports: `Date;Payee;Category;Memo;Outflow;Inflow`.
//!
//! ```no_run
//! use ynab_csv::{convert, ConvertOptions};
//!
//! # async fn run() -> ynab_csv::Result<()> {
//! let output = convert(
//!     "statement.csv",
//!     ConvertOptions::new().source("nordea").payees(["Spotify", "Netto"]),
//! )
//! .await?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (schemas, date formats, records, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Pipeline stages:
//!   - [`core::registry`] - Supported bank schemas
//!   - [`core::options`] - Option validation and defaults
//!   - [`core::splitter`] - Input loading and header validation
//!   - [`core::transformer`] - Field extraction and cutoff filtering
//! - [`io`] - YNAB CSV serialization and the tokio filesystem collaborator
//! - [`converter`] - The `convert` entry point tying the stages together
//!
//! # Field Rules
//!
//! - **Date**: reparsed from the bank's dialect into the requested one; unparseable dates become today
//! - **Payee**: taken from the bank when it has a payee column, otherwise inferred from the memo
//! - **Category**: copied when the bank provides it
//! - **Memo**: copied with repeated whitespace collapsed
//! - **Outflow / Inflow**: absolute amounts; a single signed column is split by sign

// Module declarations
pub mod cli;
pub mod converter;
pub mod core;
pub mod io;
pub mod types;

pub use converter::{convert, render, ConvertOutput, Converter};
pub use crate::core::{ConvertOptions, InputSource, OutputSink, OutputTarget, RunContext, RunOptions};
pub use io::{write_ynab_csv, TokioFs};
pub use types::{
    ColumnMap, ConvertError, DateFormat, Result, SourceSchema, TargetField, TargetRecord,
};
