//! YNAB CSV Converter CLI
//!
//! Command-line interface for converting bank CSV exports into YNAB imports.
//!
//! # Usage
//!
//! ```bash
//! ynab-csv statement.csv
//! ynab-csv --source nordea --output budgets/ --payees "Spotify,Netto" statement.csv
//! ynab-csv --lastdate 31/10/2016 --dateformat DD/MM/YYYY statement.csv
//! ynab-csv --no-write --csvstring "$(cat statement.csv)"
//! ```
//!
//! The generated file is written to `ynab.csv` in the working directory unless
//! `--output` says otherwise. With `--no-write` the CSV is printed to stdout.
//! Set `RUST_LOG=debug` to trace the pipeline.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid options, unreadable file, header mismatch, etc.), followed
//!   by the usage text

use std::process;
use ynab_csv::{cli, convert};

fn main() {
    env_logger::init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            process::exit(1);
        }
    };

    match runtime.block_on(convert(args.input(), args.to_convert_options())) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}\n", e);
            eprint!("{}", cli::usage());
            process::exit(1);
        }
    }
}
