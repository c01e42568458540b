// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::{CommandFactory, Parser};

/// Parse command-line arguments using clap
///
/// Invalid arguments or `--help` make clap print its message and exit the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Usage text shown after a failed conversion
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}
