use crate::core::ConvertOptions;
use clap::Parser;

/// Generate a CSV file readable by YNAB (youneedabudget.com) from a bank export
#[derive(Parser, Debug)]
#[command(name = "ynab-csv")]
#[command(
    about = "Generates a csv file in format readable by YNAB (youneedabudget.com)",
    long_about = None
)]
pub struct CliArgs {
    /// Bank export to convert, or CSV text with --csvstring
    #[arg(value_name = "FILE", help = "Path to the bank .csv file, or the csv string itself")]
    pub input: Option<String>,

    /// Source bank schema
    #[arg(
        short = 's',
        long = "source",
        value_name = "SOURCE",
        help = "Source to use for reading the provided csv (default: nordea)"
    )]
    pub source: Option<String>,

    /// Output file name or directory
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT",
        help = "Output filename (with or without .csv extension) or directory (default: ynab)"
    )]
    pub output: Option<String>,

    /// Last transaction date to include
    #[arg(
        short = 'l',
        long = "lastdate",
        value_name = "DATE",
        help = "Last date for a transaction to be added to the generated csv, in the output date format"
    )]
    pub last_date: Option<String>,

    /// Payees to look for in the memo
    #[arg(
        short = 'p',
        long = "payees",
        value_name = "PAYEES",
        value_delimiter = ',',
        help = "List of payees to match in the memo, comma separated"
    )]
    pub payees: Option<Vec<String>>,

    /// Cell delimiter of the bank export
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIMITER",
        help = "Cell delimiter in the source file (default: the source's own delimiter)"
    )]
    pub delimiter: Option<String>,

    /// Treat FILE as CSV text
    #[arg(short = 'c', long = "csvstring", help = "Provide a csv string instead of a file")]
    pub csv_string: bool,

    /// Print the result instead of writing it
    #[arg(
        short = 'n',
        long = "no-write",
        help = "Does not write the generated file, it just outputs it"
    )]
    pub no_write: bool,

    /// Date format of the generated file
    #[arg(
        short = 'f',
        long = "dateformat",
        value_name = "FORMAT",
        help = "Date format for the generated csv (default: DD/MM/YYYY)"
    )]
    pub date_format: Option<String>,
}

impl CliArgs {
    /// Input argument, empty when none was given
    pub fn input(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    /// Build converter options from the flags the user actually passed
    ///
    /// Omitted flags stay `None` so the converter can apply its own defaults,
    /// including the selected source's delimiter.
    pub fn to_convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            source: self.source.clone(),
            delimiter: self.delimiter.clone(),
            date_format: self.date_format.clone(),
            last_date: self.last_date.clone(),
            payees: self.payees.clone(),
            output: self.output.clone(),
            csv_string: self.csv_string.then_some(true),
            write: self.no_write.then_some(false),
        }
    }
}
