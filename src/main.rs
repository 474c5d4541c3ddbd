//! tabula - Inspect and search tabular files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};

use tabula::config::{Config, OutputFormat};
use tabula::output::render_to_stdout;
use tabula::parser::ParserFactory;
use tabula::{Error, MatchOptions, Matcher, Table};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Inspect and search tabular files (CSV, Excel, JSON); row 0 is the header
#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal", global = true)]
    format: CliOutputFormat,

    /// Write JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// For Excel files: which sheet to read
    #[arg(long, global = true)]
    sheet: Option<String>,

    /// Field delimiter for CSV files
    #[arg(short, long, default_value_t = ',', global = true)]
    delimiter: char,

    /// Log loading and search details to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the whole table (default)
    Show,

    /// Render the header row
    Headers,

    /// Print the number of rows below the header
    Count,

    /// Print the header and the first row matching every criterion
    Find {
        /// Criterion as COLUMN=VALUE; COLUMN is a header name or a zero-based index
        #[arg(short, long = "where", value_name = "COLUMN=VALUE", required = true)]
        criteria: Vec<String>,

        /// Ignore case when comparing values
        #[arg(long)]
        ignore_case: bool,

        /// Ignore leading/trailing whitespace when comparing values
        #[arg(long)]
        ignore_whitespace: bool,

        /// Tolerance for numeric comparisons (e.g., 0.001)
        #[arg(long)]
        numeric_tolerance: Option<f64>,
    },
}

/// Writes log records to stderr as `[LEVEL target] message`
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1), // No matching row
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character");
    }

    let mut config = Config::new(cli.file.clone())
        .with_output_format(cli.format.into())
        .with_pretty(!cli.compact)
        .with_delimiter(cli.delimiter as u8);
    if let Some(sheet) = cli.sheet {
        config = config.with_sheet_name(sheet);
    }

    let factory = ParserFactory::new();
    let table = factory
        .parse(&config.input, &config)
        .with_context(|| format!("Failed to parse file: {}", config.input.display()))?;

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => render_to_stdout(&table, config.output_format, config.pretty)?,
        Command::Headers => {
            let headers = Table::new(std::slice::from_ref(table.headers()?))?;
            render_to_stdout(&headers, config.output_format, config.pretty)?;
        }
        Command::Count => println!("{}", table.len().saturating_sub(1)),
        Command::Find {
            criteria,
            ignore_case,
            ignore_whitespace,
            numeric_tolerance,
        } => {
            let config = config.with_match_options(MatchOptions::new(
                ignore_case,
                ignore_whitespace,
                numeric_tolerance,
            ));
            return find(&table, &criteria, &config);
        }
    }

    Ok(true)
}

fn find(table: &Table, criteria: &[String], config: &Config) -> Result<bool> {
    let criteria = criteria
        .iter()
        .map(|criterion| parse_criterion(criterion, table, config))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("Searching with {:?}", criteria);

    match table.find_by_multiple_cells(&criteria) {
        Ok(row) => {
            let result = Table::new(&[table.headers()?.clone(), row.clone()])?;
            render_to_stdout(&result, config.output_format, config.pretty)?;
            Ok(true)
        }
        Err(e @ Error::NoSuchCell { .. }) => {
            eprintln!("{}", e);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Split `COLUMN=VALUE` and resolve the column against the header row
fn parse_criterion(
    criterion: &str,
    table: &Table,
    config: &Config,
) -> Result<(usize, Matcher<'static>)> {
    let (column, value) = criterion
        .split_once('=')
        .with_context(|| format!("Criterion must look like COLUMN=VALUE: {}", criterion))?;

    Ok((resolve_column(table, column)?, config.match_options.matcher(value)))
}

/// Header name first, so numeric headers such as `2020` stay addressable
fn resolve_column(table: &Table, column: &str) -> Result<usize> {
    if let Some(index) = table.column_index(column) {
        return Ok(index);
    }
    column
        .parse::<usize>()
        .with_context(|| format!("Unknown column: {}", column))
}
