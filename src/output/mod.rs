//! Output formatting for tables

mod json;
mod terminal;

use std::io::IsTerminal;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::OutputFormat;
use crate::model::Table;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a table to a writer
    fn render(&self, table: &Table, writer: &mut dyn WriteColor) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat, pretty: bool) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json if pretty => Box::new(JsonOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::compact()),
        }
    }
}

/// Render a table to stdout, with colour when stdout is a terminal
pub fn render_to_stdout(table: &Table, format: OutputFormat, pretty: bool) -> Result<()> {
    let formatter = OutputFactory::create(format, pretty);
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    formatter.render(table, &mut stdout)
}
