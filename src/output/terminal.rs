//! Box-drawn terminal output

use std::io::Write;

use anyhow::Result;
use termcolor::{ColorSpec, WriteColor};

use crate::model::Table;

use super::OutputFormatter;

/// Terminal output with a bold header row
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn write_border(
        &self,
        widths: &[usize],
        (left, mid, right): (char, char, char),
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let mut line = String::new();
        line.push(left);
        for (i, width) in widths.iter().enumerate() {
            line.push_str(&"─".repeat(*width + 2));
            if i < widths.len() - 1 {
                line.push(mid);
            }
        }
        line.push(right);
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn write_line(
        &self,
        cells: &[String],
        widths: &[usize],
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        write!(writer, "│")?;
        for (cell, width) in cells.iter().zip(widths) {
            write!(writer, " {:width$} │", cell, width = *width)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, table: &Table, writer: &mut dyn WriteColor) -> Result<()> {
        let data: Vec<Vec<String>> = table
            .iter()
            .map(|row| row.iter().map(|cell| cell.value().to_string()).collect())
            .collect();

        let Some(header) = data.first() else {
            writeln!(writer, "(empty table)")?;
            return Ok(());
        };
        if header.is_empty() {
            writeln!(writer, "({} rows without cells)", data.len())?;
            return Ok(());
        }

        let widths = column_widths(&data);

        self.write_border(&widths, ('┌', '┬', '┐'), writer)?;

        writer.set_color(ColorSpec::new().set_bold(true))?;
        self.write_line(header, &widths, writer)?;
        writer.reset()?;

        if data.len() > 1 {
            self.write_border(&widths, ('├', '┼', '┤'), writer)?;
            for row in &data[1..] {
                self.write_line(row, &widths, writer)?;
            }
        }

        self.write_border(&widths, ('└', '┴', '┘'), writer)?;
        Ok(())
    }
}

/// Widest value per column, in characters
fn column_widths(data: &[Vec<String>]) -> Vec<usize> {
    let col_count = data.first().map_or(0, Vec::len);
    let mut widths = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    widths
}
