//! JSON output format

use std::io::Write;

use anyhow::Result;
use termcolor::WriteColor;

use crate::model::Table;

use super::OutputFormatter;

/// JSON output formatter
///
/// JSON cells are inlined as structures, plain cells appear as strings.
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn WriteColor) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, table)?;
        } else {
            serde_json::to_writer(&mut *writer, table)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    #[test]
    fn test_compact() {
        let table = Table::from_json(r#"[["k", "v"], ["a", {"b": "c"}]]"#).unwrap();
        let mut writer = NoColor::new(Vec::new());
        JsonOutput::compact().render(&table, &mut writer).unwrap();
        assert_eq!(
            String::from_utf8(writer.into_inner()).unwrap(),
            "[[\"k\",\"v\"],[\"a\",{\"b\":\"c\"}]]\n"
        );
    }

    #[test]
    fn test_pretty_parses_back() {
        let table = Table::from_array([["x", "y"]]).unwrap();
        let mut writer = NoColor::new(Vec::new());
        JsonOutput::new().render(&table, &mut writer).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(Table::from_json(&text).unwrap(), table);
    }
}
