//! JSON array parser

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indexmap::IndexSet;
use serde_json::Value;

use crate::config::Config;
use crate::model::Table;

use super::Parser;

/// Parser for JSON array files
///
/// Accepts an array of arrays (rows as-is) or an array of objects (keys
/// become the header row).
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, path: &Path, _config: &Config) -> Result<Table> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open JSON file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let value: Value =
            serde_json::from_reader(reader).context("Failed to parse JSON file")?;

        value_to_table(value)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "json")
    }
}

/// Convert a decoded JSON document into a table
pub fn value_to_table(value: Value) -> Result<Table> {
    // Handle both arrays and single objects
    let array = match value {
        Value::Array(arr) => arr,
        Value::Object(_) => vec![value],
        _ => bail!("JSON must be an array or object"),
    };

    if array.iter().all(Value::is_array) {
        let rows = array.into_iter().map(|row| match row {
            Value::Array(values) => values,
            _ => Vec::new(),
        });
        return Ok(Table::from_array(rows)?);
    }

    if !array.iter().all(Value::is_object) {
        bail!("JSON rows must be all arrays or all objects");
    }

    // Collect all unique keys across all objects to build the header row
    let mut column_names: IndexSet<String> = IndexSet::new();
    for item in &array {
        if let Value::Object(obj) = item {
            for key in obj.keys() {
                column_names.insert(key.clone());
            }
        }
    }
    log::debug!("Discovered {} columns in JSON objects", column_names.len());

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(array.len() + 1);
    rows.push(
        column_names
            .iter()
            .map(|name| Value::String(name.clone()))
            .collect(),
    );

    for item in &array {
        if let Value::Object(obj) = item {
            rows.push(
                column_names
                    .iter()
                    .map(|key| obj.get(key).cloned().unwrap_or(Value::Null))
                    .collect(),
            );
        }
    }

    Ok(Table::from_array(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_of_arrays() {
        let table = value_to_table(json!([["a", "b"], ["1", ["x", "y"]]])).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.row(1).unwrap().cell(1).unwrap().is_json());
    }

    #[test]
    fn test_array_of_objects() {
        let table = value_to_table(json!([
            {"id": 1, "name": "ann"},
            {"id": 2, "tags": ["x"]}
        ]))
        .unwrap();

        assert_eq!(
            table.to_array(),
            vec![
                vec![json!("id"), json!("name"), json!("tags")],
                vec![json!("1"), json!("ann"), json!("")],
                vec![json!("2"), json!(""), json!(["x"])],
            ]
        );
    }

    #[test]
    fn test_single_object() {
        let table = value_to_table(json!({"k": "v"})).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_rejects_mixed_rows() {
        assert!(value_to_table(json!([["a"], {"k": "v"}])).is_err());
        assert!(value_to_table(json!("scalar")).is_err());
    }
}
