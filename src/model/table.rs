//! Tables of equal-width rows with header-aware search

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::matcher::Matcher;
use super::row::Row;
use crate::error::{Error, Result};

/// An ordered sequence of rows sharing one width
///
/// The first row pushed fixes the width for the life of the table and is, by
/// convention, the header row. Rows are copied in on [`Table::push`]; like
/// [`Row`], a table has no indexed write path:
///
/// ```compile_fail
/// use tabula::{Cell, Row, Table};
///
/// let mut table = Table::new(&[Row::new(&[Cell::new("h")])]).unwrap();
/// table[0] = Row::new(&[Cell::new("x")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    /// `None` until the first push
    width: Option<usize>,
}

impl Table {
    /// Create a table holding copies of `rows`
    ///
    /// Every row is validated as if pushed one at a time.
    pub fn new(rows: &[Row]) -> Result<Self> {
        let mut table = Self::default();
        for row in rows {
            table.push(row)?;
        }
        Ok(table)
    }

    /// Build a table from nested plain values, one inner sequence per row
    pub fn from_array<R, I, T>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let mut table = Self::default();
        for values in rows {
            let row = Row::from_array(values)?;
            table.push(&row)?;
        }
        Ok(table)
    }

    /// Decode JSON text holding an array of arrays and build a table from it
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| Error::InvalidJson {
            reason: e.to_string(),
        })?;

        let Value::Array(rows) = value else {
            return Err(Error::InvalidJson {
                reason: "expected an array of rows".to_string(),
            });
        };

        let mut table = Self::default();
        for (index, row) in rows.into_iter().enumerate() {
            let Value::Array(values) = row else {
                return Err(Error::InvalidJson {
                    reason: format!("row {} is not an array", index),
                });
            };
            table.push(&Row::from_array(values)?)?;
        }
        Ok(table)
    }

    /// Append a copy of `row`
    ///
    /// The first row fixes the table width. A later row of any other width is
    /// rejected and the table is left unchanged.
    pub fn push(&mut self, row: &Row) -> Result<()> {
        let expected = *self.width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(Error::RowLengthMismatch {
                expected,
                actual: row.len(),
            });
        }
        self.rows.push(row.clone());
        Ok(())
    }

    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    #[deprecated(note = "use `Table::row`")]
    pub fn get(&self, index: usize) -> Result<&Row> {
        self.row(index)
    }

    pub fn all(&self) -> &[Row] {
        &self.rows
    }

    /// The header row (row 0)
    pub fn headers(&self) -> Result<&Row> {
        self.row(0)
    }

    /// A new table holding copies of every row but the header
    pub fn except_headers(&self) -> Table {
        let mut table = Table::default();
        for row in self.rows.iter().skip(1) {
            table.rows.push(row.clone());
            table.width = Some(row.len());
        }
        table
    }

    /// Width fixed by the first row, or `None` while the table is empty
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Index of the first header cell whose value equals `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.rows
            .first()
            .and_then(|headers| headers.iter().position(|cell| cell.value() == name))
    }

    /// First data row whose cell at `cell_index` matches `matcher`
    ///
    /// The header row is never considered.
    pub fn find_by_cell<'m>(
        &self,
        cell_index: usize,
        matcher: impl Into<Matcher<'m>>,
    ) -> Result<&Row> {
        self.find_by_multiple_cells(&[(cell_index, matcher.into())])
    }

    /// First data row where every `(cell_index, matcher)` pair matches
    ///
    /// Criteria are combined with logical AND. An empty criteria list matches
    /// the first data row.
    pub fn find_by_multiple_cells(&self, criteria: &[(usize, Matcher<'_>)]) -> Result<&Row> {
        for row in self.rows.iter().skip(1) {
            let mut matched = true;
            for (cell_index, matcher) in criteria {
                if !row.cell(*cell_index)?.matches(matcher) {
                    matched = false;
                    break;
                }
            }
            if matched {
                return Ok(row);
            }
        }

        Err(Error::NoSuchCell {
            criteria: criteria
                .iter()
                .map(|(index, matcher)| (*index, matcher.describe()))
                .collect(),
        })
    }

    /// Plain values of every row, in order
    pub fn to_array(&self) -> Vec<Vec<Value>> {
        self.rows.iter().map(Row::to_array).collect()
    }

    /// Number of rows, header included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
