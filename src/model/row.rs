//! Append-only rows of cells

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::cell::Cell;
use crate::error::{Error, Result};

/// An ordered sequence of cells
///
/// Cells are copied in on [`Row::push`] and can only be read back. There is
/// no way to replace or remove a cell by index:
///
/// ```compile_fail
/// use tabula::{Cell, Row};
///
/// let mut row = Row::new(&[Cell::new("a")]);
/// row[0] = Cell::new("b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row holding copies of `cells`
    pub fn new(cells: &[Cell]) -> Self {
        let mut row = Self {
            cells: Vec::with_capacity(cells.len()),
        };
        for cell in cells {
            row.push(cell);
        }
        row
    }

    /// Build a row by passing each value through [`Cell::make`]
    pub fn from_array<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let cells = values
            .into_iter()
            .map(Cell::make)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cells })
    }

    /// Append a copy of `cell`
    pub fn push(&mut self, cell: &Cell) {
        self.cells.push(cell.clone());
    }

    pub fn cell(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    #[deprecated(note = "use `Row::cell`")]
    pub fn get(&self, index: usize) -> Result<&Cell> {
        self.cell(index)
    }

    pub fn all(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Plain values of every cell, in order
    pub fn to_array(&self) -> Vec<Value> {
        self.cells.iter().map(Cell::to_value).collect()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.cells.len()))?;
        for cell in &self.cells {
            seq.serialize_element(cell)?;
        }
        seq.end()
    }
}
