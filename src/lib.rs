//! tabula - Append-only tables of rows and cells
//!
//! A [`Table`] is an ordered list of equal-width [`Row`]s, each an ordered
//! list of [`Cell`]s. Cells hold text, optionally flagged as encoded JSON so
//! that arrays and objects survive a round trip through the table. Row 0 is
//! the header and is skipped by row search.
//!
//! ```
//! use tabula::{Matcher, Table};
//!
//! let table = Table::from_array([
//!     ["id", "flag", "qty"],
//!     ["1", "n", "10"],
//!     ["2", "y", "20"],
//! ])?;
//!
//! let row = table.find_by_cell(1, "y")?;
//! assert_eq!(row.cell(0)?.value(), "2");
//!
//! let row = table.find_by_multiple_cells(&[
//!     (1, Matcher::from("n")),
//!     (2, Matcher::predicate(|v| v.parse::<i32>().map_or(false, |n| n < 15))),
//! ])?;
//! assert_eq!(row.cell(0)?.value(), "1");
//! # Ok::<(), tabula::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Cell, MatchOptions, Matcher, Row, Table};
