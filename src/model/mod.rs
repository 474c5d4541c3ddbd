//! Data model: cells, rows and tables

mod cell;
mod coerce;
mod matcher;
mod row;
mod table;

pub use cell::Cell;
pub use matcher::{MatchOptions, Matcher};
pub use row::Row;
pub use table::Table;
