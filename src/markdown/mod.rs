//! GitHub-Flavored Markdown table codec
//!
//! Converts table text to a [`Table`](crate::table::Table) and back.
//!
//! ```text
//! | H1 | H2 |      header row
//! | --- | :---: |  delimiter row (alignment per column)
//! | a | b |        zero or more data rows
//! ```
//!
//! Parsing tolerates missing outer pipes and arbitrary whitespace around
//! cells; serialization always writes outer pipes and single-space padding.

mod parser;
mod serializer;

pub use parser::{parse, parse_row, validate, FormatError};
pub use serializer::{serialize, serialize_row};
