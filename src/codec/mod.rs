//! Text Codec Module
//!
//! One-shot transformations between the record store and a line-oriented
//! text file.
//!
//! ## File Format
//! ```text
//! <surname> <name> <day> <month> <year> <grade1> <grade2> <grade3>
//! ```
//! Input accepts any whitespace between fields; output always uses tabs.
//! Names are at most 49 characters, dates are range-checked
//! (day 1-31, month 1-12, year 1900-2100) and grades must be 1-5.
//!
//! ## Error Policy
//! - A file that cannot be opened is reported to the caller
//! - A bad line is logged, counted and skipped; the read carries on

mod line;
mod reader;
mod writer;

pub use line::{decode_line, encode_line, FIELD_COUNT};
pub use reader::{decode_from, read_records, ReadReport};
pub use writer::{encode_to, write_records};
