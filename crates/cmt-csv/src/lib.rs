//! # cmt-csv — CSV Parsing and Writing
//!
//! The catalog datasets ship as comma-separated text with quoted fields,
//! and assessments export back out the same way. This crate owns both
//! directions.
//!
//! The parser is deliberately permissive and deliberately NOT RFC 4180:
//!
//! - every field is whitespace-trimmed after quote-unescaping, including
//!   quoted content (a compatibility quirk of the upstream datasets, kept
//!   on purpose);
//! - malformed quoting is never an error: an unterminated quote simply
//!   consumes to end of input;
//! - no trailing line break is required for the last row to count.
//!
//! The writer takes the opposite convention: every field is quoted, with
//! internal quotes doubled, so exported values round-trip through the
//! parser regardless of embedded commas or line breaks.
//!
//! Because of the trim rule, parsing is lossy for fields with leading or
//! trailing whitespace. That is the contract, not a defect; do not "fix"
//! it with a strict mode.

mod parser;
mod writer;

pub use parser::parse;
pub use writer::{quote_field, write_row, write_rows};
