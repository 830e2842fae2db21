//! Spreadsheet A1 range notation for xlrange.
//!
//! Converts between column numbers and column letters, splits sheet-qualified
//! references, and parses/formats range notation such as `B2:D5`, `D:F`,
//! `5:6` or `'Q1 ''24'''!A1` into a normalised [`RangeDescriptor`].
//!
//! ```
//! use xlrange_primitives::{format_range, parse_range_notation, ALL_ROWS};
//!
//! let parsed = parse_range_notation("d:f").unwrap();
//! assert_eq!(parsed.range.num_rows, ALL_ROWS);
//! assert_eq!(format_range(&parsed.range, None), "D:F");
//! ```
//!
//! Every function here is pure; compiled patterns are shared process-wide
//! and never mutated, so all of it is safe to call from any thread.

pub mod address;
mod error;
pub mod notation;

pub use address::{
    column_label_to_number, column_number_to_label, quote_sheet_name, split_sheet_qualifier,
    INVALID_COLUMN, MAX_COLUMN_COUNT, MAX_ROW_COUNT,
};
pub use error::{NotationError, Result};
pub use notation::{
    format_range, format_range_with, parse_range_notation, FormatOptions, QualifiedRange,
    RangeDescriptor, ALL_COLUMNS, ALL_ROWS,
};
