//! Range selection over spreadsheet workbooks.
//!
//! [`Range`] selects a rectangle of cells on a sheet using A1 notation
//! (`"Sheet 1!B2:D5"`, `"D:F"`, `"5:6"`), a single cell or an explicit
//! region, and reads the selected cells back. It works against any
//! workbook implementing [`Workbook`]; [`Book`] and [`Sheet`] are an
//! in-memory implementation.
//!
//! # Examples
//!
//! ```
//! use xlrange_sheet::{Book, Range, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("Sheet 1", Sheet::from_data(vec![
//!     vec!["Name", "Qty"],
//!     vec!["Apple", "10"],
//! ])).unwrap();
//!
//! let mut range = Range::new(&book);
//! range.select("'Sheet 1'!b2").unwrap();
//! assert_eq!(range.cell().unwrap().to_string(), "Apple");
//! assert_eq!(range.format(true), "Sheet 1!B2");
//!
//! range.select((1, 1, 2, 2)).unwrap();
//! assert_eq!(range.to_string(), "A1:B2");
//! ```

mod book;
mod cell;
mod error;
mod range;
mod sheet;
mod workbook;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export range types.
pub use range::{Range, Selection};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export the workbook contract.
pub use workbook::{Workbook, Worksheet};
