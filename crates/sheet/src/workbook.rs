//! The spreadsheet object model a [`Range`](crate::Range) reads from.
//!
//! Any workbook implementation (a loaded file, a database-backed grid, the
//! in-memory [`Book`](crate::Book)) can be selected from once it provides
//! sheet lookup by name and 1-based cell access.

/// A single sheet: a name, its populated extent and 1-based cell access.
pub trait Worksheet {
    type Cell;

    fn name(&self) -> &str;

    /// Index of the last populated row (1-based), 0 for an empty sheet.
    fn max_row(&self) -> usize;

    /// Index of the last populated column (1-based), 0 for an empty sheet.
    fn max_column(&self) -> usize;

    /// Cell at `row`, `column` (both 1-based), if it exists.
    fn cell(&self, row: usize, column: usize) -> Option<&Self::Cell>;
}

/// A collection of named sheets.
pub trait Workbook {
    type Sheet: Worksheet;

    fn sheet(&self, name: &str) -> Option<&Self::Sheet>;
}
