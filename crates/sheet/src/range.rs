//! Rectangular selections over a workbook sheet.

use std::fmt;

use xlrange_primitives::{
    format_range, parse_range_notation, RangeDescriptor, ALL_COLUMNS, ALL_ROWS,
};

use crate::error::{Result, SheetError};
use crate::workbook::{Workbook, Worksheet};

/// What to select with [`Range::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A1 notation, optionally sheet-qualified (`Sheet 1!B2:D5`).
    ByNotation(String),
    /// A single cell, 1-based.
    ByCell { row: i32, column: i32 },
    /// A region, 1-based; counts may be [`ALL_ROWS`] / [`ALL_COLUMNS`].
    ByRegion {
        row: i32,
        column: i32,
        num_rows: i32,
        num_columns: i32,
    },
}

impl From<&str> for Selection {
    fn from(notation: &str) -> Self {
        Selection::ByNotation(notation.to_string())
    }
}

impl From<String> for Selection {
    fn from(notation: String) -> Self {
        Selection::ByNotation(notation)
    }
}

impl From<(i32, i32)> for Selection {
    fn from((row, column): (i32, i32)) -> Self {
        Selection::ByCell { row, column }
    }
}

impl From<(i32, i32, i32, i32)> for Selection {
    fn from((row, column, num_rows, num_columns): (i32, i32, i32, i32)) -> Self {
        Selection::ByRegion {
            row,
            column,
            num_rows,
            num_columns,
        }
    }
}

impl From<RangeDescriptor> for Selection {
    fn from(range: RangeDescriptor) -> Self {
        Selection::ByRegion {
            row: range.row,
            column: range.column,
            num_rows: range.num_rows,
            num_columns: range.num_columns,
        }
    }
}

/// A selected range of cells on one sheet of a workbook.
///
/// A fresh range covers the whole sheet. Unbounded axes are resolved against
/// the sheet's populated extent only when cells are read.
///
/// ```
/// use xlrange_sheet::{Book, Range, Sheet};
///
/// let mut book = Book::new();
/// book.add_sheet("Data", Sheet::from_data(vec![vec![1, 2], vec![3, 4]])).unwrap();
///
/// let mut range = Range::new(&book);
/// range.select("Data!B1:B2").unwrap();
/// let values: Vec<i64> = range
///     .cells()
///     .unwrap()
///     .iter()
///     .map(|row| row[0].as_int().unwrap())
///     .collect();
/// assert_eq!(values, vec![2, 4]);
/// ```
pub struct Range<'a, B: Workbook> {
    book: &'a B,
    sheet: Option<&'a B::Sheet>,
    selection: RangeDescriptor,
}

impl<'a, B: Workbook> Range<'a, B> {
    /// A range over `book` with no sheet chosen yet.
    pub fn new(book: &'a B) -> Self {
        Self {
            book,
            sheet: None,
            selection: RangeDescriptor::whole_sheet(),
        }
    }

    /// A range over the whole of the named sheet.
    pub fn with_sheet(book: &'a B, name: &str) -> Result<Self> {
        let mut range = Self::new(book);
        range.set_sheet(name)?;
        Ok(range)
    }

    pub fn sheet(&self) -> Option<&'a B::Sheet> {
        self.sheet
    }

    pub fn descriptor(&self) -> RangeDescriptor {
        self.selection
    }

    pub fn row(&self) -> i32 {
        self.selection.row
    }

    pub fn column(&self) -> i32 {
        self.selection.column
    }

    pub fn num_rows(&self) -> i32 {
        self.selection.num_rows
    }

    pub fn num_columns(&self) -> i32 {
        self.selection.num_columns
    }

    /// Switch to the named sheet, keeping the current selection.
    pub fn set_sheet(&mut self, name: &str) -> Result<()> {
        self.sheet = Some(self.lookup_sheet(name)?);
        tracing::debug!(sheet = name, "range sheet switched");
        Ok(())
    }

    /// Change the selection.
    ///
    /// Sheet-qualified notation also switches the sheet. If the notation is
    /// invalid or names a sheet the workbook does not have, the range is left
    /// unchanged. Cell and region selections must start at row/column 1 or
    /// later, except on an axis the region spans entirely.
    pub fn select(&mut self, selection: impl Into<Selection>) -> Result<()> {
        let selection = selection.into();
        let descriptor = match &selection {
            Selection::ByNotation(notation) => {
                let parsed = parse_range_notation(notation)?;
                if let Some(name) = parsed.sheet_name.as_deref() {
                    self.sheet = Some(self.lookup_sheet(name)?);
                }
                parsed.range
            }
            Selection::ByCell { row, column } => RangeDescriptor::cell(*row, *column),
            Selection::ByRegion {
                row,
                column,
                num_rows,
                num_columns,
            } => RangeDescriptor::region(*row, *column, *num_rows, *num_columns),
        };
        check_origin(&descriptor)?;
        tracing::debug!(?selection, range = ?descriptor, "range selected");
        self.selection = descriptor;
        Ok(())
    }

    /// Select the whole sheet again.
    pub fn reset(&mut self) {
        self.selection = RangeDescriptor::whole_sheet();
    }

    /// The top-left cell of the selection.
    pub fn cell(&self) -> Result<&'a <B::Sheet as Worksheet>::Cell> {
        self.cell_at(0, 0)
    }

    /// The cell at 0-based offsets from the top-left of the selection.
    ///
    /// With `D4` selected, `cell_at(1, 1)` is `E5`. Offsets are not checked
    /// against the selection size, only against the sheet.
    pub fn cell_at(
        &self,
        row_offset: usize,
        column_offset: usize,
    ) -> Result<&'a <B::Sheet as Worksheet>::Cell> {
        let sheet = self.sheet.ok_or(SheetError::NoSheet)?;
        let (row, column) = self.origin();
        // An offset past i64 is reported at i64::MAX, which no sheet holds.
        lookup_cell(
            sheet,
            offset(row, row_offset).unwrap_or(i64::MAX),
            offset(column, column_offset).unwrap_or(i64::MAX),
        )
    }

    /// All cells of the selection, row by row.
    ///
    /// An unbounded axis extends to the sheet's last populated row/column.
    pub fn cells(&self) -> Result<Vec<Vec<&'a <B::Sheet as Worksheet>::Cell>>> {
        let sheet = self.sheet.ok_or(SheetError::NoSheet)?;
        let (first_row, first_column) = self.origin();
        let row_count = extent(self.selection.num_rows, ALL_ROWS, sheet.max_row(), first_row);
        let column_count = extent(
            self.selection.num_columns,
            ALL_COLUMNS,
            sheet.max_column(),
            first_column,
        );

        (first_row..first_row + row_count)
            .map(|row| {
                (first_column..first_column + column_count)
                    .map(|column| lookup_cell(sheet, row, column))
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }

    /// The selection in A1 notation, optionally prefixed with the sheet name.
    pub fn format(&self, include_sheet_name: bool) -> String {
        let sheet_name = self
            .sheet
            .filter(|_| include_sheet_name)
            .map(Worksheet::name);
        format_range(&self.selection, sheet_name)
    }

    fn lookup_sheet(&self, name: &str) -> Result<&'a B::Sheet> {
        self.book.sheet(name).ok_or_else(|| SheetError::SheetNotFound {
            name: name.to_string(),
        })
    }

    /// Top-left position; a sentinel start on an unbounded axis means 1.
    fn origin(&self) -> (i64, i64) {
        let row = match self.selection.row {
            ALL_ROWS if self.selection.spans_all_rows() => 1,
            row => i64::from(row),
        };
        let column = match self.selection.column {
            ALL_COLUMNS if self.selection.spans_all_columns() => 1,
            column => i64::from(column),
        };
        (row, column)
    }
}

impl<B: Workbook> fmt::Display for Range<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

impl<B: Workbook> fmt::Debug for Range<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("sheet", &self.sheet.map(Worksheet::name))
            .field("selection", &self.selection)
            .finish()
    }
}

/// Number of rows/columns to read: the explicit count, or everything up to
/// the sheet's last populated index when the count is the sentinel.
fn extent(count: i32, all: i32, max: usize, first: i64) -> i64 {
    let count = if count == all {
        max as i64 - first + 1
    } else {
        i64::from(count)
    };
    count.max(0)
}

fn offset(start: i64, by: usize) -> Option<i64> {
    i64::try_from(by).ok().and_then(|by| start.checked_add(by))
}

fn check_origin(range: &RangeDescriptor) -> Result<()> {
    let row_ok = range.row >= 1 || (range.row == ALL_ROWS && range.spans_all_rows());
    let column_ok =
        range.column >= 1 || (range.column == ALL_COLUMNS && range.spans_all_columns());
    if row_ok && column_ok {
        Ok(())
    } else {
        Err(SheetError::IndexOutOfBounds {
            row: i64::from(range.row),
            column: i64::from(range.column),
        })
    }
}

fn lookup_cell<S: Worksheet>(sheet: &S, row: i64, column: i64) -> Result<&S::Cell> {
    let out_of_bounds = SheetError::IndexOutOfBounds { row, column };
    let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(column)) else {
        return Err(out_of_bounds);
    };
    sheet.cell(r, c).ok_or(out_of_bounds)
}
