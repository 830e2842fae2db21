//! A1 range notation parsing and formatting.
//!
//! A notation such as `Sheet 1!B2:D5` is split into an optional sheet name
//! and a range expression, and the expression is normalised into a
//! [`RangeDescriptor`]: a 1-based top-left position plus row and column
//! counts. Counts (and, for the bare `B` / `2` forms, positions) may be the
//! [`ALL_ROWS`] / [`ALL_COLUMNS`] sentinel, meaning the range covers the
//! whole axis.

use std::fmt;
use std::str::FromStr;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::address::{
    column_label_to_number, column_number_to_label, quote_sheet_name, split_sheet_qualifier,
    INVALID_COLUMN, MAX_ROW_COUNT,
};
use crate::error::{NotationError, Result};

/// Sentinel row count (or row position) meaning "every row".
pub const ALL_ROWS: i32 = -1;
/// Sentinel column count (or column position) meaning "every column".
pub const ALL_COLUMNS: i32 = -1;

/// A normalised rectangular range: 1-based `row`/`column` of the top-left
/// corner plus the number of rows and columns it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeDescriptor {
    pub row: i32,
    pub column: i32,
    pub num_rows: i32,
    pub num_columns: i32,
}

impl RangeDescriptor {
    pub fn region(row: i32, column: i32, num_rows: i32, num_columns: i32) -> Self {
        Self {
            row,
            column,
            num_rows,
            num_columns,
        }
    }

    /// A single cell at `row`, `column`.
    pub fn cell(row: i32, column: i32) -> Self {
        Self::region(row, column, 1, 1)
    }

    /// Every row and every column of a sheet.
    pub fn whole_sheet() -> Self {
        Self::region(1, 1, ALL_ROWS, ALL_COLUMNS)
    }

    pub fn spans_all_rows(&self) -> bool {
        self.num_rows == ALL_ROWS
    }

    pub fn spans_all_columns(&self) -> bool {
        self.num_columns == ALL_COLUMNS
    }

    pub fn is_single_cell(&self) -> bool {
        self.num_rows == 1 && self.num_columns == 1
    }
}

impl Default for RangeDescriptor {
    fn default() -> Self {
        Self::whole_sheet()
    }
}

impl fmt::Display for RangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_range(self, None))
    }
}

/// A parsed notation: the range plus the sheet it was qualified with, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedRange {
    pub sheet_name: Option<String>,
    pub range: RangeDescriptor,
}

impl FromStr for QualifiedRange {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self> {
        parse_range_notation(s)
    }
}

impl fmt::Display for QualifiedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_range(&self.range, self.sheet_name.as_deref()))
    }
}

/// Options for [`format_range_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Last row written when a range covers the whole sheet (`1:max_row`).
    pub max_row: u32,
    /// Quote sheet names that are not plain alphanumerics (`'Sheet 1'!A1`).
    pub quote_sheet_names: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_row: MAX_ROW_COUNT,
            quote_sheet_names: false,
        }
    }
}

/// Parse A1 notation into a sheet name and a normalised range.
///
/// Accepted range expressions (case-insensitive, `$` markers ignored):
///
/// | Notation   | row     | column      | num_rows   | num_columns   |
/// |------------|---------|-------------|------------|---------------|
/// | `A:B`      | 1       | A           | `ALL_ROWS` | 2             |
/// | `5:6`      | 5       | 1           | 2          | `ALL_COLUMNS` |
/// | `D5`       | 5       | D           | 1          | 1             |
/// | `B2:D5`    | 2       | B           | 4          | 3             |
/// | `B2:B`     | 2       | B           | `ALL_ROWS` | 1             |
/// | `B2:2`     | 2       | B           | 1          | `ALL_COLUMNS` |
/// | `B`        | `ALL_ROWS` | B        | `ALL_ROWS` | 1             |
/// | `2`        | 2       | `ALL_COLUMNS` | 1        | `ALL_COLUMNS` |
///
/// Endpoints may be written in either order; the result always starts at the
/// smaller one.
///
/// ```
/// use xlrange_primitives::{parse_range_notation, RangeDescriptor};
///
/// let parsed = parse_range_notation("Sheet 1!D3:E8").unwrap();
/// assert_eq!(parsed.sheet_name.as_deref(), Some("Sheet 1"));
/// assert_eq!(parsed.range, RangeDescriptor::region(3, 4, 6, 2));
/// ```
pub fn parse_range_notation(notation: &str) -> Result<QualifiedRange> {
    let (sheet_name, expr) = split_sheet_qualifier(notation);
    let expr = expr.to_ascii_uppercase();

    match classify(&expr) {
        Some((shape, range)) => {
            tracing::trace!(notation, shape, ?range, "parsed range notation");
            Ok(QualifiedRange { sheet_name, range })
        }
        None => {
            tracing::debug!(notation, "rejected range notation");
            Err(NotationError::InvalidNotation(notation.to_string()))
        }
    }
}

/// Render a range as A1 notation, prefixed with `sheet_name!` when given.
///
/// A range covering the whole sheet is written as `1:1048576`.
///
/// ```
/// use xlrange_primitives::{format_range, RangeDescriptor};
///
/// let range = RangeDescriptor::region(5, 4, 2, 3);
/// assert_eq!(format_range(&range, None), "D5:F6");
/// assert_eq!(format_range(&range, Some("Sheet 1")), "Sheet 1!D5:F6");
/// ```
pub fn format_range(range: &RangeDescriptor, sheet_name: Option<&str>) -> String {
    format_range_with(range, sheet_name, &FormatOptions::default())
}

/// [`format_range`] with an explicit row ceiling and sheet-name quoting.
pub fn format_range_with(
    range: &RangeDescriptor,
    sheet_name: Option<&str>,
    options: &FormatOptions,
) -> String {
    let mut out = String::new();
    if let Some(name) = sheet_name {
        if options.quote_sheet_names {
            out.push_str(&quote_sheet_name(name));
        } else {
            out.push_str(name);
        }
        out.push('!');
    }

    // A sentinel start position on an unbounded axis renders from the first
    // row/column. Bounded positions are written as given.
    let row = match range.row {
        ALL_ROWS if range.spans_all_rows() => 1,
        row => row,
    };
    let column = match range.column {
        ALL_COLUMNS if range.spans_all_columns() => 1,
        column => column,
    };
    let last_row = last_index(row, range.num_rows);
    let last_column = last_index(column, range.num_columns);

    let body = match (range.spans_all_rows(), range.spans_all_columns()) {
        (true, true) => format!("1:{}", options.max_row),
        (true, false) => format!(
            "{}:{}",
            column_number_to_label(column),
            column_number_to_label(last_column)
        ),
        (false, true) => format!("{row}:{last_row}"),
        (false, false) if range.is_single_cell() => {
            format!("{}{row}", column_number_to_label(column))
        }
        (false, false) => format!(
            "{}{row}:{}{last_row}",
            column_number_to_label(column),
            column_number_to_label(last_column)
        ),
    };
    out.push_str(&body);
    out
}

fn last_index(start: i32, count: i32) -> i32 {
    start.saturating_add(count.saturating_sub(1)).max(start)
}

/// Match `expr` (already upper-cased) against the known shapes in precedence
/// order. Returns the shape name for diagnostics.
fn classify(expr: &str) -> Option<(&'static str, RangeDescriptor)> {
    if let Some(caps) = column_span_regex().captures(expr) {
        let (column, num_columns) = span(column_at(&caps, 1)?, column_at(&caps, 2)?);
        return Some((
            "column_span",
            RangeDescriptor::region(1, column, ALL_ROWS, num_columns),
        ));
    }

    if let Some(caps) = row_span_regex().captures(expr) {
        let (row, num_rows) = span(row_at(&caps, 1)?, row_at(&caps, 2)?);
        return Some((
            "row_span",
            RangeDescriptor::region(row, 1, num_rows, ALL_COLUMNS),
        ));
    }

    if let Some(caps) = cell_range_regex().captures(expr) {
        let row_start = row_at(&caps, 2)?;
        let column_start = column_at(&caps, 1)?;
        if caps.get(3).is_none() {
            return Some(("cell", RangeDescriptor::cell(row_start, column_start)));
        }
        let (row, num_rows) = span(row_start, row_at(&caps, 4)?);
        let (column, num_columns) = span(column_start, column_at(&caps, 3)?);
        return Some((
            "cell_range",
            RangeDescriptor::region(row, column, num_rows, num_columns),
        ));
    }

    if let Some(caps) = cell_to_column_regex().captures(expr) {
        return cell_to_column(&caps, 1, 2, 3);
    }
    if let Some(caps) = column_to_cell_regex().captures(expr) {
        return cell_to_column(&caps, 2, 3, 1);
    }

    if let Some(caps) = cell_to_row_regex().captures(expr) {
        return cell_to_row(&caps, 1, 2, 3);
    }
    if let Some(caps) = row_to_cell_regex().captures(expr) {
        return cell_to_row(&caps, 2, 3, 1);
    }

    if let Some(caps) = column_regex().captures(expr) {
        return Some((
            "column",
            RangeDescriptor::region(ALL_ROWS, column_at(&caps, 1)?, ALL_ROWS, 1),
        ));
    }

    if let Some(caps) = row_regex().captures(expr) {
        return Some((
            "row",
            RangeDescriptor::region(row_at(&caps, 1)?, ALL_COLUMNS, 1, ALL_COLUMNS),
        ));
    }

    None
}

/// `B2:D` style: rows from the cell's row downwards, columns between the
/// cell and the bare column.
fn cell_to_column(
    caps: &Captures<'_>,
    cell_column: usize,
    cell_row: usize,
    other_column: usize,
) -> Option<(&'static str, RangeDescriptor)> {
    let row = row_at(caps, cell_row)?;
    let (column, num_columns) = span(
        column_at(caps, cell_column)?,
        column_at(caps, other_column)?,
    );
    Some((
        "cell_to_column",
        RangeDescriptor::region(row, column, ALL_ROWS, num_columns),
    ))
}

/// `B2:5` style: columns from the cell's column rightwards, rows between the
/// cell and the bare row.
fn cell_to_row(
    caps: &Captures<'_>,
    cell_column: usize,
    cell_row: usize,
    other_row: usize,
) -> Option<(&'static str, RangeDescriptor)> {
    let column = column_at(caps, cell_column)?;
    let (row, num_rows) = span(row_at(caps, cell_row)?, row_at(caps, other_row)?);
    Some((
        "cell_to_row",
        RangeDescriptor::region(row, column, num_rows, ALL_COLUMNS),
    ))
}

/// Lower endpoint and inclusive length of the span between `a` and `b`.
fn span(a: i32, b: i32) -> (i32, i32) {
    (a.min(b), (b - a).abs() + 1)
}

fn column_at(caps: &Captures<'_>, index: usize) -> Option<i32> {
    let column = column_label_to_number(caps.get(index)?.as_str());
    (column != INVALID_COLUMN).then_some(column)
}

fn row_at(caps: &Captures<'_>, index: usize) -> Option<i32> {
    caps.get(index)?.as_str().parse().ok()
}

fn column_span_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\$?([A-Z]+):\$?([A-Z]+)$").expect("valid regex"))
}

fn row_span_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\$?([1-9][0-9]*):\$?([1-9][0-9]*)$").expect("valid regex")
    })
}

fn cell_range_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\$?([A-Z]+)\$?([1-9][0-9]*)(?::\$?([A-Z]+)\$?([1-9][0-9]*))?$")
            .expect("valid regex")
    })
}

fn cell_to_column_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\$?([A-Z]+)\$?([1-9][0-9]*):\$?([A-Z]+)$").expect("valid regex")
    })
}

fn column_to_cell_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\$?([A-Z]+):\$?([A-Z]+)\$?([1-9][0-9]*)$").expect("valid regex")
    })
}

fn cell_to_row_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\$?([A-Z]+)\$?([1-9][0-9]*):\$?([1-9][0-9]*)$").expect("valid regex")
    })
}

fn row_to_cell_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\$?([1-9][0-9]*):\$?([A-Z]+)\$?([1-9][0-9]*)$").expect("valid regex")
    })
}

fn column_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\$?([A-Z]+)$").expect("valid regex"))
}

fn row_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\$?([1-9][0-9]*)$").expect("valid regex"))
}
