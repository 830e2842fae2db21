use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::workbook::Worksheet;

/// A sheet representing a rectangular grid of cells (row-major storage)
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a sheet from a 2D vector of values.
    ///
    /// Short rows are padded with [`CellValue::Null`] so every row has the
    /// width of the longest one.
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let width = data.iter().map(Vec::len).max().unwrap_or(0);
        let data = data
            .into_iter()
            .map(|row| {
                let mut row: Vec<CellValue> = row.into_iter().map(Into::into).collect();
                row.resize(width, CellValue::Null);
                row
            })
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data,
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Get a cell value by row and column index (0-based)
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row: row as i64 + 1,
                column: col as i64 + 1,
            })
    }

    /// Set a cell value by row and column index (0-based)
    pub fn set<T: Into<CellValue>>(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let cell = self
            .data
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row: row as i64 + 1,
                column: col as i64 + 1,
            })?;
        *cell = value.into();
        Ok(())
    }
}

impl Worksheet for Sheet {
    type Cell = CellValue;

    fn name(&self) -> &str {
        &self.name
    }

    fn max_row(&self) -> usize {
        self.row_count()
    }

    fn max_column(&self) -> usize {
        self.col_count()
    }

    fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.get(row.checked_sub(1)?, column.checked_sub(1)?).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_pads_rows() {
        let sheet = Sheet::from_data(vec![vec![1, 2, 3], vec![4]]);
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.col_count(), 3);
        assert!(sheet.get(1, 2).unwrap().is_null());
    }

    #[test]
    fn test_worksheet_cells_are_one_based() {
        let sheet = Sheet::from_data(vec![vec!["A1", "B1"], vec!["A2", "B2"]]);
        assert_eq!(sheet.cell(1, 1), Some(&CellValue::from("A1")));
        assert_eq!(sheet.cell(2, 2), Some(&CellValue::from("B2")));
        assert_eq!(sheet.cell(0, 1), None);
        assert_eq!(sheet.cell(3, 1), None);
        assert_eq!((sheet.max_row(), sheet.max_column()), (2, 2));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut sheet = Sheet::from_data(vec![vec![0]]);
        sheet.set(0, 0, "x").unwrap();
        assert_eq!(sheet.get(0, 0).unwrap(), &CellValue::from("x"));
        assert_eq!(
            sheet.set(4, 0, 1),
            Err(SheetError::IndexOutOfBounds { row: 5, column: 1 })
        );
    }
}
