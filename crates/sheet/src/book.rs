use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use crate::workbook::Workbook;
use indexmap::IndexMap;

/// A book containing multiple sheets (preserves insertion order)
#[derive(Debug, Clone, Default)]
pub struct Book {
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Add a sheet to the book, renaming it to `name`
    pub fn add_sheet(&mut self, name: &str, mut sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }
}

impl Workbook for Book {
    type Sheet = Sheet;

    fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Worksheet;

    #[test]
    fn test_add_and_lookup() {
        let mut book = Book::new();
        book.add_sheet("Data", Sheet::from_data(vec![vec![1]])).unwrap();
        book.add_sheet("Sheet 2", Sheet::default()).unwrap();

        assert_eq!(book.sheet_count(), 2);
        assert_eq!(book.get_sheet("Sheet 2").unwrap().name(), "Sheet 2");
        assert_eq!(book.get_sheet("Data").unwrap().name(), "Data");
        assert!(book.sheet("Missing").is_none());
    }

    #[test]
    fn test_duplicate_and_missing_sheets() {
        let mut book = Book::new();
        book.add_sheet("Data", Sheet::default()).unwrap();
        assert_eq!(
            book.add_sheet("Data", Sheet::default()),
            Err(SheetError::SheetAlreadyExists {
                name: "Data".to_string()
            })
        );
        assert!(matches!(
            book.get_sheet("Nope"),
            Err(SheetError::SheetNotFound { name }) if name == "Nope"
        ));
    }
}
