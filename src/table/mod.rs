//! Typed in-memory tables and CSV ingest

pub mod loader;

pub use loader::{load_table_from_path, load_table_from_reader};

use crate::error::Error;

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A value that parsed as a number
    Number(f64),
    /// Anything else, kept verbatim
    Text(String),
}

impl Cell {
    /// Numeric view of the cell, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }

    /// Textual form of the cell, used as a grouping key
    pub fn label(&self) -> String {
        match self {
            Cell::Number(n) => format!("{n}"),
            Cell::Text(s) => s.clone(),
        }
    }

    /// True for text cells holding an empty string
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(s) if s.is_empty())
    }
}

/// Rows of typed cells under named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given column names
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row; its width must match the header width
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), Error> {
        if row.len() != self.headers.len() {
            return Err(Error::InvalidArgument(format!(
                "row has {} cells, table has {} columns",
                row.len(),
                self.headers.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All cells of a named column, top to bottom
    pub fn column(&self, name: &str) -> Result<Vec<&Cell>, Error> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown column '{name}'")))?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(vec!["cat".to_string(), "amt".to_string()]);
        table
            .push_row(vec![Cell::Text("A".to_string()), Cell::Number(10.0)])
            .unwrap();
        table
            .push_row(vec![Cell::Text("B".to_string()), Cell::Number(5.0)])
            .unwrap();
        table
    }

    #[test]
    fn test_column_access() {
        let table = sample_table();

        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.column_index("amt"), Some(1));
        assert_eq!(table.column_index("missing"), None);

        let amounts = table.column("amt").unwrap();
        assert_eq!(amounts[0].as_number(), Some(10.0));
        assert_eq!(amounts[1].as_number(), Some(5.0));

        assert!(matches!(
            table.column("missing"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_push_row_rejects_wrong_width() {
        let mut table = sample_table();
        let result = table.push_row(vec![Cell::Number(1.0)]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(table.n_rows(), 2);
    }

    #[test]
    fn test_cell_labels() {
        assert_eq!(Cell::Number(5.0).label(), "5");
        assert_eq!(Cell::Number(2.5).label(), "2.5");
        assert_eq!(Cell::Text("North".to_string()).label(), "North");
        assert!(Cell::Text(String::new()).is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }
}
