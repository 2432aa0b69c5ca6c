//! Flat tables built from nested JSON documents
//!
//! A `Table` is what one source turns into after flattening: an ordered
//! column list and rows of typed cells aligned to it.

mod cell;
pub mod flatten;
pub mod schema;

pub use cell::Cell;
pub use flatten::flatten_document;
pub use schema::{ColumnType, Schema};

/// Rows of cells under a shared, ordered column list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Name of the source this table came from (file name or upload name)
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    /// Iterate the cells of one column, top to bottom
    pub fn column_cells<'a>(&'a self, column: &str) -> Option<impl Iterator<Item = &'a Cell>> {
        let idx = self.column_index(column)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Row-wise concatenation of several tables.
    ///
    /// Columns are the union in first-appearance order. A table that lacks a
    /// column contributes `Cell::Null` for it. Row order follows table order.
    pub fn concat<'a, I>(name: impl Into<String>, tables: I) -> Table
    where
        I: IntoIterator<Item = &'a Table>,
    {
        let tables: Vec<&Table> = tables.into_iter().collect();
        let mut combined = Table::new(name);

        for table in &tables {
            for column in &table.columns {
                if !combined.has_column(column) {
                    combined.columns.push(column.clone());
                }
            }
        }

        let total_rows = tables.iter().map(|t| t.row_count()).sum();
        combined.rows.reserve(total_rows);

        for table in tables {
            let mapping: Vec<Option<usize>> = combined
                .columns
                .iter()
                .map(|c| table.column_index(c))
                .collect();

            for row in &table.rows {
                combined.rows.push(
                    mapping
                        .iter()
                        .map(|idx| idx.map(|i| row[i].clone()).unwrap_or(Cell::Null))
                        .collect(),
                );
            }
        }

        combined
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
