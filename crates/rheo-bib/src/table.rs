//! Flat table projection of the bibliography.

use crate::bibliography::Bibliography;
use serde::Serialize;
use std::fmt;

/// Marker rendered for a field an entry does not carry.
const ABSENT: &str = "-";

/// Row-per-citation, column-per-field projection.
///
/// Columns are the union of field names over all entries, in first-seen
/// order. Rows are indexed by citation key; a field missing from an entry
/// is an empty cell, not an error. Derived on demand and independent of
/// the store it was projected from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibTable {
    columns: Vec<String>,
    rows: Vec<BibRow>,
}

/// One table row: the citation key plus one cell per table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibRow {
    key: String,
    cells: Vec<Option<String>>,
}

impl BibRow {
    /// Citation key indexing this row.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Cells in column order; `None` marks an absent field.
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }
}

impl BibTable {
    pub(crate) fn from_bibliography(bib: &Bibliography) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for entry in bib.entries() {
            for (name, _) in entry.fields() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }

        let rows = bib
            .entries()
            .iter()
            .map(|entry| BibRow {
                key: entry.key().to_string(),
                cells: columns
                    .iter()
                    .map(|column| entry.get(column).map(str::to_string))
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in bibliography source order.
    pub fn rows(&self) -> &[BibRow] {
        &self.rows
    }

    /// Row for the given citation key.
    pub fn row(&self, key: &str) -> Option<&BibRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Cell value by citation key and field name; `None` for an absent
    /// field or unknown key/column.
    pub fn get(&self, key: &str, field: &str) -> Option<&str> {
        let column = self.columns.iter().position(|c| c == field)?;
        self.row(key)?.cells[column].as_deref()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for BibTable {
    /// Plain-text rendering with aligned columns and `-` for absent fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = Vec::with_capacity(self.columns.len() + 1);
        widths.push(
            self.rows
                .iter()
                .map(|row| row.key.chars().count())
                .chain(std::iter::once("ID".len()))
                .max()
                .unwrap_or(0),
        );
        for (i, column) in self.columns.iter().enumerate() {
            let cell_width = self
                .rows
                .iter()
                .map(|row| {
                    row.cells[i]
                        .as_deref()
                        .unwrap_or(ABSENT)
                        .chars()
                        .count()
                })
                .max()
                .unwrap_or(0);
            widths.push(cell_width.max(column.chars().count()));
        }

        write!(f, "{:<width$}", "ID", width = widths[0])?;
        for (i, column) in self.columns.iter().enumerate() {
            write!(f, "  {:<width$}", column, width = widths[i + 1])?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:<width$}", row.key, width = widths[0])?;
            for (i, cell) in row.cells.iter().enumerate() {
                write!(
                    f,
                    "  {:<width$}",
                    cell.as_deref().unwrap_or(ABSENT),
                    width = widths[i + 1]
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
