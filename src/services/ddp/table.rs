//! Immutable row tables parsed from tabular archive entries.
//!
//! Every transformation consumes `&self` and returns a fresh `Table`; nothing
//! is edited in place, so a failure part way through a pipeline always leaves
//! the previous table intact.

use crate::types::ExtractError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) => None,
        }
    }

    fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            (Cell::Number(_), Cell::Text(_)) => Ordering::Less,
            (Cell::Text(_), Cell::Number(_)) => Ordering::Greater,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// A table with no columns and no rows.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Parse a header-plus-rows comma separated file.
    ///
    /// A leading byte order mark selects the decoder; otherwise UTF-8 is
    /// assumed and any invalid sequence rejects the whole file.
    pub fn from_csv(name: &str, bytes: &[u8]) -> Result<Self, ExtractError> {
        let (text, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
        if had_errors {
            return Err(ExtractError::Undecodable(name.to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if columns.is_empty() {
            return Err(ExtractError::EmptyFile(name.to_string()));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from).collect());
        }

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize, ExtractError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| ExtractError::MissingColumn(column.to_string()))
    }

    /// Text values of the first column, in row order.
    pub fn first_column(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(|row| row.first().and_then(Cell::as_text))
    }

    /// Keep rows whose first column equals `value`. Rows stay contiguous.
    pub fn keep_first_column_eq(&self, value: &str) -> Table {
        let rows = self
            .rows
            .iter()
            .filter(|row| row.first().and_then(Cell::as_text) == Some(value))
            .cloned()
            .collect();
        self.with_rows(self.columns.clone(), rows)
    }

    /// Project onto `columns`, in the given order.
    pub fn select(&self, columns: &[&str]) -> Result<Table, ExtractError> {
        let indices = columns
            .iter()
            .map(|c| self.column_index(c))
            .collect::<Result<Vec<_>, _>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(self.with_rows(columns.iter().map(|c| c.to_string()).collect(), rows))
    }

    /// Drop rows whose `column` holds one of `values`.
    pub fn exclude(&self, column: &str, values: &[&str]) -> Result<Table, ExtractError> {
        let idx = self.column_index(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| {
                !row[idx]
                    .as_text()
                    .is_some_and(|text| values.contains(&text))
            })
            .cloned()
            .collect();
        Ok(self.with_rows(self.columns.clone(), rows))
    }

    /// Rename columns present in `renames`; others keep their name.
    pub fn rename(&self, renames: &HashMap<&str, &str>) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                renames
                    .get(c.as_str())
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| c.clone())
            })
            .collect();
        self.with_rows(columns, self.rows.clone())
    }

    /// Replace every cell of `column` with `f(cell)`.
    pub fn map_column(
        &self,
        column: &str,
        f: impl Fn(&Cell) -> Cell,
    ) -> Result<Table, ExtractError> {
        let idx = self.column_index(column)?;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row[idx] = f(&row[idx]);
                row
            })
            .collect();
        Ok(self.with_rows(self.columns.clone(), rows))
    }

    /// Stable ascending sort on `column`.
    pub fn sort_by(&self, column: &str) -> Result<Table, ExtractError> {
        let idx = self.column_index(column)?;
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a[idx].compare(&b[idx]));
        Ok(self.with_rows(self.columns.clone(), rows))
    }

    /// Cell lookup by column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column).ok()?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    fn with_rows(&self, columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Table {
        Table {
            name: self.name.clone(),
            columns,
            rows,
        }
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
