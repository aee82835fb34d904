//! Labeled long-format table - the shared substrate for every pipeline stage.
//!
//! Every matrix, vector, and scalar-per-key collection in the pipeline is
//! represented the same way: an ordered sequence of (row, column, value)
//! triples. Stages that collapse an axis (entropy, weights, profiles,
//! distances) still produce a `Table`, just with a synthetic row or column
//! label, so each stage is a group/filter/reduce over labels rather than
//! index arithmetic.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::TopsisError;

/// A single (row label, column label, value) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledEntry {
    pub row: String,
    pub column: String,
    pub value: f64,
}

impl LabeledEntry {
    /// Creates a new entry.
    pub fn new(row: impl Into<String>, column: impl Into<String>, value: f64) -> Self {
        Self {
            row: row.into(),
            column: column.into(),
            value,
        }
    }
}

/// An ordered collection of entries with unique (row, column) keys.
///
/// Serializes for diagnostics but deliberately does not deserialize:
/// construction goes through [`Table::from_entries`] so the uniqueness
/// invariant always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    entries: Vec<LabeledEntry>,
}

impl Table {
    /// Creates a table, rejecting duplicate (row, column) pairs.
    pub fn from_entries(entries: Vec<LabeledEntry>) -> Result<Self, TopsisError> {
        {
            let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(entries.len());
            for entry in &entries {
                if !seen.insert((entry.row.as_str(), entry.column.as_str())) {
                    return Err(TopsisError::DuplicateEntry {
                        row: entry.row.clone(),
                        column: entry.column.clone(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Returns the underlying entries in insertion order.
    pub fn entries(&self) -> &[LabeledEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value at (row, column), if present.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.row == row && e.column == column)
            .map(|e| e.value)
    }

    /// Distinct row labels, in first-appearance order.
    pub fn rows(&self) -> Vec<&str> {
        let mut rows: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !rows.contains(&entry.row.as_str()) {
                rows.push(&entry.row);
            }
        }
        rows
    }

    /// Distinct column labels, in first-appearance order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !columns.contains(&entry.column.as_str()) {
                columns.push(&entry.column);
            }
        }
        columns
    }

    /// Values in a column, in insertion order.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.column == column)
            .map(|e| e.value)
    }

    /// Values in a row, in insertion order.
    pub fn row_values<'a>(&'a self, row: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.row == row)
            .map(|e| e.value)
    }

    /// Sum of a column's values.
    pub fn column_sum(&self, column: &str) -> f64 {
        self.column_values(column).sum()
    }

    /// Maximum value in a column, if the column has any entries.
    pub fn column_max(&self, column: &str) -> Option<f64> {
        self.column_values(column).reduce(f64::max)
    }

    /// Minimum value in a column, if the column has any entries.
    pub fn column_min(&self, column: &str) -> Option<f64> {
        self.column_values(column).reduce(f64::min)
    }

    /// Returns true if every row has a value for every column.
    pub fn is_rectangular(&self) -> bool {
        let rows = self.rows();
        let columns = self.columns();
        self.entries.len() == rows.len() * columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_entries(vec![
            LabeledEntry::new("A", "c1", 1.0),
            LabeledEntry::new("A", "c2", 9.0),
            LabeledEntry::new("B", "c1", 5.0),
            LabeledEntry::new("B", "c2", 5.0),
        ])
        .unwrap()
    }

    #[test]
    fn from_entries_rejects_duplicate_keys() {
        let result = Table::from_entries(vec![
            LabeledEntry::new("A", "c1", 1.0),
            LabeledEntry::new("A", "c1", 2.0),
        ]);
        assert_eq!(
            result.unwrap_err(),
            TopsisError::DuplicateEntry {
                row: "A".to_string(),
                column: "c1".to_string(),
            }
        );
    }

    #[test]
    fn get_returns_value_for_present_key() {
        assert_eq!(sample().get("B", "c2"), Some(5.0));
    }

    #[test]
    fn get_returns_none_for_absent_key() {
        assert_eq!(sample().get("C", "c1"), None);
    }

    #[test]
    fn rows_are_distinct_in_first_appearance_order() {
        assert_eq!(sample().rows(), vec!["A", "B"]);
    }

    #[test]
    fn columns_are_distinct_in_first_appearance_order() {
        assert_eq!(sample().columns(), vec!["c1", "c2"]);
    }

    #[test]
    fn column_sum_adds_all_values_in_the_column() {
        assert!((sample().column_sum("c1") - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn column_max_and_min_reduce_the_column() {
        let table = sample();
        assert_eq!(table.column_max("c2"), Some(9.0));
        assert_eq!(table.column_min("c2"), Some(5.0));
    }

    #[test]
    fn column_reductions_return_none_for_absent_column() {
        assert_eq!(sample().column_max("c3"), None);
        assert_eq!(sample().column_min("c3"), None);
    }

    #[test]
    fn row_values_filters_by_row() {
        let values: Vec<f64> = sample().row_values("A").collect();
        assert_eq!(values, vec![1.0, 9.0]);
    }

    #[test]
    fn is_rectangular_detects_missing_cells() {
        assert!(sample().is_rectangular());

        let ragged = Table::from_entries(vec![
            LabeledEntry::new("A", "c1", 1.0),
            LabeledEntry::new("A", "c2", 2.0),
            LabeledEntry::new("B", "c1", 3.0),
        ])
        .unwrap();
        assert!(!ragged.is_rectangular());
    }

    #[test]
    fn entries_roundtrip_through_json() {
        let table = sample();
        let json = serde_json::to_string(table.entries()).unwrap();
        let back: Vec<LabeledEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(Table::from_entries(back).unwrap(), table);
    }
}
