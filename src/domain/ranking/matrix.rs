//! Decision matrix input - the validated alternatives × criteria table.

use serde::Serialize;

use crate::domain::foundation::{LabeledEntry, Table, TopsisError};

/// The externally supplied decision matrix.
///
/// Construction enforces the pipeline preconditions: at least two
/// alternatives, at least one criterion, a rectangular shape (every
/// alternative scored on every criterion), and finite non-negative
/// values. Strict positivity is enforced later, at the stages whose
/// logarithms and totals require it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    table: Table,
}

impl DecisionMatrix {
    /// Validates and wraps a set of (alternative, criterion, value) triples.
    pub fn from_entries(entries: Vec<LabeledEntry>) -> Result<Self, TopsisError> {
        let table = Table::from_entries(entries)?;

        let alternatives = table.rows();
        if alternatives.len() < 2 {
            return Err(TopsisError::TooFewAlternatives {
                actual: alternatives.len(),
            });
        }

        let criteria = table.columns();
        if criteria.is_empty() {
            return Err(TopsisError::NoCriteria);
        }

        for alternative in &alternatives {
            for criterion in &criteria {
                match table.get(alternative, criterion) {
                    None => {
                        return Err(TopsisError::MissingCell {
                            alternative: alternative.to_string(),
                            criterion: criterion.to_string(),
                        })
                    }
                    Some(value) if !value.is_finite() => {
                        return Err(TopsisError::NonFiniteValue {
                            alternative: alternative.to_string(),
                            criterion: criterion.to_string(),
                        })
                    }
                    Some(value) if value < 0.0 => {
                        return Err(TopsisError::NegativeValue {
                            alternative: alternative.to_string(),
                            criterion: criterion.to_string(),
                            value,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Self { table })
    }

    /// The underlying table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Alternative labels, in input order.
    pub fn alternatives(&self) -> Vec<&str> {
        self.table.rows()
    }

    /// Criterion labels, in input order.
    pub fn criteria(&self) -> Vec<&str> {
        self.table.columns()
    }

    /// Number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.table.rows().len()
    }

    /// Number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.table.columns().len()
    }
}
