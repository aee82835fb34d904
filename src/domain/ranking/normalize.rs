//! Normalization stages: Euclidean (vector) and proportion-of-total (sum).

use crate::domain::foundation::{LabeledEntry, Table, TopsisError};

/// Divides each value by the Euclidean norm of its criterion column,
/// producing a dimensionless matrix comparable across differently-scaled
/// criteria.
///
/// A zero value in an otherwise nonzero column normalizes to exactly 0.0;
/// only a column whose norm is zero is an error.
pub fn vector_normalize(matrix: &Table) -> Result<Table, TopsisError> {
    let mut norms: Vec<(&str, f64)> = Vec::new();
    for criterion in matrix.columns() {
        let norm = matrix
            .column_values(criterion)
            .map(|v| v * v)
            .sum::<f64>()
            .sqrt();
        if norm <= 0.0 {
            return Err(TopsisError::ZeroColumnNorm {
                criterion: criterion.to_string(),
            });
        }
        norms.push((criterion, norm));
    }

    let entries = matrix
        .entries()
        .iter()
        .map(|e| {
            let norm = norms
                .iter()
                .find(|(c, _)| *c == e.column)
                .map(|(_, n)| *n)
                .unwrap_or(1.0);
            LabeledEntry::new(e.row.clone(), e.column.clone(), e.value / norm)
        })
        .collect();

    Table::from_entries(entries)
}

/// Divides each value by its criterion column's total, so every column
/// sums to 1 and can be read as a probability distribution for the
/// entropy stage.
///
/// Requires strictly positive values: the entropy stage takes a logarithm
/// of each normalized value, so a zero or negative cell is rejected here,
/// before any division happens.
pub fn sum_normalize(matrix: &Table) -> Result<Table, TopsisError> {
    for e in matrix.entries() {
        if e.value <= 0.0 {
            return Err(TopsisError::NonPositiveValue {
                alternative: e.row.clone(),
                criterion: e.column.clone(),
                value: e.value,
            });
        }
    }

    let totals: Vec<(&str, f64)> = matrix
        .columns()
        .into_iter()
        .map(|c| (c, matrix.column_sum(c)))
        .collect();

    let entries = matrix
        .entries()
        .iter()
        .map(|e| {
            let total = totals
                .iter()
                .find(|(c, _)| *c == e.column)
                .map(|(_, t)| *t)
                .unwrap_or(1.0);
            LabeledEntry::new(e.row.clone(), e.column.clone(), e.value / total)
        })
        .collect();

    Table::from_entries(entries)
}
