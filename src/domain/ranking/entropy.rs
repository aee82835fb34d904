//! Entropy vector and entropy-derived criteria weights.

use crate::domain::foundation::{LabeledEntry, Table, TopsisError};

/// Synthetic row label for the entropy vector.
pub const ENTROPY_ROW: &str = "e";

/// Synthetic row label for the criteria weights.
pub const WEIGHT_ROW: &str = "w";

/// Computes the normalized Shannon entropy of each criterion column of a
/// sum-normalized matrix: `e(c) = -(1/ln n) * Σ_a p(a,c) ln p(a,c)`.
///
/// Entropy 1 means the criterion carries no discriminating information
/// (all alternatives equal); entropy 0 means maximal discrimination.
/// Requires at least two alternatives (`ln 1 = 0`) and strictly positive
/// probabilities.
pub fn entropy_vector(sum_normalized: &Table) -> Result<Table, TopsisError> {
    let n = sum_normalized.rows().len();
    if n < 2 {
        return Err(TopsisError::TooFewAlternatives { actual: n });
    }
    let scale = -1.0 / (n as f64).ln();

    for e in sum_normalized.entries() {
        if e.value <= 0.0 {
            return Err(TopsisError::NonPositiveValue {
                alternative: e.row.clone(),
                criterion: e.column.clone(),
                value: e.value,
            });
        }
    }

    let entries = sum_normalized
        .columns()
        .into_iter()
        .map(|criterion| {
            let dispersion: f64 = sum_normalized
                .column_values(criterion)
                .map(|p| p * p.ln())
                .sum();
            LabeledEntry::new(ENTROPY_ROW, criterion, scale * dispersion)
        })
        .collect();

    Table::from_entries(entries)
}

/// Derives the criteria weights from the entropy vector.
///
/// Divergence `d(c) = 1 - e(c)` rewards discriminating criteria; weights
/// are divergences normalized to sum to 1. If every criterion has entropy
/// exactly 1 the denominator vanishes and the input is degenerate.
pub fn criteria_weights(entropy: &Table) -> Result<Table, TopsisError> {
    let divergences: Vec<(String, f64)> = entropy
        .entries()
        .iter()
        .map(|e| (e.column.clone(), 1.0 - e.value))
        .collect();

    let total: f64 = divergences.iter().map(|(_, d)| d).sum();
    if total <= 0.0 {
        return Err(TopsisError::DegenerateWeights);
    }

    let entries = divergences
        .into_iter()
        .map(|(criterion, divergence)| LabeledEntry::new(WEIGHT_ROW, criterion, divergence / total))
        .collect();

    Table::from_entries(entries)
}
