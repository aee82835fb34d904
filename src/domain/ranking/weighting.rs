//! Weighted normalized matrix and the ideal / worst profiles.

use crate::domain::foundation::{LabeledEntry, Table, TopsisError};

use super::entropy::WEIGHT_ROW;

/// Synthetic row label for the ideal (best-in-every-criterion) profile.
pub const IDEAL_ROW: &str = "A+";

/// Synthetic row label for the worst (worst-in-every-criterion) profile.
///
/// Deliberately distinct from [`IDEAL_ROW`]: the two profiles are
/// structurally identical tables and must never be conflatable by label.
pub const WORST_ROW: &str = "A-";

/// Scales each vector-normalized value by its criterion's weight.
pub fn weighted_matrix(vector_normalized: &Table, weights: &Table) -> Result<Table, TopsisError> {
    let entries = vector_normalized
        .entries()
        .iter()
        .map(|e| {
            let weight =
                weights
                    .get(WEIGHT_ROW, &e.column)
                    .ok_or_else(|| TopsisError::MissingWeight {
                        criterion: e.column.clone(),
                    })?;
            Ok(LabeledEntry::new(
                e.row.clone(),
                e.column.clone(),
                e.value * weight,
            ))
        })
        .collect::<Result<Vec<_>, TopsisError>>()?;

    Table::from_entries(entries)
}

/// Per-criterion maximum of the weighted matrix, under the `"A+"` row.
pub fn ideal_profile(weighted: &Table) -> Result<Table, TopsisError> {
    profile(weighted, IDEAL_ROW, Table::column_max)
}

/// Per-criterion minimum of the weighted matrix, under the `"A-"` row.
pub fn worst_profile(weighted: &Table) -> Result<Table, TopsisError> {
    profile(weighted, WORST_ROW, Table::column_min)
}

fn profile(
    weighted: &Table,
    row_label: &str,
    reduce: impl Fn(&Table, &str) -> Option<f64>,
) -> Result<Table, TopsisError> {
    let mut entries = Vec::new();
    for criterion in weighted.columns() {
        if let Some(value) = reduce(weighted, criterion) {
            entries.push(LabeledEntry::new(row_label, criterion, value));
        }
    }
    Table::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: Vec<(&str, &str, f64)>) -> Table {
        Table::from_entries(
            entries
                .into_iter()
                .map(|(r, c, v)| LabeledEntry::new(r, c, v))
                .collect(),
        )
        .unwrap()
    }

    fn weighted_sample() -> Table {
        table(vec![
            ("A", "c1", 0.1),
            ("A", "c2", 0.4),
            ("B", "c1", 0.3),
            ("B", "c2", 0.2),
        ])
    }

    #[test]
    fn weighted_matrix_scales_each_column_by_its_weight() {
        let normalized = table(vec![
            ("A", "c1", 0.6),
            ("A", "c2", 0.5),
            ("B", "c1", 0.8),
            ("B", "c2", 0.5),
        ]);
        let weights = table(vec![(WEIGHT_ROW, "c1", 0.75), (WEIGHT_ROW, "c2", 0.25)]);

        let weighted = weighted_matrix(&normalized, &weights).unwrap();

        assert!((weighted.get("A", "c1").unwrap() - 0.45).abs() < 1e-12);
        assert!((weighted.get("A", "c2").unwrap() - 0.125).abs() < 1e-12);
        assert!((weighted.get("B", "c1").unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn weighted_matrix_fails_on_a_missing_weight() {
        let normalized = table(vec![("A", "c1", 0.6), ("B", "c1", 0.8)]);
        let weights = table(vec![(WEIGHT_ROW, "c2", 1.0)]);

        assert_eq!(
            weighted_matrix(&normalized, &weights).unwrap_err(),
            TopsisError::MissingWeight {
                criterion: "c1".to_string(),
            }
        );
    }

    #[test]
    fn ideal_profile_takes_the_column_maxima() {
        let ideal = ideal_profile(&weighted_sample()).unwrap();

        assert_eq!(ideal.rows(), vec![IDEAL_ROW]);
        assert_eq!(ideal.get(IDEAL_ROW, "c1"), Some(0.3));
        assert_eq!(ideal.get(IDEAL_ROW, "c2"), Some(0.4));
    }

    #[test]
    fn worst_profile_takes_the_column_minima() {
        let worst = worst_profile(&weighted_sample()).unwrap();

        assert_eq!(worst.rows(), vec![WORST_ROW]);
        assert_eq!(worst.get(WORST_ROW, "c1"), Some(0.1));
        assert_eq!(worst.get(WORST_ROW, "c2"), Some(0.2));
    }

    #[test]
    fn profiles_carry_distinct_row_labels() {
        let weighted = weighted_sample();
        let ideal = ideal_profile(&weighted).unwrap();
        let worst = worst_profile(&weighted).unwrap();

        assert_ne!(ideal.rows(), worst.rows());
        assert_eq!(ideal.get(WORST_ROW, "c1"), None);
        assert_eq!(worst.get(IDEAL_ROW, "c1"), None);
    }
}
