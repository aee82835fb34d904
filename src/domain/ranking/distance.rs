//! Distances to the profiles, closeness coefficients, and ranking.

use crate::domain::foundation::{LabeledEntry, Table, TopsisError};

use super::weighting::{IDEAL_ROW, WORST_ROW};

/// Synthetic column label for the distance to the ideal profile.
pub const IDEAL_DISTANCE_COLUMN: &str = "S+";

/// Synthetic column label for the distance to the worst profile.
pub const WORST_DISTANCE_COLUMN: &str = "S-";

/// Synthetic column label for the closeness coefficient.
pub const CLOSENESS_COLUMN: &str = "C";

/// Synthetic column label for the rank.
pub const RANK_COLUMN: &str = "Rank";

/// Euclidean distance of every alternative's weighted row to the ideal
/// profile, one entry per alternative under the `"S+"` column.
pub fn distance_to_ideal(weighted: &Table, ideal: &Table) -> Result<Table, TopsisError> {
    distance_to_profile(weighted, ideal, IDEAL_ROW, IDEAL_DISTANCE_COLUMN)
}

/// Euclidean distance of every alternative's weighted row to the worst
/// profile, one entry per alternative under the `"S-"` column.
pub fn distance_to_worst(weighted: &Table, worst: &Table) -> Result<Table, TopsisError> {
    distance_to_profile(weighted, worst, WORST_ROW, WORST_DISTANCE_COLUMN)
}

fn distance_to_profile(
    weighted: &Table,
    profile: &Table,
    profile_row: &str,
    out_column: &str,
) -> Result<Table, TopsisError> {
    let criteria = weighted.columns();
    let mut entries = Vec::new();

    for alternative in weighted.rows() {
        let mut sum_of_squares = 0.0;
        for criterion in &criteria {
            let reference =
                profile
                    .get(profile_row, criterion)
                    .ok_or_else(|| TopsisError::MissingCell {
                        alternative: profile_row.to_string(),
                        criterion: criterion.to_string(),
                    })?;
            let value =
                weighted
                    .get(alternative, criterion)
                    .ok_or_else(|| TopsisError::MissingCell {
                        alternative: alternative.to_string(),
                        criterion: criterion.to_string(),
                    })?;
            let difference = reference - value;
            sum_of_squares += difference * difference;
        }
        entries.push(LabeledEntry::new(
            alternative,
            out_column,
            sum_of_squares.sqrt(),
        ));
    }

    Table::from_entries(entries)
}

/// Combines the two distance tables into the closeness coefficient
/// `C(a) = S-(a) / (S-(a) + S+(a))`, a value in [0, 1] where higher is
/// better.
pub fn closeness(ideal_distance: &Table, worst_distance: &Table) -> Result<Table, TopsisError> {
    let mut entries = Vec::new();

    for alternative in worst_distance.rows() {
        let to_worst = worst_distance
            .get(alternative, WORST_DISTANCE_COLUMN)
            .ok_or_else(|| TopsisError::MissingCell {
                alternative: alternative.to_string(),
                criterion: WORST_DISTANCE_COLUMN.to_string(),
            })?;
        let to_ideal = ideal_distance
            .get(alternative, IDEAL_DISTANCE_COLUMN)
            .ok_or_else(|| TopsisError::MissingCell {
                alternative: alternative.to_string(),
                criterion: IDEAL_DISTANCE_COLUMN.to_string(),
            })?;

        let denominator = to_worst + to_ideal;
        if denominator <= 0.0 {
            return Err(TopsisError::DegenerateDistance {
                alternative: alternative.to_string(),
            });
        }

        entries.push(LabeledEntry::new(
            alternative,
            CLOSENESS_COLUMN,
            to_worst / denominator,
        ));
    }

    Table::from_entries(entries)
}

/// Ranks alternatives by closeness coefficient, best = 1.
///
/// Alternatives are stably sorted ascending by closeness and assigned
/// ranks n, n-1, ..., 1 in that order, so rank strictly decreases as
/// closeness rises and ties are separated by original input order.
pub fn ranking(closeness: &Table) -> Result<Table, TopsisError> {
    let mut ordered: Vec<&LabeledEntry> = closeness.entries().iter().collect();
    ordered.sort_by(|a, b| a.value.total_cmp(&b.value));

    let n = ordered.len();
    let entries = ordered
        .into_iter()
        .enumerate()
        .map(|(i, e)| LabeledEntry::new(e.row.clone(), RANK_COLUMN, (n - i) as f64))
        .collect();

    Table::from_entries(entries)
}
