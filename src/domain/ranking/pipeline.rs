//! Pipeline orchestration - runs the ten stages in dependency order.
//!
//! The pipeline is a pure function of the decision matrix: every stage
//! consumes the tables produced by earlier stages and returns a fresh
//! table, nothing is mutated across stages, and no I/O happens during
//! computation. Diagnostics are a side channel: an optional [`TraceSink`]
//! observes each stage boundary without affecting the result.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Table, TopsisError};

use super::distance::{
    closeness, distance_to_ideal, distance_to_worst, ranking, CLOSENESS_COLUMN, RANK_COLUMN,
};
use super::entropy::{criteria_weights, entropy_vector};
use super::matrix::DecisionMatrix;
use super::normalize::{sum_normalize, vector_normalize};
use super::weighting::{ideal_profile, weighted_matrix, worst_profile};

/// A stage-boundary observer for diagnostic rendering.
///
/// Implementations receive every table the pipeline produces, in stage
/// order, and must not influence the computation.
pub trait TraceSink {
    fn record(&mut self, stage: &str, table: &Table);
}

struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _stage: &str, _table: &Table) {}
}

/// Every table produced by one pipeline invocation, read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineRun {
    pub decision_matrix: Table,
    pub vector_normalized: Table,
    pub sum_normalized: Table,
    pub entropy: Table,
    pub weights: Table,
    pub weighted: Table,
    pub ideal_profile: Table,
    pub worst_profile: Table,
    pub ideal_distance: Table,
    pub worst_distance: Table,
    pub closeness: Table,
    pub ranks: Table,
    /// The rank-1 alternative.
    pub best_alternative: String,
}

/// One alternative's position in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: String,
    pub closeness: f64,
    pub rank: u32,
}

/// The externally visible result: the top alternative plus the full
/// closeness table, ordered best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub best: String,
    pub alternatives: Vec<RankedAlternative>,
}

impl PipelineRun {
    /// Reduces the run to the externally visible result: the best
    /// alternative plus (alternative, closeness, rank) rows ordered best
    /// first.
    pub fn ranking(&self) -> Result<Ranking, TopsisError> {
        let mut alternatives = Vec::new();
        for alternative in self.closeness.rows() {
            let closeness = self
                .closeness
                .get(alternative, CLOSENESS_COLUMN)
                .ok_or_else(|| TopsisError::MissingCell {
                    alternative: alternative.to_string(),
                    criterion: CLOSENESS_COLUMN.to_string(),
                })?;
            let rank =
                self.ranks
                    .get(alternative, RANK_COLUMN)
                    .ok_or_else(|| TopsisError::MissingCell {
                        alternative: alternative.to_string(),
                        criterion: RANK_COLUMN.to_string(),
                    })?;
            alternatives.push(RankedAlternative {
                alternative: alternative.to_string(),
                closeness,
                rank: rank as u32,
            });
        }
        alternatives.sort_by_key(|a| a.rank);

        Ok(Ranking {
            best: self.best_alternative.clone(),
            alternatives,
        })
    }
}

/// Runs the full pipeline.
pub fn run(matrix: &DecisionMatrix) -> Result<PipelineRun, TopsisError> {
    run_with_trace(matrix, &mut NoTrace)
}

/// Runs the full pipeline, reporting each stage's output to `sink`.
pub fn run_with_trace(
    matrix: &DecisionMatrix,
    sink: &mut dyn TraceSink,
) -> Result<PipelineRun, TopsisError> {
    let decision_matrix = matrix.table().clone();
    sink.record("Decision Matrix", &decision_matrix);

    let vector_normalized = vector_normalize(&decision_matrix)?;
    sink.record("Vector-Normalized Matrix", &vector_normalized);

    let sum_normalized = sum_normalize(&decision_matrix)?;
    sink.record("Sum-Normalized Matrix", &sum_normalized);

    let entropy = entropy_vector(&sum_normalized)?;
    sink.record("Entropy Vector", &entropy);

    let weights = criteria_weights(&entropy)?;
    sink.record("Criteria Weights", &weights);

    let weighted = weighted_matrix(&vector_normalized, &weights)?;
    sink.record("Weighted Normalized Matrix", &weighted);

    let ideal = ideal_profile(&weighted)?;
    sink.record("Ideal Profile", &ideal);

    let worst = worst_profile(&weighted)?;
    sink.record("Worst Profile", &worst);

    let ideal_distance = distance_to_ideal(&weighted, &ideal)?;
    sink.record("Distance to Ideal", &ideal_distance);

    let worst_distance = distance_to_worst(&weighted, &worst)?;
    sink.record("Distance to Worst", &worst_distance);

    let closeness_table = closeness(&ideal_distance, &worst_distance)?;
    sink.record("Closeness Coefficient", &closeness_table);

    let ranks = ranking(&closeness_table)?;
    sink.record("Rank", &ranks);

    let best_alternative = rank_one(&ranks)?;

    Ok(PipelineRun {
        decision_matrix,
        vector_normalized,
        sum_normalized,
        entropy,
        weights,
        weighted,
        ideal_profile: ideal,
        worst_profile: worst,
        ideal_distance,
        worst_distance,
        closeness: closeness_table,
        ranks,
        best_alternative,
    })
}

/// Runs the pipeline and reduces it to the externally visible result:
/// the best alternative plus (alternative, closeness, rank) rows ordered
/// best first.
pub fn rank(matrix: &DecisionMatrix) -> Result<Ranking, TopsisError> {
    run(matrix)?.ranking()
}

// Ranks are integer-valued by construction, so the rank-1 lookup is an
// exact comparison.
fn rank_one(ranks: &Table) -> Result<String, TopsisError> {
    ranks
        .entries()
        .iter()
        .find(|e| e.value == 1.0)
        .map(|e| e.row.clone())
        .ok_or_else(|| TopsisError::MissingCell {
            alternative: "rank 1".to_string(),
            criterion: RANK_COLUMN.to_string(),
        })
}
