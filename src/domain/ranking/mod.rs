//! The TOPSIS ranking pipeline.
//!
//! Stages in dependency order: decision matrix (input), vector
//! normalization, sum normalization, entropy vector, criteria weights,
//! weighted normalized matrix, ideal/worst profiles, distances, closeness
//! coefficients, ranking.

mod distance;
mod entropy;
mod matrix;
mod normalize;
mod pipeline;
pub mod render;
mod weighting;

pub use distance::{
    closeness, distance_to_ideal, distance_to_worst, ranking, CLOSENESS_COLUMN,
    IDEAL_DISTANCE_COLUMN, RANK_COLUMN, WORST_DISTANCE_COLUMN,
};
pub use entropy::{criteria_weights, entropy_vector, ENTROPY_ROW, WEIGHT_ROW};
pub use matrix::DecisionMatrix;
pub use normalize::{sum_normalize, vector_normalize};
pub use pipeline::{rank, run, run_with_trace, PipelineRun, RankedAlternative, Ranking, TraceSink};
pub use weighting::{ideal_profile, weighted_matrix, worst_profile, IDEAL_ROW, WORST_ROW};
