//! Topsis Rank - Entropy-Weighted Multi-Criteria Ranking
//!
//! This crate implements TOPSIS (Technique for Order Preference by
//! Similarity to Ideal Solution): alternatives scored on several criteria
//! are ranked by closeness to the best-in-every-criterion profile and
//! distance from the worst-in-every-criterion profile, with criterion
//! weights derived from the entropy of the data rather than supplied by
//! the caller.

pub mod domain;

pub use domain::foundation::{ErrorKind, LabeledEntry, Table, TopsisError};
pub use domain::ranking::{
    rank, run, run_with_trace, DecisionMatrix, PipelineRun, RankedAlternative, Ranking, TraceSink,
};
