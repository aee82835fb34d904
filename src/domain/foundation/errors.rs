//! Error types for the ranking pipeline.

use std::fmt;
use thiserror::Error;

/// Errors surfaced by the TOPSIS pipeline.
///
/// Every variant names the offending alternative/criterion where one
/// exists; the message identifies the stage that detected the problem.
/// Failures are never coerced to NaN or infinity - any error aborts the
/// whole ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("At least 2 alternatives are required, got {actual}")]
    TooFewAlternatives { actual: usize },

    #[error("At least 1 criterion is required")]
    NoCriteria,

    #[error("Missing value for alternative '{alternative}' on criterion '{criterion}'")]
    MissingCell {
        alternative: String,
        criterion: String,
    },

    #[error("Duplicate entry for row '{row}' and column '{column}'")]
    DuplicateEntry { row: String, column: String },

    #[error("Value for alternative '{alternative}' on criterion '{criterion}' is not finite")]
    NonFiniteValue {
        alternative: String,
        criterion: String,
    },

    #[error(
        "Value {value} for alternative '{alternative}' on criterion '{criterion}' is negative"
    )]
    NegativeValue {
        alternative: String,
        criterion: String,
        value: f64,
    },

    #[error(
        "Sum normalization requires strictly positive values; \
         alternative '{alternative}' has {value} on criterion '{criterion}'"
    )]
    NonPositiveValue {
        alternative: String,
        criterion: String,
        value: f64,
    },

    #[error("Criterion '{criterion}' has a zero Euclidean norm; vector normalization is undefined")]
    ZeroColumnNorm { criterion: String },

    #[error("No weight available for criterion '{criterion}'")]
    MissingWeight { criterion: String },

    #[error("Every criterion has entropy 1 (no discriminating criterion); weights are undefined")]
    DegenerateWeights,

    #[error(
        "Alternative '{alternative}' is at zero distance to both the ideal and worst profiles"
    )]
    DegenerateDistance { alternative: String },
}

/// Error categories, matching the failure taxonomy of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DegenerateWeights,
    DegenerateDistance,
}

impl TopsisError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TopsisError::DegenerateWeights => ErrorKind::DegenerateWeights,
            TopsisError::DegenerateDistance { .. } => ErrorKind::DegenerateDistance,
            _ => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::DegenerateWeights => "DEGENERATE_WEIGHTS",
            ErrorKind::DegenerateDistance => "DEGENERATE_DISTANCE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_alternatives_displays_correctly() {
        let err = TopsisError::TooFewAlternatives { actual: 1 };
        assert_eq!(
            format!("{}", err),
            "At least 2 alternatives are required, got 1"
        );
    }

    #[test]
    fn missing_cell_names_both_labels() {
        let err = TopsisError::MissingCell {
            alternative: "A".to_string(),
            criterion: "price".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Missing value for alternative 'A' on criterion 'price'"
        );
    }

    #[test]
    fn non_positive_value_names_the_stage() {
        let err = TopsisError::NonPositiveValue {
            alternative: "B".to_string(),
            criterion: "c1".to_string(),
            value: 0.0,
        };
        assert!(format!("{}", err).starts_with("Sum normalization requires"));
    }

    #[test]
    fn zero_column_norm_names_the_criterion() {
        let err = TopsisError::ZeroColumnNorm {
            criterion: "c2".to_string(),
        };
        assert!(format!("{}", err).contains("'c2'"));
    }

    #[test]
    fn kind_classifies_invalid_input() {
        let err = TopsisError::NoCriteria;
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn kind_classifies_degenerate_variants() {
        assert_eq!(
            TopsisError::DegenerateWeights.kind(),
            ErrorKind::DegenerateWeights
        );
        let err = TopsisError::DegenerateDistance {
            alternative: "A".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::DegenerateDistance);
    }

    #[test]
    fn error_kind_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorKind::InvalidInput), "INVALID_INPUT");
        assert_eq!(
            format!("{}", ErrorKind::DegenerateDistance),
            "DEGENERATE_DISTANCE"
        );
    }
}
