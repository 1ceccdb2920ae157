/// Error taxonomy shared by the three engines.
///
/// Everything here is raised before any computation begins (fail-fast):
/// engines never produce partial results. `ValidationError` covers structural
/// invariants of caller-supplied data; `ConfigError` covers parameters
/// outside their documented domain.
use thiserror::Error;

/// A structural invariant of the input data is violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("criterion weights sum to {sum:.3}, expected 1.0 within ±0.01")]
    WeightSum { sum: f64 },

    #[error("performance matrix has {rows} rows, expected {expected} (one per alternative)")]
    RowCount { rows: usize, expected: usize },

    #[error("performance matrix row {row} has {cols} values, expected {expected} (one per criterion)")]
    ColumnCount { row: usize, cols: usize, expected: usize },

    #[error("performance value at row {row}, column {col} is not a finite number")]
    NonFiniteValue { row: usize, col: usize },

    #[error("comparison matrix is {rows}x{cols}, must be square")]
    NotSquare { rows: usize, cols: usize },

    #[error("comparison matrix entry [{row}][{col}] = {value} must be a finite positive number")]
    NonPositiveComparison { row: usize, col: usize, value: f64 },

    #[error("comparison matrix diagonal entry [{index}][{index}] = {value}, must be 1")]
    DiagonalNotOne { index: usize, value: f64 },

    #[error(
        "comparison matrix entries [{row}][{col}] and [{col}][{row}] are not reciprocal \
         (product = {product:.4}, expected 1)"
    )]
    NotReciprocal { row: usize, col: usize, product: f64 },
}

/// A method parameter is outside its documented domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("need at least 2 alternatives, got {0}")]
    TooFewAlternatives(usize),

    #[error("need at least 2 criteria, got {0}")]
    TooFewCriteria(usize),

    #[error("preference threshold for criterion {criterion} is {value}, must be >= 0")]
    NegativePreferenceThreshold { criterion: usize, value: f64 },

    #[error("veto threshold for criterion {criterion} is {value}, must be >= 0")]
    NegativeVetoThreshold { criterion: usize, value: f64 },

    #[error("{name} threshold is {value}, must be within [0, 1]")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("expected {expected} {what} (one per criterion), got {got}")]
    PerCriterionCountMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("criteria comparison matrix is {got}x{got}, expected {expected}x{expected} (one row per criterion)")]
    CriteriaMatrixOrder { expected: usize, got: usize },

    #[error(
        "alternative comparison matrix for criterion {criterion} is {got}x{got}, \
         expected {expected}x{expected} (one row per alternative)"
    )]
    AlternativeMatrixOrder {
        criterion: usize,
        expected: usize,
        got: usize,
    },
}

/// Any failure an engine can report to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McdmError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
