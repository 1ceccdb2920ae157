/// Decision problem model: alternatives, criteria, performance matrix.
///
/// An immutable snapshot validated once at construction. Engines borrow it
/// and never mutate it; every analysis run builds a fresh problem.
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::error::{ConfigError, McdmError, ValidationError};

/// Whether larger performance values are better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Benefit,
    Cost,
}

/// A weighted decision dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    pub name: String,
    /// Relative importance in [0, 1]. All weights in a problem must sum to
    /// 1.0 within `WEIGHT_SUM_TOLERANCE`.
    pub weight: f64,
    pub direction: Direction,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64, direction: Direction) -> Self {
        Criterion {
            name: name.into(),
            weight,
            direction,
        }
    }
}

/// A validated decision problem: n alternatives scored against m weighted
/// criteria.
///
/// Alternative order is significant — it fixes display order and breaks
/// ranking ties (earlier in the input keeps the better rank). Names are not
/// uniqueness-checked.
///
/// Only constructible through `new` so the invariants always hold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecisionProblem {
    alternatives: Vec<String>,
    criteria: Vec<Criterion>,
    /// Row i = alternative i's score on each criterion.
    performance: Vec<Vec<f64>>,
}

impl DecisionProblem {
    /// Build a problem, checking every structural invariant up front:
    /// n >= 2, m >= 2, matrix exactly n×m, all cells finite, weights
    /// summing to 1.0 within tolerance. No engine accepts unvalidated data.
    pub fn new(
        alternatives: Vec<String>,
        criteria: Vec<Criterion>,
        performance: Vec<Vec<f64>>,
    ) -> Result<Self, McdmError> {
        let n = alternatives.len();
        let m = criteria.len();

        if n < 2 {
            return Err(ConfigError::TooFewAlternatives(n).into());
        }
        if m < 2 {
            return Err(ConfigError::TooFewCriteria(m).into());
        }

        if performance.len() != n {
            return Err(ValidationError::RowCount {
                rows: performance.len(),
                expected: n,
            }
            .into());
        }
        for (row, values) in performance.iter().enumerate() {
            if values.len() != m {
                return Err(ValidationError::ColumnCount {
                    row,
                    cols: values.len(),
                    expected: m,
                }
                .into());
            }
            for (col, value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ValidationError::NonFiniteValue { row, col }.into());
                }
            }
        }

        check_weight_sum(&criteria)?;

        Ok(DecisionProblem {
            alternatives,
            criteria,
            performance,
        })
    }

    /// Number of alternatives (n).
    pub fn num_alternatives(&self) -> usize {
        self.alternatives.len()
    }

    /// Number of criteria (m).
    pub fn num_criteria(&self) -> usize {
        self.criteria.len()
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Score of alternative `alt` on criterion `crit`.
    pub fn score(&self, alt: usize, crit: usize) -> f64 {
        self.performance[alt][crit]
    }

    pub fn performance(&self) -> &[Vec<f64>] {
        &self.performance
    }
}

/// Check that criterion weights sum to 1.0 within the shared tolerance.
pub(crate) fn check_weight_sum(criteria: &[Criterion]) -> Result<(), ValidationError> {
    let sum: f64 = criteria.iter().map(|c| c.weight).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ValidationError::WeightSum { sum });
    }
    Ok(())
}

/// Assign 1-based ranks over scores sorted descending, preserving input
/// order on ties (stable sort). Returns (original index, score) in rank
/// order. Shared by all three engines.
pub(crate) fn rank_descending(scores: &[f64]) -> Vec<(usize, f64)> {
    let mut order: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_criteria() -> Vec<Criterion> {
        vec![
            Criterion::new("Quality", 0.6, Direction::Benefit),
            Criterion::new("Cost", 0.4, Direction::Cost),
        ]
    }

    #[test]
    fn test_valid_problem() {
        let problem = DecisionProblem::new(
            vec!["A".into(), "B".into()],
            two_criteria(),
            vec![vec![10.0, 3.0], vec![7.0, 5.0]],
        )
        .unwrap();

        assert_eq!(problem.num_alternatives(), 2);
        assert_eq!(problem.num_criteria(), 2);
        assert_eq!(problem.score(1, 0), 7.0);
    }

    #[test]
    fn test_too_few_alternatives() {
        let err = DecisionProblem::new(
            vec!["A".into()],
            two_criteria(),
            vec![vec![1.0, 2.0]],
        )
        .unwrap_err();
        assert_eq!(err, McdmError::Config(ConfigError::TooFewAlternatives(1)));
    }

    #[test]
    fn test_too_few_criteria() {
        let err = DecisionProblem::new(
            vec!["A".into(), "B".into()],
            vec![Criterion::new("Only", 1.0, Direction::Benefit)],
            vec![vec![1.0], vec![2.0]],
        )
        .unwrap_err();
        assert_eq!(err, McdmError::Config(ConfigError::TooFewCriteria(1)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = DecisionProblem::new(
            vec!["A".into(), "B".into()],
            two_criteria(),
            vec![vec![1.0, 2.0]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            McdmError::Validation(ValidationError::RowCount { rows: 1, expected: 2 })
        );

        let err = DecisionProblem::new(
            vec!["A".into(), "B".into()],
            two_criteria(),
            vec![vec![1.0, 2.0], vec![3.0]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            McdmError::Validation(ValidationError::ColumnCount {
                row: 1,
                cols: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_non_finite_value() {
        let err = DecisionProblem::new(
            vec!["A".into(), "B".into()],
            two_criteria(),
            vec![vec![1.0, f64::NAN], vec![3.0, 4.0]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            McdmError::Validation(ValidationError::NonFiniteValue { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_weight_sum_out_of_tolerance() {
        let err = DecisionProblem::new(
            vec!["A".into(), "B".into()],
            vec![
                Criterion::new("Quality", 0.6, Direction::Benefit),
                Criterion::new("Cost", 0.3, Direction::Cost),
            ],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            McdmError::Validation(ValidationError::WeightSum { .. })
        ));
    }

    #[test]
    fn test_weight_sum_within_tolerance() {
        // 0.995 is inside the ±0.01 band.
        let problem = DecisionProblem::new(
            vec!["A".into(), "B".into()],
            vec![
                Criterion::new("Quality", 0.6, Direction::Benefit),
                Criterion::new("Cost", 0.395, Direction::Cost),
            ],
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        );
        assert!(problem.is_ok());
    }

    #[test]
    fn test_rank_descending_stable_ties() {
        let ranked = rank_descending(&[0.5, 0.9, 0.5, 0.1]);
        let order: Vec<usize> = ranked.iter().map(|&(i, _)| i).collect();
        // Equal scores keep input order: index 0 before index 2.
        assert_eq!(order, vec![1, 0, 2, 3]);
    }
}
