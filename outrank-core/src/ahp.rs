/// AHP: pairwise-comparison ranking with consistency checking.
///
/// Priority vectors come from the column-normalized approximate eigenvector
/// (Saaty's method); every supplied matrix gets a λmax/CI/CR consistency
/// diagnostic against the random-consistency index table.
use crate::constants::{CR_ACCEPTABLE, RANDOM_CONSISTENCY_INDEX, RECIPROCITY_TOLERANCE};
use crate::error::{ConfigError, McdmError, ValidationError};
use crate::types::rank_descending;

/// A validated k×k pairwise comparison matrix.
///
/// Entries are finite positive reals with `M[i][i] = 1` and the reciprocal
/// invariant `M[j][i] = 1 / M[i][j]` (within a small tolerance, so
/// hand-entered reciprocals like 0.33 for 1/3 pass).
///
/// Only constructible through `new` so the invariants always hold
/// (serialization of results never embeds one).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonMatrix {
    values: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    pub fn new(values: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let k = values.len();
        for (row, r) in values.iter().enumerate() {
            if r.len() != k {
                return Err(ValidationError::NotSquare {
                    rows: k,
                    cols: r.len(),
                });
            }
            for (col, &v) in r.iter().enumerate() {
                if !v.is_finite() || v <= 0.0 {
                    return Err(ValidationError::NonPositiveComparison {
                        row,
                        col,
                        value: v,
                    });
                }
            }
        }
        for i in 0..k {
            if (values[i][i] - 1.0).abs() > 1e-9 {
                return Err(ValidationError::DiagonalNotOne {
                    index: i,
                    value: values[i][i],
                });
            }
            for j in (i + 1)..k {
                let product = values[i][j] * values[j][i];
                if (product - 1.0).abs() > RECIPROCITY_TOLERANCE {
                    return Err(ValidationError::NotReciprocal {
                        row: i,
                        col: j,
                        product,
                    });
                }
            }
        }
        Ok(ComparisonMatrix { values })
    }

    /// Matrix order k.
    pub fn order(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Approximate principal eigenvector: normalize each column by its sum,
    /// then average the rows. Sums to 1 by construction.
    pub fn priority_vector(&self) -> Vec<f64> {
        let k = self.order();
        let column_sums: Vec<f64> = (0..k)
            .map(|j| self.values.iter().map(|row| row[j]).sum())
            .collect();

        self.values
            .iter()
            .map(|row| {
                let normalized_row_sum: f64 = row
                    .iter()
                    .zip(&column_sums)
                    .map(|(&v, &s)| v / s)
                    .sum();
                normalized_row_sum / k as f64
            })
            .collect()
    }

    /// Consistency diagnostics for this matrix against a priority vector
    /// (normally its own `priority_vector()`).
    ///
    /// For k < 3 a reciprocal matrix is always perfectly consistent, and the
    /// RI table is 0 there, so CI and CR are reported as exactly 0 rather
    /// than dividing 0/0.
    pub fn consistency(&self, weights: &[f64]) -> Consistency {
        let k = self.order();

        // λmax = mean of (M·w)ᵢ / wᵢ.
        let lambda_max = self
            .values
            .iter()
            .zip(weights)
            .map(|(row, &w_i)| {
                let weighted_sum: f64 = row.iter().zip(weights).map(|(&v, &w_j)| v * w_j).sum();
                weighted_sum / w_i
            })
            .sum::<f64>()
            / k as f64;

        if k < 3 {
            return Consistency {
                lambda_max,
                consistency_index: 0.0,
                consistency_ratio: 0.0,
            };
        }

        let consistency_index = (lambda_max - k as f64) / (k as f64 - 1.0);
        let random_index = RANDOM_CONSISTENCY_INDEX
            .get(k)
            .copied()
            .unwrap_or_else(|| RANDOM_CONSISTENCY_INDEX[RANDOM_CONSISTENCY_INDEX.len() - 1]);

        Consistency {
            lambda_max,
            consistency_index,
            consistency_ratio: consistency_index / random_index,
        }
    }
}

/// λmax / CI / CR diagnostics for one comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Consistency {
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
}

impl Consistency {
    /// CR < 0.1 is conventionally acceptable judgment consistency.
    pub fn is_acceptable(&self) -> bool {
        self.consistency_ratio < CR_ACCEPTABLE
    }
}

/// One ranked alternative with its synthesized score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpRankedAlternative {
    pub alternative: String,
    /// Position in the input alternative sequence.
    pub index: usize,
    pub score: f64,
    /// 1-based rank. Ties keep input order.
    pub rank: usize,
}

/// Full AHP result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpResult {
    /// Sorted by overall score descending.
    pub ranking: Vec<AhpRankedAlternative>,
    /// Priority vector of the criteria matrix, in criterion order.
    pub criteria_weights: Vec<f64>,
    /// Local alternative scores per criterion: `local_scores[c][a]`.
    pub local_scores: Vec<Vec<f64>>,
    /// Synthesized scores in input alternative order.
    pub overall_scores: Vec<f64>,
    pub criteria_consistency: Consistency,
    /// One diagnostic per alternative matrix, in criterion order.
    pub alternative_consistency: Vec<Consistency>,
}

/// Rank alternatives with AHP.
///
/// `criteria_matrix` compares the m criteria pairwise; `alternative_matrices`
/// holds one n×n matrix per criterion comparing the alternatives under that
/// criterion, in criterion order.
pub fn rank(
    alternatives: &[String],
    criteria_matrix: &ComparisonMatrix,
    alternative_matrices: &[ComparisonMatrix],
) -> Result<AhpResult, McdmError> {
    let n = alternatives.len();
    let m = criteria_matrix.order();

    if n < 2 {
        return Err(ConfigError::TooFewAlternatives(n).into());
    }
    if m < 2 {
        return Err(ConfigError::TooFewCriteria(m).into());
    }
    if alternative_matrices.len() != m {
        return Err(ConfigError::PerCriterionCountMismatch {
            what: "alternative comparison matrices",
            expected: m,
            got: alternative_matrices.len(),
        }
        .into());
    }
    for (c, matrix) in alternative_matrices.iter().enumerate() {
        if matrix.order() != n {
            return Err(ConfigError::AlternativeMatrixOrder {
                criterion: c,
                expected: n,
                got: matrix.order(),
            }
            .into());
        }
    }

    let criteria_weights = criteria_matrix.priority_vector();
    let criteria_consistency = criteria_matrix.consistency(&criteria_weights);

    let local_scores: Vec<Vec<f64>> = alternative_matrices
        .iter()
        .map(|matrix| matrix.priority_vector())
        .collect();
    let alternative_consistency: Vec<Consistency> = alternative_matrices
        .iter()
        .zip(&local_scores)
        .map(|(matrix, scores)| matrix.consistency(scores))
        .collect();

    // Synthesis: Score(a) = Σ_c W_c · L_c(a).
    let overall_scores: Vec<f64> = (0..n)
        .map(|a| {
            criteria_weights
                .iter()
                .zip(&local_scores)
                .map(|(&w, local)| w * local[a])
                .sum()
        })
        .collect();

    let ranking = rank_descending(&overall_scores)
        .into_iter()
        .enumerate()
        .map(|(pos, (index, score))| AhpRankedAlternative {
            alternative: alternatives[index].clone(),
            index,
            score,
            rank: pos + 1,
        })
        .collect();

    Ok(AhpResult {
        ranking,
        criteria_weights,
        local_scores,
        overall_scores,
        criteria_consistency,
        alternative_consistency,
    })
}
