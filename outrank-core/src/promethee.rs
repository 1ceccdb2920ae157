/// PROMETHEE II: outranking-flow ranking.
///
/// Per-criterion pairwise preference matrices → weighted aggregation →
/// leaving/entering/net flows → complete ranking. Pure function of the
/// problem snapshot; one call, one freshly allocated result.
use crate::error::{ConfigError, McdmError};
use crate::preference::{preference, PreferenceFunction};
use crate::types::{rank_descending, DecisionProblem};

/// One ranked alternative with its flows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrometheeRankedAlternative {
    pub alternative: String,
    /// Position in the input alternative sequence.
    pub index: usize,
    /// Leaving flow φ⁺: how strongly this alternative outranks the field.
    pub positive_flow: f64,
    /// Entering flow φ⁻: how strongly the field outranks it.
    pub negative_flow: f64,
    /// Net flow φ = φ⁺ − φ⁻, the ranking scalar.
    pub net_flow: f64,
    /// 1-based rank. Ties keep input order.
    pub rank: usize,
}

/// The three flow vectors, in input alternative order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flows {
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
    pub net: Vec<f64>,
}

/// Full PROMETHEE II result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrometheeResult {
    /// Sorted by net flow descending.
    pub ranking: Vec<PrometheeRankedAlternative>,
    /// One n×n preference matrix per criterion, diagonal 0.
    pub preference_matrices: Vec<Vec<Vec<f64>>>,
    /// Weighted multi-criterion preference index π(i, k), diagonal 0.
    pub aggregated_matrix: Vec<Vec<f64>>,
    pub flows: Flows,
}

/// Rank a decision problem with PROMETHEE II.
///
/// `functions` supplies one preference function per criterion, in criterion
/// order. Fails fast on any validation or configuration problem; no partial
/// computation.
pub fn rank(
    problem: &DecisionProblem,
    functions: &[PreferenceFunction],
) -> Result<PrometheeResult, McdmError> {
    let n = problem.num_alternatives();
    let m = problem.num_criteria();

    if functions.len() != m {
        return Err(ConfigError::PerCriterionCountMismatch {
            what: "preference functions",
            expected: m,
            got: functions.len(),
        }
        .into());
    }
    for (j, f) in functions.iter().enumerate() {
        f.validate(j)?;
    }

    // Per-criterion n×n preference matrices, diagonal 0.
    let mut preference_matrices = Vec::with_capacity(m);
    for (j, (criterion, function)) in problem.criteria().iter().zip(functions).enumerate() {
        let mut matrix = vec![vec![0.0; n]; n];
        for i in 0..n {
            for k in 0..n {
                if i == k {
                    continue;
                }
                matrix[i][k] = preference(
                    problem.score(i, j),
                    problem.score(k, j),
                    criterion.direction,
                    *function,
                );
            }
        }
        preference_matrices.push(matrix);
    }

    // Weighted aggregation: π(i, k) = Σⱼ wⱼ · Pⱼ[i][k], stays in [0, 1].
    let mut aggregated_matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for k in 0..n {
            let mut sum = 0.0;
            for (j, criterion) in problem.criteria().iter().enumerate() {
                sum += criterion.weight * preference_matrices[j][i][k];
            }
            aggregated_matrix[i][k] = sum;
        }
    }

    // Outranking flows, each averaged over the n−1 opponents.
    let mut positive = vec![0.0; n];
    let mut negative = vec![0.0; n];
    let mut net = vec![0.0; n];
    for i in 0..n {
        let mut leaving = 0.0;
        let mut entering = 0.0;
        for k in 0..n {
            if i != k {
                leaving += aggregated_matrix[i][k];
                entering += aggregated_matrix[k][i];
            }
        }
        positive[i] = leaving / (n - 1) as f64;
        negative[i] = entering / (n - 1) as f64;
        net[i] = positive[i] - negative[i];
    }

    let ranking = rank_descending(&net)
        .into_iter()
        .enumerate()
        .map(|(pos, (index, net_flow))| PrometheeRankedAlternative {
            alternative: problem.alternatives()[index].clone(),
            index,
            positive_flow: positive[index],
            negative_flow: negative[index],
            net_flow,
            rank: pos + 1,
        })
        .collect();

    Ok(PrometheeResult {
        ranking,
        preference_matrices,
        aggregated_matrix,
        flows: Flows {
            positive,
            negative,
            net,
        },
    })
}
