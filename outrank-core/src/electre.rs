/// ELECTRE I: concordance/discordance outranking with kernel extraction.
///
/// Builds the pairwise concordance and discordance matrices, applies the
/// global thresholds to obtain a boolean outranking relation, then derives
/// both a net-dominance ranking and the non-dominated kernel.
use crate::error::{ConfigError, McdmError};
use crate::types::{rank_descending, DecisionProblem, Direction};

/// Global cutoffs for the outranking test, both in [0, 1].
///
/// `a` outranks `b` iff `C(a,b) >= concordance` and `D(a,b) <= discordance`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutrankingThresholds {
    pub concordance: f64,
    pub discordance: f64,
}

/// Dominance bookkeeping for one alternative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DominanceScore {
    pub alternative: String,
    /// Position in the input alternative sequence.
    pub index: usize,
    /// How many alternatives this one outranks.
    pub outranks: usize,
    /// How many alternatives outrank this one.
    pub outranked_by: usize,
    pub net_dominance: i64,
    /// 1-based rank by net dominance descending. Ties keep input order.
    pub rank: usize,
}

/// Full ELECTRE I result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElectreResult {
    /// Sorted by net dominance descending.
    pub ranking: Vec<DominanceScore>,
    /// C(a, b): weight support for "a outranks b". Diagonal 1 by convention.
    pub concordance_matrix: Vec<Vec<f64>>,
    /// D(a, b): strongest veto-scaled objection. Diagonal 0.
    pub discordance_matrix: Vec<Vec<f64>>,
    /// S(a, b): the outranking relation. Diagonal false.
    pub outranking_matrix: Vec<Vec<bool>>,
    /// Alternatives outranked by no other alternative, in input order.
    ///
    /// If the outranking relation is cyclic the kernel can be empty — a
    /// known limitation of basic ELECTRE I, deliberately not special-cased.
    pub kernel: Vec<String>,
    pub thresholds: OutrankingThresholds,
}

/// Rank a decision problem with ELECTRE I.
///
/// `vetoes` supplies one veto threshold per criterion, in criterion order.
/// A veto of 0 means any strict disadvantage on that criterion saturates
/// discordance at 1.
pub fn rank(
    problem: &DecisionProblem,
    vetoes: &[f64],
    thresholds: OutrankingThresholds,
) -> Result<ElectreResult, McdmError> {
    let n = problem.num_alternatives();
    let m = problem.num_criteria();

    if vetoes.len() != m {
        return Err(ConfigError::PerCriterionCountMismatch {
            what: "veto thresholds",
            expected: m,
            got: vetoes.len(),
        }
        .into());
    }
    for (j, &veto) in vetoes.iter().enumerate() {
        if !veto.is_finite() || veto < 0.0 {
            return Err(ConfigError::NegativeVetoThreshold {
                criterion: j,
                value: veto,
            }
            .into());
        }
    }
    for (name, value) in [
        ("concordance", thresholds.concordance),
        ("discordance", thresholds.discordance),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ThresholdOutOfRange { name, value }.into());
        }
    }

    // C(a, b): sum of weights of criteria where a is at least as good as b.
    let mut concordance_matrix = vec![vec![0.0; n]; n];
    for a in 0..n {
        for b in 0..n {
            if a == b {
                concordance_matrix[a][b] = 1.0;
                continue;
            }
            let mut sum = 0.0;
            for (j, criterion) in problem.criteria().iter().enumerate() {
                let supports = match criterion.direction {
                    Direction::Benefit => problem.score(a, j) >= problem.score(b, j),
                    Direction::Cost => problem.score(a, j) <= problem.score(b, j),
                };
                if supports {
                    sum += criterion.weight;
                }
            }
            concordance_matrix[a][b] = sum;
        }
    }

    // D(a, b): max over criteria where b strictly beats a of the gap scaled
    // by that criterion's veto threshold, capped at 1.
    let mut discordance_matrix = vec![vec![0.0; n]; n];
    for a in 0..n {
        for b in 0..n {
            if a == b {
                continue;
            }
            let mut max_objection = 0.0_f64;
            for (j, criterion) in problem.criteria().iter().enumerate() {
                let gap = match criterion.direction {
                    Direction::Benefit => problem.score(b, j) - problem.score(a, j),
                    Direction::Cost => problem.score(a, j) - problem.score(b, j),
                };
                if gap > 0.0 {
                    // gap / 0 is +inf, so a zero veto saturates at 1.
                    max_objection = max_objection.max((gap / vetoes[j]).min(1.0));
                }
            }
            discordance_matrix[a][b] = max_objection;
        }
    }

    let mut outranking_matrix = vec![vec![false; n]; n];
    for a in 0..n {
        for b in 0..n {
            if a != b {
                outranking_matrix[a][b] = concordance_matrix[a][b] >= thresholds.concordance
                    && discordance_matrix[a][b] <= thresholds.discordance;
            }
        }
    }

    let mut scores = Vec::with_capacity(n);
    for a in 0..n {
        let outranks = outranking_matrix[a].iter().filter(|&&s| s).count();
        let outranked_by = (0..n).filter(|&b| outranking_matrix[b][a]).count();
        scores.push(DominanceScore {
            alternative: problem.alternatives()[a].clone(),
            index: a,
            outranks,
            outranked_by,
            net_dominance: outranks as i64 - outranked_by as i64,
            rank: 0,
        });
    }

    let net: Vec<f64> = scores.iter().map(|s| s.net_dominance as f64).collect();
    let ranking: Vec<DominanceScore> = rank_descending(&net)
        .into_iter()
        .enumerate()
        .map(|(pos, (index, _))| {
            let mut s = scores[index].clone();
            s.rank = pos + 1;
            s
        })
        .collect();

    let kernel = scores
        .iter()
        .filter(|s| s.outranked_by == 0)
        .map(|s| s.alternative.clone())
        .collect();

    Ok(ElectreResult {
        ranking,
        concordance_matrix,
        discordance_matrix,
        outranking_matrix,
        kernel,
        thresholds,
    })
}
