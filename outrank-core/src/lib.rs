/// outrank-core: Pure-computation multi-criteria decision analysis.
///
/// Alternatives scored against weighted criteria → ranking, by one of three
/// independent methods: PROMETHEE II (outranking flows), AHP (pairwise
/// eigenvector approximation with consistency checking), ELECTRE I
/// (concordance/discordance outranking with kernel extraction).
/// No IO, no shared state — just math. Each engine is a pure function of an
/// immutable problem snapshot; engines never call each other.
///
/// # Quick start
///
/// ```rust
/// use outrank_core::{promethee, Criterion, DecisionProblem, Direction, PreferenceFunction};
///
/// let problem = DecisionProblem::new(
///     vec!["A".into(), "B".into()],
///     vec![
///         Criterion::new("Quality", 0.5, Direction::Benefit),
///         Criterion::new("Cost", 0.5, Direction::Cost),
///     ],
///     vec![vec![10.0, 1.0], vec![5.0, 2.0]],
/// ).unwrap();
///
/// let prefs = vec![PreferenceFunction::Usual, PreferenceFunction::Usual];
/// let result = promethee::rank(&problem, &prefs).unwrap();
///
/// for r in &result.ranking {
///     println!("{}. {} (net flow {:+.4})", r.rank, r.alternative, r.net_flow);
/// }
/// ```

pub mod ahp;
pub mod constants;
pub mod electre;
pub mod error;
pub mod preference;
pub mod promethee;
pub mod types;

// Re-export primary public API at crate root.
pub use ahp::{AhpRankedAlternative, AhpResult, ComparisonMatrix, Consistency};
pub use electre::{DominanceScore, ElectreResult, OutrankingThresholds};
pub use error::{ConfigError, McdmError, ValidationError};
pub use preference::{preference, PreferenceFunction};
pub use promethee::{Flows, PrometheeRankedAlternative, PrometheeResult};
pub use types::{Criterion, DecisionProblem, Direction};
