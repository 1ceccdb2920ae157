/// Absolute tolerance for the "criterion weights sum to 1.0" invariant.
/// Matches the validation the input forms applied before any engine ran.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Saaty's random-consistency index, indexed by matrix order k = 0..9.
///
/// Average consistency index of randomly generated reciprocal matrices,
/// used to normalize CI into the consistency ratio CR = CI / RI(k).
/// Orders of 10 and above reuse the last entry.
pub const RANDOM_CONSISTENCY_INDEX: [f64; 10] =
    [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// CR below this value is conventionally considered acceptable judgment
/// consistency for AHP.
pub const CR_ACCEPTABLE: f64 = 0.1;

/// Tolerance for the AHP reciprocal invariant `M[i][j] * M[j][i] = 1`.
/// Loose enough to accept hand-entered reciprocals like 0.33 for 1/3.
pub const RECIPROCITY_TOLERANCE: f64 = 0.05;
