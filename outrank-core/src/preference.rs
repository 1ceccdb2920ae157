/// Preference function library for PROMETHEE II.
///
/// Six pure scalar functions mapping a performance gap to a preference
/// degree in [0, 1]. The gap is always formed as "A relative to B" before
/// the function runs, so the functions themselves are direction-agnostic.
use crate::error::ConfigError;
use crate::types::Direction;

/// The six generalized criterion shapes of Brans and Vincke, as a closed
/// variant set dispatched by one exhaustive match.
///
/// `threshold` must be >= 0. A threshold of 0 would divide by zero in the
/// linear, level, and gaussian shapes, so any non-positive threshold makes
/// the function degrade to `Usual` (strict preference on any positive gap).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum PreferenceFunction {
    /// Type I: any positive gap is full preference.
    Usual,
    /// Type II: full preference once the gap exceeds the indifference
    /// threshold, none below.
    Quasi { threshold: f64 },
    /// Type III: preference grows linearly with the gap up to the threshold.
    Linear { threshold: f64 },
    /// Type IV: indifferent up to threshold/2, half preference up to the
    /// threshold, full beyond.
    Level { threshold: f64 },
    /// Type V: like `Linear` (kept as a distinct tag to match the
    /// standard PROMETHEE taxonomy).
    VShape { threshold: f64 },
    /// Type VI: smooth gaussian ramp, `1 - exp(-d²/2s²)` for positive gaps.
    Gaussian { threshold: f64 },
}

impl PreferenceFunction {
    /// Preference degree for a signed gap `diff`, where `diff > 0` means
    /// "A is preferred to B". Always in [0, 1] for finite input.
    pub fn degree(&self, diff: f64) -> f64 {
        match *self {
            PreferenceFunction::Usual => usual(diff),
            PreferenceFunction::Quasi { threshold } => {
                if diff > threshold.max(0.0) {
                    1.0
                } else {
                    0.0
                }
            }
            PreferenceFunction::Linear { threshold }
            | PreferenceFunction::VShape { threshold } => {
                if threshold <= 0.0 {
                    return usual(diff);
                }
                if diff <= 0.0 {
                    0.0
                } else if diff >= threshold {
                    1.0
                } else {
                    diff / threshold
                }
            }
            PreferenceFunction::Level { threshold } => {
                if threshold <= 0.0 {
                    return usual(diff);
                }
                if diff <= threshold / 2.0 {
                    0.0
                } else if diff >= threshold {
                    1.0
                } else {
                    0.5
                }
            }
            PreferenceFunction::Gaussian { threshold } => {
                if threshold <= 0.0 {
                    return usual(diff);
                }
                if diff <= 0.0 {
                    0.0
                } else {
                    1.0 - (-(diff * diff) / (2.0 * threshold * threshold)).exp()
                }
            }
        }
    }

    /// The threshold parameter, if this shape carries one.
    pub fn threshold(&self) -> Option<f64> {
        match *self {
            PreferenceFunction::Usual => None,
            PreferenceFunction::Quasi { threshold }
            | PreferenceFunction::Linear { threshold }
            | PreferenceFunction::Level { threshold }
            | PreferenceFunction::VShape { threshold }
            | PreferenceFunction::Gaussian { threshold } => Some(threshold),
        }
    }

    /// Reject thresholds outside their documented domain (negative).
    /// `criterion` is only used to label the error.
    pub(crate) fn validate(&self, criterion: usize) -> Result<(), ConfigError> {
        match self.threshold() {
            Some(t) if t < 0.0 => Err(ConfigError::NegativePreferenceThreshold {
                criterion,
                value: t,
            }),
            _ => Ok(()),
        }
    }
}

fn usual(diff: f64) -> f64 {
    if diff > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Preference degree of `value_a` over `value_b` on one criterion.
///
/// The gap is oriented by `direction` so that a positive gap always means
/// "A is preferred to B": `a - b` for benefit criteria, `b - a` for cost.
pub fn preference(
    value_a: f64,
    value_b: f64,
    direction: Direction,
    function: PreferenceFunction,
) -> f64 {
    let diff = match direction {
        Direction::Benefit => value_a - value_b,
        Direction::Cost => value_b - value_a,
    };
    function.degree(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_usual() {
        let f = PreferenceFunction::Usual;
        assert_eq!(f.degree(0.001), 1.0);
        assert_eq!(f.degree(0.0), 0.0);
        assert_eq!(f.degree(-3.0), 0.0);
    }

    #[test]
    fn test_quasi() {
        let f = PreferenceFunction::Quasi { threshold: 2.0 };
        assert_eq!(f.degree(2.5), 1.0);
        assert_eq!(f.degree(2.0), 0.0); // strictly greater than threshold
        assert_eq!(f.degree(-1.0), 0.0);
    }

    #[test]
    fn test_linear_interpolation() {
        let f = PreferenceFunction::Linear { threshold: 4.0 };
        assert_eq!(f.degree(-1.0), 0.0);
        assert_eq!(f.degree(0.0), 0.0);
        assert!((f.degree(1.0) - 0.25).abs() < 1e-12);
        assert!((f.degree(3.0) - 0.75).abs() < 1e-12);
        assert_eq!(f.degree(4.0), 1.0);
        assert_eq!(f.degree(9.0), 1.0);
    }

    #[test]
    fn test_level_steps() {
        let f = PreferenceFunction::Level { threshold: 4.0 };
        assert_eq!(f.degree(2.0), 0.0); // at threshold/2
        assert_eq!(f.degree(3.0), 0.5);
        assert_eq!(f.degree(4.0), 1.0);
        assert_eq!(f.degree(-1.0), 0.0);
    }

    #[test]
    fn test_v_shape_matches_linear() {
        let v = PreferenceFunction::VShape { threshold: 4.0 };
        let l = PreferenceFunction::Linear { threshold: 4.0 };
        for diff in [-2.0, 0.0, 1.0, 2.5, 4.0, 7.0] {
            assert_eq!(v.degree(diff), l.degree(diff));
        }
    }

    #[test]
    fn test_gaussian() {
        let f = PreferenceFunction::Gaussian { threshold: 2.0 };
        assert_eq!(f.degree(0.0), 0.0);
        assert_eq!(f.degree(-1.0), 0.0);
        // 1 - exp(-4/8) ~ 0.3935
        assert!((f.degree(2.0) - (1.0 - (-0.5_f64).exp())).abs() < 1e-12);
        assert!(f.degree(100.0) > 0.999);
        assert!(f.degree(100.0) <= 1.0);
    }

    #[test]
    fn test_zero_threshold_degrades_to_usual() {
        for f in [
            PreferenceFunction::Quasi { threshold: 0.0 },
            PreferenceFunction::Linear { threshold: 0.0 },
            PreferenceFunction::Level { threshold: 0.0 },
            PreferenceFunction::VShape { threshold: 0.0 },
            PreferenceFunction::Gaussian { threshold: 0.0 },
        ] {
            assert_eq!(f.degree(0.5), 1.0, "{f:?} with positive gap");
            assert_eq!(f.degree(0.0), 0.0, "{f:?} with zero gap");
            assert_eq!(f.degree(-0.5), 0.0, "{f:?} with negative gap");
        }
    }

    #[test]
    fn test_direction_orients_the_gap() {
        // On a cost criterion the smaller value wins.
        let p = preference(5.0, 9.0, Direction::Cost, PreferenceFunction::Usual);
        assert_eq!(p, 1.0);
        let p = preference(5.0, 9.0, Direction::Benefit, PreferenceFunction::Usual);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = PreferenceFunction::Linear { threshold: -1.0 }
            .validate(3)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NegativePreferenceThreshold {
                criterion: 3,
                value: -1.0
            }
        );
        assert!(PreferenceFunction::Usual.validate(0).is_ok());
    }

    fn any_function() -> impl Strategy<Value = PreferenceFunction> {
        let t = 1e-3..1e3_f64;
        prop_oneof![
            Just(PreferenceFunction::Usual),
            t.clone().prop_map(|threshold| PreferenceFunction::Quasi { threshold }),
            t.clone().prop_map(|threshold| PreferenceFunction::Linear { threshold }),
            t.clone().prop_map(|threshold| PreferenceFunction::Level { threshold }),
            t.clone().prop_map(|threshold| PreferenceFunction::VShape { threshold }),
            t.prop_map(|threshold| PreferenceFunction::Gaussian { threshold }),
        ]
    }

    proptest! {
        /// Every shape stays inside [0, 1] for any finite gap and positive threshold.
        #[test]
        fn prop_degree_in_unit_interval(f in any_function(), diff in -1e6..1e6_f64) {
            let d = f.degree(diff);
            prop_assert!((0.0..=1.0).contains(&d), "{f:?} gave {d} for diff {diff}");
        }

        /// A non-positive gap never yields preference (quasi included, since
        /// its threshold is non-negative).
        #[test]
        fn prop_no_preference_without_gap(f in any_function(), diff in -1e6..=0.0_f64) {
            prop_assert_eq!(f.degree(diff), 0.0);
        }
    }
}
