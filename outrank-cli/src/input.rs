/// JSON problem-file schemas and their conversion into core types.
///
/// One schema per method. Criteria carry their method-specific parameters
/// inline; AHP replaces the performance matrix with pairwise comparison
/// matrices.
use outrank_core::{
    ComparisonMatrix, ConfigError, Criterion, DecisionProblem, Direction, McdmError,
    OutrankingThresholds, PreferenceFunction,
};
use serde::Deserialize;

/// PROMETHEE problem file.
///
/// ```json
/// {
///   "alternatives": ["Site A", "Site B"],
///   "criteria": [
///     { "name": "Cost", "weight": 0.5, "direction": "cost",
///       "preference": { "type": "linear", "threshold": 1000.0 } },
///     { "name": "Quality", "weight": 0.5, "direction": "benefit",
///       "preference": { "type": "usual" } }
///   ],
///   "performance": [[12000.0, 8.0], [15000.0, 9.0]]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct PrometheeFile {
    pub alternatives: Vec<String>,
    pub criteria: Vec<PrometheeCriterion>,
    pub performance: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct PrometheeCriterion {
    pub name: String,
    pub weight: f64,
    pub direction: Direction,
    pub preference: PreferenceFunction,
}

impl PrometheeFile {
    /// Split into a validated problem plus the per-criterion preference
    /// functions the engine takes alongside it.
    pub fn into_parts(self) -> Result<(DecisionProblem, Vec<PreferenceFunction>), McdmError> {
        let functions: Vec<PreferenceFunction> =
            self.criteria.iter().map(|c| c.preference).collect();
        let criteria = self
            .criteria
            .into_iter()
            .map(|c| Criterion::new(c.name, c.weight, c.direction))
            .collect();
        let problem = DecisionProblem::new(self.alternatives, criteria, self.performance)?;
        Ok((problem, functions))
    }
}

/// ELECTRE problem file: per-criterion veto thresholds plus the two global
/// outranking cutoffs.
#[derive(Debug, Deserialize)]
pub struct ElectreFile {
    pub alternatives: Vec<String>,
    pub criteria: Vec<ElectreCriterion>,
    pub performance: Vec<Vec<f64>>,
    pub concordance_threshold: f64,
    pub discordance_threshold: f64,
}

#[derive(Debug, Deserialize)]
pub struct ElectreCriterion {
    pub name: String,
    pub weight: f64,
    pub direction: Direction,
    pub veto_threshold: f64,
}

impl ElectreFile {
    pub fn into_parts(
        self,
    ) -> Result<(DecisionProblem, Vec<f64>, OutrankingThresholds), McdmError> {
        let vetoes: Vec<f64> = self.criteria.iter().map(|c| c.veto_threshold).collect();
        let criteria = self
            .criteria
            .into_iter()
            .map(|c| Criterion::new(c.name, c.weight, c.direction))
            .collect();
        let problem = DecisionProblem::new(self.alternatives, criteria, self.performance)?;
        let thresholds = OutrankingThresholds {
            concordance: self.concordance_threshold,
            discordance: self.discordance_threshold,
        };
        Ok((problem, vetoes, thresholds))
    }
}

/// AHP problem file: criteria names, one criteria comparison matrix, and one
/// alternative comparison matrix per criterion (in criteria order).
#[derive(Debug, Deserialize)]
pub struct AhpFile {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub criteria_matrix: Vec<Vec<f64>>,
    pub alternative_matrices: Vec<Vec<Vec<f64>>>,
}

impl AhpFile {
    pub fn into_parts(
        self,
    ) -> Result<(Vec<String>, Vec<String>, ComparisonMatrix, Vec<ComparisonMatrix>), McdmError>
    {
        let criteria_matrix = ComparisonMatrix::new(self.criteria_matrix)?;
        // The criteria names drive the report labels, so their count must
        // match the matrix order or the output would silently drop some.
        if criteria_matrix.order() != self.criteria.len() {
            return Err(ConfigError::CriteriaMatrixOrder {
                expected: self.criteria.len(),
                got: criteria_matrix.order(),
            }
            .into());
        }
        let alternative_matrices = self
            .alternative_matrices
            .into_iter()
            .map(ComparisonMatrix::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((
            self.alternatives,
            self.criteria,
            criteria_matrix,
            alternative_matrices,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_promethee_file() {
        let json = r#"{
            "alternatives": ["Site A", "Site B"],
            "criteria": [
                { "name": "Cost", "weight": 0.5, "direction": "cost",
                  "preference": { "type": "linear", "threshold": 1000.0 } },
                { "name": "Quality", "weight": 0.5, "direction": "benefit",
                  "preference": { "type": "usual" } }
            ],
            "performance": [[12000.0, 8.0], [15000.0, 9.0]]
        }"#;

        let file: PrometheeFile = serde_json::from_str(json).unwrap();
        let (problem, functions) = file.into_parts().unwrap();

        assert_eq!(problem.num_alternatives(), 2);
        assert_eq!(problem.criteria()[0].direction, Direction::Cost);
        assert_eq!(
            functions,
            vec![
                PreferenceFunction::Linear { threshold: 1000.0 },
                PreferenceFunction::Usual,
            ]
        );

        let result = outrank_core::promethee::rank(&problem, &functions).unwrap();
        assert_eq!(result.ranking.len(), 2);
    }

    #[test]
    fn test_parse_electre_file() {
        let json = r#"{
            "alternatives": ["A", "B"],
            "criteria": [
                { "name": "Return", "weight": 0.6, "direction": "benefit", "veto_threshold": 5.0 },
                { "name": "Risk", "weight": 0.4, "direction": "cost", "veto_threshold": 2.0 }
            ],
            "performance": [[10.0, 3.0], [7.0, 5.0]],
            "concordance_threshold": 0.7,
            "discordance_threshold": 0.3
        }"#;

        let file: ElectreFile = serde_json::from_str(json).unwrap();
        let (problem, vetoes, thresholds) = file.into_parts().unwrap();
        assert_eq!(vetoes, vec![5.0, 2.0]);
        assert_eq!(thresholds.concordance, 0.7);

        let result = outrank_core::electre::rank(&problem, &vetoes, thresholds).unwrap();
        assert_eq!(result.kernel, vec!["A".to_string()]);
    }

    #[test]
    fn test_parse_ahp_file() {
        let json = r#"{
            "alternatives": ["Supplier A", "Supplier B"],
            "criteria": ["Cost", "Quality"],
            "criteria_matrix": [[1.0, 2.0], [0.5, 1.0]],
            "alternative_matrices": [
                [[1.0, 3.0], [0.3333, 1.0]],
                [[1.0, 0.2], [5.0, 1.0]]
            ]
        }"#;

        let file: AhpFile = serde_json::from_str(json).unwrap();
        let (alternatives, criteria, criteria_matrix, alternative_matrices) =
            file.into_parts().unwrap();
        assert_eq!(criteria, vec!["Cost".to_string(), "Quality".to_string()]);

        let result =
            outrank_core::ahp::rank(&alternatives, &criteria_matrix, &alternative_matrices)
                .unwrap();
        assert!((result.criteria_weights[0] - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ahp_criteria_name_count_must_match_matrix() {
        // Three criteria names against a 2×2 criteria matrix: rejected, not
        // silently truncated in the report.
        let json = r#"{
            "alternatives": ["A", "B"],
            "criteria": ["Cost", "Quality", "Delivery"],
            "criteria_matrix": [[1.0, 2.0], [0.5, 1.0]],
            "alternative_matrices": [
                [[1.0, 1.0], [1.0, 1.0]],
                [[1.0, 1.0], [1.0, 1.0]]
            ]
        }"#;

        let file: AhpFile = serde_json::from_str(json).unwrap();
        let err = file.into_parts().unwrap_err();
        assert_eq!(
            err,
            McdmError::Config(ConfigError::CriteriaMatrixOrder {
                expected: 3,
                got: 2,
            })
        );
    }

    #[test]
    fn test_invalid_weights_surface_as_error() {
        let json = r#"{
            "alternatives": ["A", "B"],
            "criteria": [
                { "name": "C1", "weight": 0.9, "direction": "benefit",
                  "preference": { "type": "usual" } },
                { "name": "C2", "weight": 0.9, "direction": "benefit",
                  "preference": { "type": "usual" } }
            ],
            "performance": [[1.0, 2.0], [3.0, 4.0]]
        }"#;

        let file: PrometheeFile = serde_json::from_str(json).unwrap();
        assert!(file.into_parts().is_err());
    }

    #[test]
    fn test_unknown_preference_type_rejected() {
        let json = r#"{ "type": "sigmoid", "threshold": 1.0 }"#;
        assert!(serde_json::from_str::<PreferenceFunction>(json).is_err());
    }
}
