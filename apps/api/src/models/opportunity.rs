use serde::{Deserialize, Serialize};

use crate::gateway::shape::Shape;
use crate::models::UNKNOWN;

/// Headhunter-style evaluation of one opening for the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityAnalysis {
    pub fit: String,
    pub gaps: Vec<String>,
    pub strategy: String,
    /// 0 – 100
    pub match_score: i64,
    /// 0 – 100, weighted towards DACH / SEE alignment
    pub cultural_fit_score: i64,
    /// High | Medium | Low
    pub growth_potential: String,
    /// High | Medium | Low
    pub urgency: String,
}

impl OpportunityAnalysis {
    pub fn shape() -> Shape {
        Shape::new()
            .string_or("fit", "Analysis unavailable")
            .string_list("gaps")
            .string_or("strategy", "Manual review recommended")
            .integer("match_score")
            .integer("cultural_fit_score")
            .string_or("growth_potential", UNKNOWN)
            .string_or("urgency", UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ratings_default_to_unknown_and_scores_to_zero() {
        let filled = OpportunityAnalysis::shape().backfill(&json!({ "fit": "Strong" }));
        let analysis: OpportunityAnalysis = serde_json::from_value(filled).unwrap();
        assert_eq!(analysis.fit, "Strong");
        assert_eq!(analysis.strategy, "Manual review recommended");
        assert_eq!(analysis.cultural_fit_score, 0);
        assert_eq!(analysis.growth_potential, "Unknown");
        assert_eq!(analysis.urgency, "Unknown");
    }
}
