use serde::{Deserialize, Serialize};

use crate::gateway::shape::Shape;

/// Leadership / impact / communication scores, each with a one-sentence rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub leadership: i64,
    pub leadership_rationale: String,
    pub impact: i64,
    pub impact_rationale: String,
    pub communication: i64,
    pub communication_rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvAnalysis {
    /// 0 – 100
    pub score: i64,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub strategic_positioning: String,
    pub quantified_achievements: Vec<String>,
    pub sub_scores: SubScores,
}

impl CvAnalysis {
    pub fn shape() -> Shape {
        Shape::new()
            .integer("score")
            .string("summary")
            .string_list("strengths")
            .string_list("weaknesses")
            .string("strategic_positioning")
            .string_list("quantified_achievements")
            .object(
                "sub_scores",
                Shape::new()
                    .integer("leadership")
                    .string("leadership_rationale")
                    .integer("impact")
                    .string("impact_rationale")
                    .integer("communication")
                    .string("communication_rationale"),
            )
    }
}

/// CV compared against one specific job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub match_score: i64,
    pub missing_critical_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

impl SkillGapAnalysis {
    pub fn shape() -> Shape {
        Shape::new()
            .integer("match_score")
            .string_list("missing_critical_skills")
            .string_list("recommendations")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_cv_analysis_deserializes() {
        let analysis: CvAnalysis = serde_json::from_value(CvAnalysis::shape().default_value()).unwrap();
        assert_eq!(analysis.score, 0);
        assert!(analysis.strengths.is_empty());
        assert_eq!(analysis.sub_scores.leadership, 0);
        assert_eq!(analysis.sub_scores.communication_rationale, "");
    }

    #[test]
    fn test_partial_sub_scores_are_completed() {
        let filled = CvAnalysis::shape().backfill(&json!({
            "score": 70,
            "sub_scores": { "leadership": 88 }
        }));
        let analysis: CvAnalysis = serde_json::from_value(filled).unwrap();
        assert_eq!(analysis.sub_scores.leadership, 88);
        assert_eq!(analysis.sub_scores.impact, 0);
    }

    #[test]
    fn test_skill_gap_shape_matches_record() {
        let gap: SkillGapAnalysis =
            serde_json::from_value(SkillGapAnalysis::shape().default_value()).unwrap();
        assert_eq!(gap.match_score, 0);
        assert!(gap.recommendations.is_empty());
    }
}
