use serde::{Deserialize, Serialize};

use crate::gateway::shape::Shape;
use crate::gateway::transport::GroundingSource;
use crate::models::UNKNOWN;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestions {
    pub expected_from_ceo: Vec<String>,
    pub to_ask_ceo: Vec<String>,
}

/// Search-grounded due-diligence dossier on one company.
///
/// `sources` is not part of the shape: the gateway attaches the search citations
/// after back-fill, so the list is present (possibly empty) on every live result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDossier {
    pub company_name: String,
    pub market_cap: String,
    pub headquarters: String,
    pub executive_summary: String,
    pub key_challenges: Vec<String>,
    pub strategic_opportunities: Vec<String>,
    pub culture_analysis: String,
    pub interview_questions: InterviewQuestions,
    #[serde(default)]
    pub sources: Vec<GroundingSource>,
}

impl CompanyDossier {
    /// `company_name` is the default for the `companyName` field.
    pub fn shape(company_name: &str) -> Shape {
        Shape::new()
            .string_or("companyName", company_name)
            .string_or("marketCap", UNKNOWN)
            .string_or("headquarters", UNKNOWN)
            .string_or("executiveSummary", "No data available.")
            .string_list("keyChallenges")
            .string_list("strategicOpportunities")
            .string_or("cultureAnalysis", "No culture data found.")
            .object(
                "interviewQuestions",
                Shape::new()
                    .string_list("expected_from_ceo")
                    .string_list("to_ask_ceo"),
            )
    }
}
