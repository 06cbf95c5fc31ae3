use serde::{Deserialize, Serialize};

use crate::gateway::shape::Shape;
use crate::models::UNKNOWN;

/// Pipeline health numbers the campaign strategist plans from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineMetrics {
    pub applications: u32,
    pub interviews: u32,
    /// Free text, e.g. "12%".
    #[serde(alias = "response_rate")]
    pub response_rate: String,
}

/// Weekly campaign plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyBrief {
    pub focus_of_the_week: String,
    pub top_priorities: Vec<String>,
    pub channel_strategy: String,
    pub success_probability: String,
}

impl StrategyBrief {
    pub fn shape() -> Shape {
        Shape::new()
            .string_or("focus_of_the_week", "Analyzing campaign data...")
            .string_list("top_priorities")
            .string_or("channel_strategy", "Pending...")
            .string_or("success_probability", UNKNOWN)
    }
}

/// Three-sentence morning briefing. Produced as plain text, not JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorningBriefing {
    pub briefing: String,
}

impl MorningBriefing {
    pub fn shape() -> Shape {
        Shape::new().string("briefing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_serialize_with_dashboard_field_names() {
        let metrics = PipelineMetrics {
            applications: 29,
            interviews: 4,
            response_rate: "12%".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&metrics).unwrap(),
            r#"{"applications":29,"interviews":4,"responseRate":"12%"}"#
        );
    }

    #[test]
    fn test_strategy_placeholders() {
        let brief: StrategyBrief =
            serde_json::from_value(StrategyBrief::shape().default_value()).unwrap();
        assert_eq!(brief.focus_of_the_week, "Analyzing campaign data...");
        assert_eq!(brief.channel_strategy, "Pending...");
        assert_eq!(brief.success_probability, "Unknown");
    }
}
