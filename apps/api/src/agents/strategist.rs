//! Campaign Strategist — weekly plan from pipeline metrics, and the morning briefing.

use tokio_util::sync::CancellationToken;

use crate::agents::fallbacks;
use crate::agents::prompts::{render, CAMPAIGN_STRATEGY_PROMPT, MORNING_BRIEFING_PROMPT};
use crate::gateway::{Operation, StructuredRequest, StructuredResponse, StructuredResponseGateway};
use crate::models::strategy::{MorningBriefing, PipelineMetrics, StrategyBrief};

pub async fn generate_campaign_strategy(
    gateway: &StructuredResponseGateway,
    metrics: &PipelineMetrics,
    cancel: &CancellationToken,
) -> StructuredResponse<StrategyBrief> {
    let metrics_json = serde_json::to_string(metrics).unwrap_or_else(|_| "{}".to_string());
    let prompt = render(
        CAMPAIGN_STRATEGY_PROMPT,
        &[("metrics_json", metrics_json.as_str())],
    );
    let request = StructuredRequest::new(Operation::CampaignStrategy, prompt, StrategyBrief::shape());
    gateway
        .execute(request, fallbacks::campaign_strategy(), cancel)
        .await
}

pub async fn generate_morning_briefing(
    gateway: &StructuredResponseGateway,
    profile_name: &str,
    active_opportunities: u32,
    cancel: &CancellationToken,
) -> StructuredResponse<MorningBriefing> {
    let active_opportunities_text = active_opportunities.to_string();
    let prompt = render(
        MORNING_BRIEFING_PROMPT,
        &[
            ("profile_name", profile_name),
            ("active_opportunities", active_opportunities_text.as_str()),
        ],
    );
    let request =
        StructuredRequest::new(Operation::MorningBriefing, prompt, MorningBriefing::shape());
    gateway
        .execute(
            request,
            fallbacks::morning_briefing(profile_name, active_opportunities),
            cancel,
        )
        .await
}
