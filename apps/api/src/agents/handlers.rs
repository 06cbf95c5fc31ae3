//! Axum route handlers for the Agents API.
//!
//! Every handler registers its request id for cancellation, runs one gateway call,
//! records the outcome in the activity feed and echoes the id back.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activity::AgentName;
use crate::agents::comms::{self, RecruiterTarget, SignatureProfile, DEFAULT_DISCLAIMER};
use crate::agents::due_diligence::{self, DEFAULT_INDUSTRY};
use crate::agents::{cv_analyst, opportunity_miner, strategist};
use crate::errors::AppError;
use crate::gateway::StructuredResponse;
use crate::models::cv::{CvAnalysis, SkillGapAnalysis};
use crate::models::dossier::CompanyDossier;
use crate::models::opportunity::OpportunityAnalysis;
use crate::models::outreach::{EmailSignatures, OutreachSequence};
use crate::models::strategy::{MorningBriefing, PipelineMetrics, StrategyBrief};
use crate::requests::RequestGuard;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AgentResponse<T> {
    pub request_id: Uuid,
    pub result: StructuredResponse<T>,
}

#[derive(Debug, Deserialize)]
pub struct CvAnalysisRequest {
    pub cv_text: String,
    pub request_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub cv_text: String,
    pub job_description: String,
    pub request_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct OpportunityRequest {
    pub job_description: String,
    pub candidate_summary: String,
    pub request_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct OutreachRequest {
    #[serde(flatten)]
    pub target: RecruiterTarget,
    /// Defaults to a one-line summary of the stored profile.
    pub cv_highlights: Option<String>,
    pub request_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CampaignStrategyRequest {
    pub metrics: PipelineMetrics,
    pub request_id: Option<Uuid>,
}

/// Every field is optional; blanks are filled from the stored profile.
#[derive(Debug, Deserialize)]
pub struct EmailSignatureRequest {
    #[serde(flatten)]
    pub profile: SignatureProfile,
    pub request_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct DossierRequest {
    pub company_name: String,
    pub industry: Option<String>,
    pub request_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct MorningBriefingRequest {
    pub profile_name: Option<String>,
    pub active_opportunities: u32,
    pub request_id: Option<Uuid>,
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn register(state: &AppState, request_id: Option<Uuid>) -> Result<RequestGuard, AppError> {
    state
        .pending
        .register(request_id.unwrap_or_else(Uuid::new_v4))
}

fn respond<T>(
    state: &AppState,
    guard: RequestGuard,
    agent: AgentName,
    task: &str,
    result: StructuredResponse<T>,
) -> Json<AgentResponse<T>> {
    state.activity.record_outcome(agent, task, &result);
    Json(AgentResponse {
        request_id: guard.id(),
        result,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/agents/cv-analysis
pub async fn handle_cv_analysis(
    State(state): State<AppState>,
    Json(request): Json<CvAnalysisRequest>,
) -> Result<Json<AgentResponse<CvAnalysis>>, AppError> {
    require("cv_text", &request.cv_text)?;
    let guard = register(&state, request.request_id)?;

    let result = cv_analyst::analyze_cv(&state.gateway, &request.cv_text, guard.token()).await;

    Ok(respond(&state, guard, AgentName::CvAnalyst, "CV analysis", result))
}

/// POST /api/v1/agents/skill-gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<AgentResponse<SkillGapAnalysis>>, AppError> {
    require("cv_text", &request.cv_text)?;
    require("job_description", &request.job_description)?;
    let guard = register(&state, request.request_id)?;

    let result = cv_analyst::analyze_skill_gap(
        &state.gateway,
        &request.cv_text,
        &request.job_description,
        guard.token(),
    )
    .await;

    Ok(respond(&state, guard, AgentName::CvAnalyst, "Skill gap analysis", result))
}

/// POST /api/v1/agents/opportunity
pub async fn handle_opportunity(
    State(state): State<AppState>,
    Json(request): Json<OpportunityRequest>,
) -> Result<Json<AgentResponse<OpportunityAnalysis>>, AppError> {
    require("job_description", &request.job_description)?;
    require("candidate_summary", &request.candidate_summary)?;
    let guard = register(&state, request.request_id)?;

    let result = opportunity_miner::analyze_opportunity(
        &state.gateway,
        &request.job_description,
        &request.candidate_summary,
        guard.token(),
    )
    .await;

    Ok(respond(
        &state,
        guard,
        AgentName::OpportunityMiner,
        "Opportunity analysis",
        result,
    ))
}

/// POST /api/v1/agents/outreach
pub async fn handle_outreach(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<AgentResponse<OutreachSequence>>, AppError> {
    require("recruiter_name", &request.target.recruiter_name)?;
    require("company", &request.target.company)?;
    let guard = register(&state, request.request_id)?;

    let cv_highlights = match request.cv_highlights.filter(|h| !h.trim().is_empty()) {
        Some(highlights) => highlights,
        None => {
            let profile = state.profiles.load_profile().await;
            format!(
                "{}, specialized in {}, looking for {}.",
                profile.title, profile.industries, profile.target_role
            )
        }
    };

    let result = comms::generate_outreach_sequence(
        &state.gateway,
        &request.target,
        &cv_highlights,
        guard.token(),
    )
    .await;

    Ok(respond(
        &state,
        guard,
        AgentName::CommsOrchestrator,
        "Outreach sequence",
        result,
    ))
}

/// POST /api/v1/agents/campaign-strategy
pub async fn handle_campaign_strategy(
    State(state): State<AppState>,
    Json(request): Json<CampaignStrategyRequest>,
) -> Result<Json<AgentResponse<StrategyBrief>>, AppError> {
    let guard = register(&state, request.request_id)?;

    let result =
        strategist::generate_campaign_strategy(&state.gateway, &request.metrics, guard.token())
            .await;

    Ok(respond(
        &state,
        guard,
        AgentName::CampaignStrategist,
        "Campaign strategy",
        result,
    ))
}

/// POST /api/v1/agents/email-signature
pub async fn handle_email_signature(
    State(state): State<AppState>,
    Json(request): Json<EmailSignatureRequest>,
) -> Result<Json<AgentResponse<EmailSignatures>>, AppError> {
    let guard = register(&state, request.request_id)?;

    let stored = state.profiles.load_profile().await;
    let mut profile = request.profile;
    for (field, default) in [
        (&mut profile.name, stored.name),
        (&mut profile.role, stored.title),
        (&mut profile.company, stored.company),
        (&mut profile.phone, stored.phone),
        (&mut profile.email, stored.email),
        (&mut profile.website, stored.website),
        (&mut profile.disclaimer, DEFAULT_DISCLAIMER.to_string()),
    ] {
        if field.trim().is_empty() {
            *field = default;
        }
    }

    let result = comms::generate_email_signature(&state.gateway, &profile, guard.token()).await;

    Ok(respond(
        &state,
        guard,
        AgentName::CommsOrchestrator,
        "Email signature design",
        result,
    ))
}

/// POST /api/v1/agents/dossier
///
/// Search-grounded; typically the slowest agent call.
pub async fn handle_dossier(
    State(state): State<AppState>,
    Json(request): Json<DossierRequest>,
) -> Result<Json<AgentResponse<CompanyDossier>>, AppError> {
    require("company_name", &request.company_name)?;
    let guard = register(&state, request.request_id)?;

    let industry = request
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_INDUSTRY);

    let result = due_diligence::generate_company_dossier(
        &state.gateway,
        request.company_name.trim(),
        industry,
        guard.token(),
    )
    .await;

    Ok(respond(
        &state,
        guard,
        AgentName::DueDiligence,
        "Company dossier",
        result,
    ))
}

/// POST /api/v1/agents/morning-briefing
pub async fn handle_morning_briefing(
    State(state): State<AppState>,
    Json(request): Json<MorningBriefingRequest>,
) -> Result<Json<AgentResponse<MorningBriefing>>, AppError> {
    let guard = register(&state, request.request_id)?;

    let profile_name = match request.profile_name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name,
        None => state.profiles.load_profile().await.name,
    };

    let result = strategist::generate_morning_briefing(
        &state.gateway,
        &profile_name,
        request.active_opportunities,
        guard.token(),
    )
    .await;

    Ok(respond(
        &state,
        guard,
        AgentName::CampaignStrategist,
        "Morning briefing",
        result,
    ))
}
