pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::activity::handlers as activity;
use crate::agents::handlers as agents;
use crate::profile::handlers as profile;
use crate::requests::handle_cancel_request;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Agents API
        .route(
            "/api/v1/agents/cv-analysis",
            post(agents::handle_cv_analysis),
        )
        .route("/api/v1/agents/skill-gap", post(agents::handle_skill_gap))
        .route(
            "/api/v1/agents/opportunity",
            post(agents::handle_opportunity),
        )
        .route("/api/v1/agents/outreach", post(agents::handle_outreach))
        .route(
            "/api/v1/agents/campaign-strategy",
            post(agents::handle_campaign_strategy),
        )
        .route(
            "/api/v1/agents/email-signature",
            post(agents::handle_email_signature),
        )
        .route("/api/v1/agents/dossier", post(agents::handle_dossier))
        .route(
            "/api/v1/agents/morning-briefing",
            post(agents::handle_morning_briefing),
        )
        .route("/api/v1/requests/:id", delete(handle_cancel_request))
        // Profile API
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_put_profile),
        )
        .route(
            "/api/v1/settings",
            get(profile::handle_get_settings).put(profile::handle_put_settings),
        )
        // Activity API
        .route("/api/v1/activity", get(activity::handle_list_activity))
        .with_state(state)
}
