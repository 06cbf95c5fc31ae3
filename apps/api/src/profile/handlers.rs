//! Axum route handlers for the Profile and Settings API.

use axum::{extract::State, Json};
use tracing::info;

use crate::activity::{AgentName, LogStatus};
use crate::errors::AppError;
use crate::profile::validation::validate_settings;
use crate::profile::{AppSettings, UserProfile};
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.profiles.load_profile().await)
}

/// PUT /api/v1/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    state.profiles.save_profile(profile.clone()).await;
    info!(name = %profile.name, "Profile updated");
    state.activity.push(
        AgentName::CampaignStrategist,
        "Executive profile and targeting parameters updated",
        LogStatus::Info,
    );

    Ok(Json(profile))
}

/// GET /api/v1/settings
pub async fn handle_get_settings(State(state): State<AppState>) -> Json<AppSettings> {
    Json(state.profiles.load_settings().await)
}

/// PUT /api/v1/settings
///
/// Rejects the whole update if any rule is broken; the message lists every violation.
pub async fn handle_put_settings(
    State(state): State<AppState>,
    Json(settings): Json<AppSettings>,
) -> Result<Json<AppSettings>, AppError> {
    let violations = validate_settings(&settings);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations.join("; ")));
    }

    let previous = state.profiles.save_settings(settings.clone()).await;
    info!("Settings updated");

    if previous.ghost_mode != settings.ghost_mode {
        let (verb, status) = if settings.ghost_mode {
            ("ACTIVATED", LogStatus::Warning)
        } else {
            ("DEACTIVATED", LogStatus::Info)
        };
        state.activity.push(
            AgentName::CampaignStrategist,
            format!("Stealth protocol (Ghost Mode) {verb}"),
            status,
        );
    }

    Ok(Json(settings))
}
