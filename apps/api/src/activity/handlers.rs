use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::activity::AgentLog;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub limit: Option<usize>,
}

/// GET /api/v1/activity
///
/// Recent agent activity, newest first. `limit` defaults to the feed capacity.
pub async fn handle_list_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Json<Vec<AgentLog>> {
    let limit = query.limit.unwrap_or_else(|| state.activity.capacity());
    Json(state.activity.recent(limit))
}
