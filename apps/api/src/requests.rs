//! In-flight agent requests, keyed by request id.
//!
//! Each agent call registers its id for as long as it runs. A client can cancel it
//! through `DELETE /api/v1/requests/:id`, and a second submission with the same id
//! is rejected while the first is still running.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Default)]
pub struct PendingRequests {
    inflight: Mutex<HashMap<Uuid, CancellationToken>>,
}

/// Registration handle. Dropping it forgets the request.
pub struct RequestGuard {
    id: Uuid,
    token: CancellationToken,
    registry: Arc<PendingRequests>,
}

impl PendingRequests {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn register(self: &Arc<Self>, id: Uuid) -> Result<RequestGuard, AppError> {
        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        if inflight.contains_key(&id) {
            return Err(AppError::Conflict(format!("Request {id} is already in flight")));
        }

        let token = CancellationToken::new();
        inflight.insert(id, token.clone());

        Ok(RequestGuard {
            id,
            token,
            registry: Arc::clone(self),
        })
    }

    /// Signals cancellation. Returns `false` when no such request is running.
    pub fn cancel(&self, id: &Uuid) -> bool {
        let inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        match inflight.get(id) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn contains(&self, id: &Uuid) -> bool {
        self.inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }
}

impl RequestGuard {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.registry
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

/// DELETE /api/v1/requests/:id
pub async fn handle_cancel_request(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.pending.cancel(&request_id) {
        return Err(AppError::NotFound(format!(
            "Request {request_id} is not in flight"
        )));
    }

    info!(%request_id, "Cancellation requested");
    Ok(StatusCode::NO_CONTENT)
}
