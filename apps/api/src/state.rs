use std::sync::Arc;

use crate::activity::ActivityFeed;
use crate::gateway::StructuredResponseGateway;
use crate::profile::ProfileStore;
use crate::requests::PendingRequests;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub gateway: StructuredResponseGateway,
    /// Pluggable profile persistence. Default: InMemoryProfileStore.
    pub profiles: Arc<dyn ProfileStore>,
    pub activity: Arc<ActivityFeed>,
    /// In-flight agent requests, for cancellation.
    pub pending: Arc<PendingRequests>,
}
