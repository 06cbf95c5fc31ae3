//! Test doubles shared by gateway, agent and route tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use crate::gateway::transport::{
    GenerativeTransport, GroundingSource, TransportError, TransportRequest, TransportResponse,
};

type Reply = Box<dyn Fn(&TransportRequest) -> Result<TransportResponse, TransportError> + Send + Sync>;

/// Scripted transport. Records every request it receives and can flip a
/// cancellation token mid-call to simulate a user cancelling an in-flight request.
pub(crate) struct StubTransport {
    reply: Reply,
    requests: Mutex<Vec<TransportRequest>>,
    cancel_on_call: Mutex<Option<CancellationToken>>,
}

impl StubTransport {
    pub(crate) fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
            cancel_on_call: Mutex::new(None),
        })
    }

    pub(crate) fn text(text: &str) -> Arc<Self> {
        Self::grounded(text, Vec::new())
    }

    pub(crate) fn grounded(text: &str, sources: Vec<GroundingSource>) -> Arc<Self> {
        let text = text.to_string();
        Self::new(Box::new(move |_| {
            Ok(TransportResponse {
                text: text.clone(),
                sources: sources.clone(),
            })
        }))
    }

    pub(crate) fn failing() -> Arc<Self> {
        Self::new(Box::new(|_| {
            Err(TransportError::Api {
                status: 503,
                message: "The model is overloaded".to_string(),
            })
        }))
    }

    pub(crate) fn cancelling(self: Arc<Self>, token: CancellationToken) -> Arc<Self> {
        *self.cancel_on_call.lock().unwrap() = Some(token);
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerativeTransport for StubTransport {
    async fn generate(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(token) = self.cancel_on_call.lock().unwrap().as_ref() {
            token.cancel();
        }
        (self.reply)(request)
    }
}

#[derive(Clone, Default)]
pub(crate) struct WarningCount(Arc<AtomicUsize>);

impl WarningCount {
    pub(crate) fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

struct WarnCounter(WarningCount);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            (self.0).0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Installs a thread-local subscriber that counts WARN events until the guard drops.
pub(crate) fn capture_warnings() -> (tracing::subscriber::DefaultGuard, WarningCount) {
    let count = WarningCount::default();
    let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
    (tracing::subscriber::set_default(subscriber), count)
}
