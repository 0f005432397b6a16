//! Test doubles for the fetch service

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::error::FetchError;
use crate::transport::Transport;

/// Transport that replays canned responses in request order
///
/// `Err(status)` entries become [`FetchError::Status`].
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<String, u16>>>,
    fallback: Option<String>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new<const N: usize>(responses: [Result<&str, u16>; N]) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
            ),
            fallback: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with the same body
    pub fn always(body: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: Some(body.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());

        let next = self.responses.lock().unwrap().pop_front();
        let response = match next {
            Some(response) => response,
            None => self.fallback.clone().ok_or(404),
        };

        response.map_err(|status| FetchError::Status {
            url: url.to_string(),
            status,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Diagnostic {
    pub level: Level,
    pub op: Option<String>,
    pub url: Option<String>,
    pub message: String,
}

/// Layer that records every event for later inspection
#[derive(Clone, Default)]
pub(crate) struct Diagnostics {
    events: Arc<Mutex<Vec<Diagnostic>>>,
}

impl Diagnostics {
    /// Capture events on the current thread until the guard drops
    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn warnings_for(&self, op: &str) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.level == Level::WARN && d.op.as_deref() == Some(op))
            .cloned()
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for Diagnostics {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = DiagnosticVisitor::default();
        event.record(&mut visitor);

        self.events.lock().unwrap().push(Diagnostic {
            level: *event.metadata().level(),
            op: visitor.op,
            url: visitor.url,
            message: visitor.message,
        });
    }
}

#[derive(Default)]
struct DiagnosticVisitor {
    op: Option<String>,
    url: Option<String>,
    message: String,
}

impl Visit for DiagnosticVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "op" => self.op = Some(value.to_string()),
            "url" => self.url = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "op" => self.op = Some(format!("{:?}", value)),
            "message" => self.message = format!("{:?}", value),
            _ => {}
        }
    }
}
