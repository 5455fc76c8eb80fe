use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

use crate::{
    model::{
        lookup::{validate, LookupForm, LookupOutcome, ValidationError},
        region::Region,
        summoner::LookupResult,
    },
    service::gameapi::lookup_client::LookupClient,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    fn for_outcome(outcome: &LookupOutcome) -> Self {
        let kind = match outcome {
            LookupOutcome::Success { used_fallback: false, .. } => MessageKind::Success,
            LookupOutcome::Success { used_fallback: true, .. } => MessageKind::Warning,
            LookupOutcome::Failure { .. } => MessageKind::Error,
        };
        Self {
            text: outcome.message().to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Everything the presentation layer binds to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetState {
    pub phase: Phase,
    pub loading: bool,
    pub message: Option<Message>,
    pub result: Option<LookupResult>,
    /// Region the shown result was looked up in.
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A lookup is already in progress")]
    InFlight,
}

/// Single lookup widget. Owns its state, only its own submit path writes to it.
pub struct LookupWidget {
    client: LookupClient,
    state: watch::Sender<WidgetState>,
}

impl LookupWidget {
    pub fn new(client: LookupClient) -> Self {
        let (state, _) = watch::channel(WidgetState::default());
        Self { client, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> WidgetState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Validates and runs one lookup. Rejected while another lookup is in flight.
    pub async fn submit(&self, form: &LookupForm) -> Result<LookupOutcome, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::InFlight);
        }

        let request = match validate(form) {
            Ok(request) => request,
            Err(error) => {
                debug!(%error, "Rejected lookup form");
                self.state.send_modify(|s| s.message = Some(Message::error(error.to_string())));
                return Err(error.into());
            }
        };

        let started = self.state.send_if_modified(|s| {
            if s.loading {
                return false;
            }
            s.phase = Phase::Submitting;
            s.loading = true;
            s.message = None;
            s.result = None;
            s.region = None;
            true
        });
        if !started {
            return Err(SubmitError::InFlight);
        }

        let _loading = LoadingGuard { state: &self.state };
        let outcome = self.client.submit(&request).await;

        self.state.send_modify(|s| {
            s.phase = if outcome.is_success() { Phase::Succeeded } else { Phase::Failed };
            s.message = Some(Message::for_outcome(&outcome));
            s.result = outcome.result().cloned();
            s.region = s.result.as_ref().map(|_| request.region);
            s.loading = false;
        });

        Ok(outcome)
    }
}

/// Clears the loading flag however the submit future ends, including cancellation.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<WidgetState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|s| {
            if !s.loading {
                return false;
            }
            s.loading = false;
            s.phase = Phase::Failed;
            s.message = Some(Message::error("Lookup was interrupted"));
            true
        });
    }
}
