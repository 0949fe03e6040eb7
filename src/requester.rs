//! One click, one request, one rendered outcome.
//!
//! [`SummaryRequester::activate`] reads the input, flips the view into its
//! loading state, calls the service and renders the result or the error. The
//! progress indicator is hidden when the cycle ends, however it ends.
//!
//! Activations are not serialised. Two overlapping cycles write to the same
//! view, the last reply to settle decides the result text, and the first cycle
//! to finish hides the progress indicator.

use crate::client::SummaryService;
use crate::summary::{self, Summary, SummarizeError, SummarizeRequest};
use crate::view::{PopupView, UiState};
use scopeguard::defer;
use std::sync::Arc;
use tracing::{info, warn};

/// Result text while a request is in flight
pub const PLACEHOLDER: &str = "Generating summary...";

pub type Outcome = Result<Summary, SummarizeError>;

impl From<&Outcome> for UiState {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Ok(summary) => UiState::Success(summary.text.clone()),
            Err(err) => UiState::Error(err.to_string()),
        }
    }
}

pub struct SummaryRequester<S, V> {
    service: Arc<S>,
    view: Arc<V>,
}

// Manual impl: cloning shares the service and view, no bounds on S or V needed.
impl<S, V> Clone for SummaryRequester<S, V> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            view: Arc::clone(&self.view),
        }
    }
}

impl<S, V> SummaryRequester<S, V>
where
    S: SummaryService,
    V: PopupView,
{
    pub fn new(service: Arc<S>, view: Arc<V>) -> Self {
        Self { service, view }
    }

    pub fn view(&self) -> &Arc<V> {
        &self.view
    }

    /// Run one full cycle against the view.
    pub async fn activate(&self) -> Outcome {
        let video_id = self.view.input_value();
        info!(video_id = %video_id, "summary requested");

        self.view.set_result_visible(false);
        self.view.set_progress_visible(true);
        self.view.set_result_text(PLACEHOLDER);

        // Runs on return, panic, or when the cycle is dropped mid-flight.
        defer! {
            self.view.set_progress_visible(false);
        }

        let outcome = self.fetch(video_id).await;
        match &outcome {
            Ok(summary) => info!(chars = summary.text.len(), "summary received"),
            Err(err) => warn!(error = %err, "summary failed"),
        }

        if let Some(text) = UiState::from(&outcome).result_text() {
            self.view.set_result_text(text);
            self.view.set_result_visible(true);
        }

        outcome
    }

    async fn fetch(&self, video_id: String) -> Outcome {
        let reply = self
            .service
            .summarize(&SummarizeRequest::new(video_id))
            .await?;
        summary::interpret(&reply)
    }
}
