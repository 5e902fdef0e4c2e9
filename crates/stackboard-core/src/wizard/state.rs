//! Chat wizard view state machine.
//!
//! `Loading → CodeEntry → Conversation ⇄ AwaitingKnownType → Results`
//!
//! Every transition after `CodeEntry` is driven by a response from the
//! typing service. Failures are surfaced as a message; an expired session
//! returns the wizard to `CodeEntry`, a network failure keeps the current
//! view and allows a manual `retry`. Nothing is retried automatically.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::api::{
    AnswerOutcome, AnswerRequest, ApiFailure, CompleteSessionRequest, Question,
    StartSessionRequest, TypingApi, TypingResult,
};
use crate::stack::PersonalityType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum WizardView {
    Loading,
    CodeEntry,
    Conversation {
        session_id: String,
        question: Question,
    },
    AwaitingKnownType {
        session_id: String,
        prompt: String,
    },
    Results {
        result: TypingResult,
    },
}

impl WizardView {
    pub fn name(&self) -> &'static str {
        match self {
            WizardView::Loading => "loading",
            WizardView::CodeEntry => "code_entry",
            WizardView::Conversation { .. } => "conversation",
            WizardView::AwaitingKnownType { .. } => "awaiting_known_type",
            WizardView::Results { .. } => "results",
        }
    }
}

/// Errors surfaced by the wizard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Could not reach the server. Check your connection and try again.")]
    Network,

    #[error("Your session has expired. Please enter your code again.")]
    SessionExpired,

    #[error("The server returned an error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("'{0}' is not a known personality type")]
    UnknownType(String),

    #[error("Cannot {action} while in the {view} view")]
    InvalidState {
        action: &'static str,
        view: &'static str,
    },
}

impl WizardError {
    /// Whether the wizard drops the session and returns to code entry.
    pub fn resets_to_entry(&self) -> bool {
        matches!(self, WizardError::SessionExpired)
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, WizardError::Network)
    }
}

impl From<ApiFailure> for WizardError {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Network(_) => WizardError::Network,
            ApiFailure::Status { code: 404 | 410, .. } => WizardError::SessionExpired,
            ApiFailure::Status { code, message } => WizardError::Service {
                status: code,
                message,
            },
        }
    }
}

/// The last request sent, kept so a network failure can be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingRequest {
    Start(StartSessionRequest),
    Answer(AnswerRequest),
    Complete(CompleteSessionRequest),
}

impl PendingRequest {
    fn session_id(&self) -> Option<&str> {
        match self {
            PendingRequest::Start(_) => None,
            PendingRequest::Answer(r) => Some(&r.session_id),
            PendingRequest::Complete(r) => Some(&r.session_id),
        }
    }
}

pub struct ChatWizard<A: TypingApi> {
    api: A,
    view: WizardView,
    error: Option<WizardError>,
    pending: Option<PendingRequest>,
}

impl<A: TypingApi> ChatWizard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: WizardView::Loading,
            error: None,
            pending: None,
        }
    }

    pub fn view(&self) -> &WizardView {
        &self.view
    }

    /// Message to show the user for the last failure, if any.
    pub fn error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    pub fn can_retry(&self) -> bool {
        self.pending.is_some() && self.error.as_ref().is_some_and(WizardError::is_retryable)
    }

    /// Leaves `Loading` once the page is ready for input.
    pub fn ready(&mut self) {
        if self.view == WizardView::Loading {
            self.view = WizardView::CodeEntry;
        }
    }

    /// Abandons any session and returns to code entry.
    pub fn reset(&mut self) {
        self.view = WizardView::CodeEntry;
        self.error = None;
        self.pending = None;
    }

    pub async fn submit_code(&mut self, access_code: &str) -> Result<(), WizardError> {
        if self.view != WizardView::CodeEntry {
            return Err(self.invalid("submit a code"));
        }
        self.send(PendingRequest::Start(StartSessionRequest {
            access_code: access_code.trim().to_string(),
        }))
        .await
    }

    pub async fn answer(&mut self, answer: &str) -> Result<(), WizardError> {
        let WizardView::Conversation {
            session_id,
            question,
        } = &self.view
        else {
            return Err(self.invalid("answer"));
        };
        let request = AnswerRequest {
            session_id: session_id.clone(),
            question_id: question.id.clone(),
            answer: answer.to_string(),
        };
        self.send(PendingRequest::Answer(request)).await
    }

    /// Answers the known-type prompt. `None` means the user does not know.
    pub async fn submit_known_type(&mut self, known_type: Option<&str>) -> Result<(), WizardError> {
        let WizardView::AwaitingKnownType { session_id, .. } = &self.view else {
            return Err(self.invalid("submit a known type"));
        };
        let session_id = session_id.clone();

        let known_type = match known_type {
            Some(code) => match PersonalityType::parse(code) {
                Ok(ty) => Some(ty.to_string()),
                Err(_) => {
                    let err = WizardError::UnknownType(code.to_string());
                    self.error = Some(err.clone());
                    return Err(err);
                }
            },
            None => None,
        };

        self.send(PendingRequest::Complete(CompleteSessionRequest {
            session_id,
            known_type,
        }))
        .await
    }

    /// Replays the last request after a network failure.
    pub async fn retry(&mut self) -> Result<(), WizardError> {
        if !self.can_retry() {
            return Err(self.invalid("retry"));
        }
        match self.pending.clone() {
            Some(request) => self.send(request).await,
            None => Err(self.invalid("retry")),
        }
    }

    fn invalid(&self, action: &'static str) -> WizardError {
        WizardError::InvalidState {
            action,
            view: self.view.name(),
        }
    }

    async fn send(&mut self, request: PendingRequest) -> Result<(), WizardError> {
        self.pending = Some(request.clone());

        let next = match &request {
            PendingRequest::Start(r) => self
                .api
                .start_session(r)
                .await
                .map(|resp| WizardView::Conversation {
                    session_id: resp.session_id,
                    question: resp.question,
                }),
            PendingRequest::Answer(r) => self.api.submit_answer(r).await.map(|outcome| {
                Self::view_for(&r.session_id, outcome)
            }),
            PendingRequest::Complete(r) => self.api.complete_session(r).await.map(|outcome| {
                Self::view_for(&r.session_id, outcome)
            }),
        };

        match next {
            Ok(view) => {
                tracing::debug!(from = self.view.name(), to = view.name(), "wizard transition");
                self.view = view;
                self.error = None;
                self.pending = None;
                Ok(())
            }
            Err(failure) => {
                let err = WizardError::from(failure);
                tracing::warn!(
                    view = self.view.name(),
                    session_id = request.session_id().unwrap_or("-"),
                    error = %err,
                    "typing service request failed"
                );
                if err.resets_to_entry() {
                    self.view = WizardView::CodeEntry;
                    self.pending = None;
                }
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn view_for(session_id: &str, outcome: AnswerOutcome) -> WizardView {
        match outcome {
            AnswerOutcome::Question { question } => WizardView::Conversation {
                session_id: session_id.to_string(),
                question,
            },
            AnswerOutcome::KnownType { prompt } => WizardView::AwaitingKnownType {
                session_id: session_id.to_string(),
                prompt,
            },
            AnswerOutcome::Complete { result } => WizardView::Results { result },
        }
    }
}
