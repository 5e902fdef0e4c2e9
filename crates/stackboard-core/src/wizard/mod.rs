//! Chat wizard that fronts the remote typing service.
//!
//! - `api`: JSON bodies and the `TypingApi` trait implemented by transports
//! - `state`: the view state machine and its error classes

mod api;
mod state;

pub use api::{
    AnswerOutcome, AnswerRequest, ApiFailure, CompleteSessionRequest, Question,
    StartSessionRequest, StartSessionResponse, TypingApi, TypingResult,
};
pub use state::{ChatWizard, WizardError, WizardView};
