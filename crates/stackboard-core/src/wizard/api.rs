//! Request and response shapes for the remote typing service.
//!
//! The service itself is an external collaborator; this module only fixes
//! the JSON bodies and the trait the wizard talks through.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::stack::{PersonalityType, Stack, Variant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub access_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    pub question: Question,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub session_id: String,
    pub question_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteSessionRequest {
    pub session_id: String,
    /// Type the user already believes they are, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_type: Option<String>,
}

/// Final reading returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingResult {
    pub type_code: String,
    #[serde(default)]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub summary: String,
}

impl TypingResult {
    /// Stack for the board shown on the results page.
    pub fn stack(&self) -> Result<Stack> {
        let personality_type = PersonalityType::parse(&self.type_code)?;
        Ok(Stack::for_type(
            personality_type,
            self.variant.unwrap_or_default(),
        ))
    }
}

/// What the service wants next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// Another conversational question.
    Question { question: Question },
    /// Ask whether the user already knows their type.
    KnownType { prompt: String },
    /// The session is finished.
    Complete { result: TypingResult },
}

/// Transport-level failure reported by a `TypingApi` implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    #[error("network failure: {0}")]
    Network(String),
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },
}

/// The remote typing service.
#[async_trait]
pub trait TypingApi: Send + Sync {
    async fn start_session(
        &self,
        request: &StartSessionRequest,
    ) -> std::result::Result<StartSessionResponse, ApiFailure>;

    async fn submit_answer(
        &self,
        request: &AnswerRequest,
    ) -> std::result::Result<AnswerOutcome, ApiFailure>;

    async fn complete_session(
        &self,
        request: &CompleteSessionRequest,
    ) -> std::result::Result<AnswerOutcome, ApiFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_wire_format() {
        let outcome: AnswerOutcome = serde_json::from_str(
            r#"{"status":"complete","result":{"type_code":"infp","variant":"jumper"}}"#,
        )
        .unwrap();
        let AnswerOutcome::Complete { result } = outcome else {
            panic!("expected completion");
        };
        assert_eq!(result.summary, "");
        let stack = result.stack().unwrap();
        assert!(stack.is_jumper());
    }

    #[test]
    fn test_complete_request_omits_unknown_type() {
        let body = serde_json::to_value(CompleteSessionRequest {
            session_id: "s1".into(),
            known_type: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "session_id": "s1" }));
    }

    #[test]
    fn test_result_with_bad_type_code() {
        let result = TypingResult {
            type_code: "XXXX".into(),
            variant: None,
            summary: String::new(),
        };
        assert!(result.stack().unwrap_err().is_unknown_type());
    }
}
