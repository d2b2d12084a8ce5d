use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::{Content, ResponseChunk};

/// Model label stamped on every converted interaction unless overridden
pub const DEFAULT_MODEL_LABEL: &str = "claude-sonnet-4-5-20250929";

/// Event name of the request half of an interaction
pub const REQUEST_EVENT_NAME: &str = "claude.api_request";

/// Auth method label of the response half of an interaction
pub const AUTH_TYPE: &str = "claude-api-key";

pub const STATUS_OK: u16 = 200;

/// Separator between session id and ordinal in a prompt id
pub const PROMPT_ID_SEPARATOR: &str = "########";

/// Build the prompt id of the `ordinal`-th interaction of a session
pub fn prompt_id(session_id: &str, ordinal: usize) -> String {
    format!("{}{}{}", session_id, PROMPT_ID_SEPARATOR, ordinal)
}

/// One user turn paired with the assistant output that followed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub request: ApiRequest,
    pub response: ApiResponse,
    /// Always null for converted sessions
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiRequest {
    #[serde(rename = "session.id")]
    pub session_id: String,
    #[serde(rename = "event.name")]
    pub event_name: String,
    #[serde(rename = "event.timestamp")]
    pub timestamp: String,
    pub model: String,
    pub prompt_id: String,
    pub request_text: Vec<Content>,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl ApiRequest {
    /// Text of the first part of the last user-role content, if any
    pub fn prompt_text(&self) -> Option<&str> {
        self.request_text
            .iter()
            .rev()
            .find(|c| c.role == crate::Role::User)
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    #[serde(rename = "session.id")]
    pub session_id: String,
    pub model: String,
    pub status_code: u16,
    pub duration_ms: u64,
    pub input_token_count: u64,
    pub output_token_count: u64,
    pub total_token_count: u64,
    pub response_text: Vec<ResponseChunk>,
    pub prompt_id: String,
    pub auth_type: String,
    #[serde(rename = "event.timestamp")]
    pub timestamp: String,
}

impl Interaction {
    /// Pair a finished request with its response fragments.
    ///
    /// The response inherits session id, model, prompt id, timestamp and
    /// token counters from the request.
    pub fn finalize(request: ApiRequest, response_text: Vec<ResponseChunk>) -> Self {
        let response = ApiResponse {
            session_id: request.session_id.clone(),
            model: request.model.clone(),
            status_code: STATUS_OK,
            duration_ms: 0,
            input_token_count: request.input_tokens,
            output_token_count: request.output_tokens,
            total_token_count: request.input_tokens.saturating_add(request.output_tokens),
            response_text,
            prompt_id: request.prompt_id.clone(),
            auth_type: AUTH_TYPE.to_string(),
            timestamp: request.timestamp.clone(),
        };

        Self {
            request,
            response,
            error: None,
        }
    }
}
