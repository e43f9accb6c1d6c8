//! The structured success/error envelope every handler returns.
//!
//! Tool calls and resource reads never surface raised faults to the client;
//! the outcome of an operation is always one of these two JSON shapes:
//!
//! - `{"success": true}` or `{"success": true, "data": <result>}`
//! - `{"error": "<message>"}`

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Structured response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Envelope {
    /// Successful operation, with an optional data payload.
    Success {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<JsonValue>,
    },
    /// Failed operation, reported as data rather than a protocol fault.
    Error { error: String },
}

impl Envelope {
    /// Wrap a serializable result. A null result becomes a bare
    /// `{"success": true}`; a serialization failure becomes an error envelope.
    pub fn success<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(JsonValue::Null) => Self::empty(),
            Ok(value) => Self::Success {
                success: true,
                data: Some(value),
            },
            Err(err) => Self::error(format!("Failed to serialize response: {}", err)),
        }
    }

    /// A success envelope with no data payload.
    pub fn empty() -> Self {
        Self::Success {
            success: true,
            data: None,
        }
    }

    /// An error envelope with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The data payload, if this is a success envelope carrying one.
    pub fn data(&self) -> Option<&JsonValue> {
        match self {
            Self::Success { data, .. } => data.as_ref(),
            Self::Error { .. } => None,
        }
    }

    /// The error message, if this is an error envelope.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { error } => Some(error),
            Self::Success { .. } => None,
        }
    }

    /// Serialize the envelope to a JSON string (used for resource contents).
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }
}
