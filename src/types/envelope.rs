//! Uniform tool result shapes.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AppError;

/// Error payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    /// Human-readable message.
    pub error: String,
    /// Upstream HTTP status, when the failure came from the API.
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Result of a tool call.
///
/// A success carries a JSON object with at least `statusCode` and `data`; an
/// error carries `{error, statusCode?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseEnvelope {
    Success(Value),
    Error(ErrorPayload),
}

impl ResponseEnvelope {
    /// Wrap data under the given status.
    pub fn success(status: u16, data: Value) -> Self {
        ResponseEnvelope::Success(json!({ "statusCode": status, "data": data }))
    }

    /// Error envelope for an application error.
    pub fn from_error(err: &AppError) -> Self {
        ResponseEnvelope::Error(ErrorPayload {
            error: err.to_string(),
            status_code: err.status_code(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseEnvelope::Error(_))
    }

    /// Status code of the envelope, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ResponseEnvelope::Success(body) => {
                body.get("statusCode").and_then(Value::as_u64).and_then(|s| u16::try_from(s).ok())
            }
            ResponseEnvelope::Error(payload) => payload.status_code,
        }
    }

    /// Convert into a plain JSON value.
    pub fn into_value(self) -> Value {
        match self {
            ResponseEnvelope::Success(body) => body,
            ResponseEnvelope::Error(payload) => {
                serde_json::to_value(payload).unwrap_or_else(|_| Value::Null)
            }
        }
    }
}
