//! Normalized outcome envelope returned by every tool operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Two-variant result returned to the caller uniformly, regardless of
/// failure origin.
///
/// Wire shape: `{"status":"success","data":<payload>}` or
/// `{"status":"error","message":<string>}`. A caller cannot tell from the
/// shape alone whether an error came from validation, transport, the remote
/// service, or an unexpected fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Operation succeeded; payload is an object for lookup, a list for search
    Success {
        /// Payload reported by the remote service
        data: Value,
    },
    /// Operation failed for any reason
    Error {
        /// Human-readable failure message
        message: String,
    },
}

impl Outcome {
    /// Successful outcome with the given payload.
    #[must_use]
    pub fn success(data: Value) -> Self {
        Self::Success { data }
    }

    /// Failed outcome with the given message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Whether this is the success variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<ToolError> for Outcome {
    fn from(err: ToolError) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }
}

impl From<Result<Value, ToolError>> for Outcome {
    fn from(result: Result<Value, ToolError>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(err) => err.into(),
        }
    }
}
