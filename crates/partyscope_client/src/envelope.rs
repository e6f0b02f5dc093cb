//! Response envelope of the remote party service.

use serde::Deserialize;
use serde_json::Value;

/// Fallback message when the remote flags a failure without explaining it.
pub const GENERIC_REMOTE_ERROR: &str = "API returned error";

/// Loosely-typed envelope returned by the remote service:
/// `{resultCd: bool, message?: string, data?: object|array}`.
///
/// `resultCd` is kept as a raw JSON value: the remote signals success only
/// with boolean `true`, and anything else (missing, `"true"`, `1`, `false`)
/// is a business-level failure rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEnvelope {
    /// Business-level result code, orthogonal to HTTP status
    #[serde(rename = "resultCd")]
    pub result_cd: Option<Value>,
    /// Message accompanying a failure
    pub message: Option<String>,
    /// Payload: object for lookup, array for search
    pub data: Option<Value>,
}

impl RemoteEnvelope {
    /// Whether the remote reported business-level success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.result_cd, Some(Value::Bool(true)))
    }

    /// Failure message, falling back to [`GENERIC_REMOTE_ERROR`].
    #[must_use]
    pub fn error_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| GENERIC_REMOTE_ERROR.to_string())
    }
}
