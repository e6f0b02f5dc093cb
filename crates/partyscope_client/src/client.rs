//! Outbound request construction and response classification.

use serde_json::Value;

use partyscope_core::{SearchQuery, ToolError, ToolResult};

use crate::config::ApiConfig;
use crate::envelope::RemoteEnvelope;

/// Longest composite status/body message surfaced for an HTTP error.
const MAX_ERROR_BODY_LEN: usize = 300;

/// Client for the remote sanctioned-party lookup service.
///
/// Every call is a single best-effort round trip: one attempt, the
/// configured timeout, and a connection owned by that call alone. Nothing is
/// cached, retried, or shared between invocations.
#[derive(Debug, Clone)]
pub struct PartyClient {
    config: ApiConfig,
}

impl PartyClient {
    /// Client issuing requests to the configured endpoints.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// The configuration this client was constructed with.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches a single party record by identifier.
    ///
    /// The identifier is forwarded as its decimal string; absent payloads
    /// collapse to an empty object.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the round trip.
    pub async fn get_party_info(&self, party_id: i64) -> ToolResult<Value> {
        let params = [("partyId", party_id.to_string())];
        let data = self.execute(&self.config.api_endpoint, &params).await?;
        Ok(data.unwrap_or_else(|| Value::Object(serde_json::Map::new())))
    }

    /// Runs a validated search; absent payloads collapse to an empty list.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the round trip.
    pub async fn search(&self, query: &SearchQuery) -> ToolResult<Value> {
        let params = query.query_pairs();
        let data = self.execute(&self.config.search_endpoint, &params).await?;
        Ok(data.unwrap_or_else(|| Value::Array(Vec::new())))
    }

    /// One GET round trip against `endpoint`, classified per the taxonomy:
    /// non-2xx status, transport fault, business failure, success, or
    /// unexpected fault, in that order.
    async fn execute(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> ToolResult<Option<Value>> {
        tracing::debug!(endpoint, ?params, "issuing remote query");

        // A fresh client per invocation: the connection is opened, used, and
        // released within this call, never pooled across calls.
        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|err| ToolError::internal(err.to_string()))?;

        let response = client
            .get(endpoint)
            .query(&params)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ToolError::internal(err.to_string()))?;

        if !status.is_success() {
            return Err(ToolError::RemoteHttp {
                status: status.as_u16(),
                message: http_error_message(status.as_u16(), &body),
            });
        }

        let envelope: RemoteEnvelope =
            serde_json::from_str(&body).map_err(|err| ToolError::internal(err.to_string()))?;

        if !envelope.is_success() {
            return Err(ToolError::RemoteBusiness {
                message: envelope.error_message(),
            });
        }

        Ok(envelope.data)
    }
}

/// Maps a failed send into the taxonomy. Anything that never produced a
/// response (connection refused, DNS failure, timeout) is a transport
/// error; a request that could not even be constructed is an internal one.
fn classify_send_error(err: reqwest::Error) -> ToolError {
    if err.is_builder() {
        ToolError::internal(err.to_string())
    } else {
        ToolError::RemoteTransport {
            message: err.to_string(),
        }
    }
}

/// Human-readable message for a non-2xx response: the body's JSON `message`
/// field when present, otherwise a status/body composite truncated to
/// [`MAX_ERROR_BODY_LEN`] characters.
fn http_error_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = fields.get("message") {
            return message.clone();
        }
        return format!("API Error: {status}");
    }
    truncate(&format!("API Error: {status} - {body}"), MAX_ERROR_BODY_LEN)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
