//! The two party-service tools: single lookup and parametric search.

use async_trait::async_trait;
use serde_json::{Value, json};

use partyscope_client::PartyClient;
use partyscope_core::{ErrorKind, Outcome, SearchParams, ToolError};

use crate::args;
use crate::trait_::Tool;

/// Fetches a single party record by identifier.
pub struct GetPartyInfo {
    client: PartyClient,
}

impl GetPartyInfo {
    /// Tool backed by the given client.
    #[must_use]
    pub fn new(client: PartyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetPartyInfo {
    fn name(&self) -> &str {
        "get_party_info"
    }

    fn description(&self) -> &str {
        "Fetch a single sanctioned-party record by its identifier"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "partyId": {
                    "type": "integer",
                    "description": "Identifier of the party to fetch"
                }
            },
            "required": ["partyId"]
        })
    }

    async fn invoke(&self, args: Value) -> Outcome {
        let party_id = match args::required_integer(&args, "partyId") {
            Ok(id) => id,
            Err(err) => {
                log_failure("get_party_info", &err);
                return err.into();
            }
        };

        tracing::info!(party_id, "get_party_info start");
        match self.client.get_party_info(party_id).await {
            Ok(data) => {
                tracing::info!(party_id, "get_party_info succeeded");
                Outcome::success(data)
            }
            Err(err) => {
                log_failure("get_party_info", &err);
                err.into()
            }
        }
    }
}

/// Unified search across names, aliases, and addresses.
pub struct SearchParty {
    client: PartyClient,
}

impl SearchParty {
    /// Tool backed by the given client.
    #[must_use]
    pub fn new(client: PartyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchParty {
    fn name(&self) -> &str {
        "search_party"
    }

    fn description(&self) -> &str {
        "Search sanctioned parties by name, alias, or address"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "q": {
                    "type": "string",
                    "minLength": 2,
                    "description": "Search text, at least 2 characters"
                },
                "scope": {
                    "type": "string",
                    "enum": ["all", "name", "alias", "address"],
                    "default": "all",
                    "description": "Which party fields to match"
                },
                "country": {
                    "type": "string",
                    "description": "Country code or name filter"
                },
                "city": {
                    "type": "string",
                    "description": "City filter"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 1000,
                    "default": 100,
                    "description": "Maximum number of results"
                },
                "fuzzy": {
                    "type": "boolean",
                    "default": false,
                    "description": "Enable similarity matching"
                }
            },
            "required": ["q"]
        })
    }

    async fn invoke(&self, args: Value) -> Outcome {
        let params = SearchParams {
            q: args::optional_string(&args, "q").unwrap_or_default(),
            scope: args::optional_string(&args, "scope"),
            country: args::optional_string(&args, "country"),
            city: args::optional_string(&args, "city"),
            limit: args::optional_integer(&args, "limit"),
            fuzzy: args::flag(&args, "fuzzy"),
        };
        tracing::info!(q = %params.q, scope = ?params.scope, "search_party start");

        let query = match params.validate() {
            Ok(query) => query,
            Err(err) => {
                log_failure("search_party", &err);
                return err.into();
            }
        };

        match self.client.search(&query).await {
            Ok(data) => {
                let hits = data.as_array().map_or(0, Vec::len);
                tracing::info!(hits, "search_party succeeded");
                Outcome::success(data)
            }
            Err(err) => {
                log_failure("search_party", &err);
                err.into()
            }
        }
    }
}

/// Validation and business failures are the caller's problem; transport,
/// HTTP, and internal faults are ours.
fn log_failure(tool: &'static str, err: &ToolError) {
    match err.kind() {
        ErrorKind::Validation | ErrorKind::RemoteBusiness => {
            tracing::warn!(tool, kind = %err.kind(), "{err}");
        }
        ErrorKind::RemoteHttp | ErrorKind::RemoteTransport | ErrorKind::Internal => {
            tracing::error!(tool, kind = %err.kind(), "{err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partyscope_client::ApiConfig;

    /// Client whose endpoint is never dialed by validation-path tests.
    fn offline_client() -> PartyClient {
        PartyClient::new(ApiConfig::new("http://127.0.0.1:9"))
    }

    #[test]
    fn test_tool_names_and_schemas() {
        let lookup = GetPartyInfo::new(offline_client());
        assert_eq!(lookup.name(), "get_party_info");
        assert_eq!(lookup.input_schema()["required"], json!(["partyId"]));

        let search = SearchParty::new(offline_client());
        assert_eq!(search.name(), "search_party");
        assert_eq!(search.input_schema()["required"], json!(["q"]));
        assert_eq!(
            search.input_schema()["properties"]["scope"]["enum"],
            json!(["all", "name", "alias", "address"])
        );
    }

    #[tokio::test]
    async fn test_lookup_rejects_missing_party_id() {
        let tool = GetPartyInfo::new(offline_client());
        let outcome = tool.invoke(json!({})).await;
        assert_eq!(outcome, Outcome::error("partyId is required"));
    }

    #[tokio::test]
    async fn test_lookup_rejects_non_integer_party_id() {
        let tool = GetPartyInfo::new(offline_client());
        let outcome = tool.invoke(json!({"partyId": "abc"})).await;
        assert_eq!(outcome, Outcome::error("partyId must be an integer"));
    }

    #[tokio::test]
    async fn test_search_rejects_short_query_without_network() {
        // The offline client would fail the call; validation must reject
        // first and the failure message must be the validation one.
        let tool = SearchParty::new(offline_client());
        let outcome = tool.invoke(json!({"q": "x"})).await;
        assert_eq!(outcome, Outcome::error("q must be at least 2 characters"));

        let outcome = tool.invoke(json!({})).await;
        assert_eq!(outcome, Outcome::error("q must be at least 2 characters"));
    }

    #[tokio::test]
    async fn test_search_rejects_unknown_scope() {
        let tool = SearchParty::new(offline_client());
        let outcome = tool.invoke(json!({"q": "ab", "scope": "fulltext"})).await;
        assert_eq!(
            outcome,
            Outcome::error("scope must be one of all, name, alias, address")
        );
    }
}
