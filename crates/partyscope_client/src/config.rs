//! Endpoint and timeout configuration for the remote party service.

use std::time::Duration;

/// Lookup endpoint used when no override is configured.
pub const DEFAULT_API_ENDPOINT: &str = "https://hello-render-rbg8.onrender.com/ofacParty";

/// Per-call request timeout. One attempt only; a timed-out call surfaces as
/// a transport error.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved endpoints for the remote party service.
///
/// Constructed once at startup and handed to [`crate::PartyClient`]; the
/// executor issues requests to whatever endpoints it is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Single-party lookup endpoint
    pub api_endpoint: String,
    /// Search endpoint
    pub search_endpoint: String,
    /// Per-call timeout
    pub timeout: Duration,
}

impl ApiConfig {
    /// Config rooted at the given lookup endpoint, with the search endpoint
    /// derived as `<endpoint>/search`.
    #[must_use]
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        let api_endpoint = api_endpoint.into();
        let search_endpoint = format!("{}/search", api_endpoint.trim_end_matches('/'));
        Self {
            api_endpoint,
            search_endpoint,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the search endpoint.
    #[must_use]
    pub fn with_search_endpoint(mut self, search_endpoint: impl Into<String>) -> Self {
        self.search_endpoint = search_endpoint.into();
        self
    }

    /// Override the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ApiConfig::default();
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(
            config.search_endpoint,
            format!("{DEFAULT_API_ENDPOINT}/search")
        );
        assert_eq!(config.timeout, REQUEST_TIMEOUT);
    }

    #[test]
    fn test_search_endpoint_derived_from_override() {
        let config = ApiConfig::new("http://localhost:9000/party/");
        assert_eq!(config.search_endpoint, "http://localhost:9000/party/search");
    }

    #[test]
    fn test_explicit_search_endpoint_wins() {
        let config = ApiConfig::new("http://a.example/party")
            .with_search_endpoint("http://b.example/find");
        assert_eq!(config.api_endpoint, "http://a.example/party");
        assert_eq!(config.search_endpoint, "http://b.example/find");
    }
}
