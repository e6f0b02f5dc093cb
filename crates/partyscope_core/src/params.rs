//! Search parameter validation and normalization.
//!
//! Raw caller arguments pass through [`SearchParams::validate`] exactly once
//! before any network access; everything downstream of a [`SearchQuery`] can
//! assume its invariants hold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ToolError, ToolResult};

/// Minimum accepted result limit.
pub const MIN_LIMIT: i64 = 1;
/// Maximum accepted result limit.
pub const MAX_LIMIT: i64 = 1000;
/// Limit applied when the caller supplies none.
pub const DEFAULT_LIMIT: i64 = 100;

/// Minimum trimmed query length.
pub const MIN_QUERY_LEN: usize = 2;

/// Search dimension restricting which party fields are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Match names, aliases, and addresses
    #[default]
    All,
    /// Match primary names only
    Name,
    /// Match aliases only
    Alias,
    /// Match addresses only
    Address,
}

impl SearchScope {
    /// Every accepted scope, in the order used for error messages.
    pub const ALLOWED: [SearchScope; 4] = [Self::All, Self::Name, Self::Alias, Self::Address];

    /// Lowercase wire name of the scope.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Name => "name",
            Self::Alias => "alias",
            Self::Address => "address",
        }
    }

    fn allowed_list() -> String {
        let names: Vec<&str> = Self::ALLOWED.iter().map(SearchScope::as_str).collect();
        names.join(", ")
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = ToolError;

    /// Parses case-insensitively; anything outside the allowed set fails
    /// with a message enumerating it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "name" => Ok(Self::Name),
            "alias" => Ok(Self::Alias),
            "address" => Ok(Self::Address),
            _ => Err(ToolError::validation(format!(
                "scope must be one of {}",
                Self::allowed_list()
            ))),
        }
    }
}

/// Raw search arguments as supplied by the caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Query text
    pub q: String,
    /// Requested scope; `None` falls back to [`SearchScope::All`]
    pub scope: Option<String>,
    /// Optional country filter
    pub country: Option<String>,
    /// Optional city filter
    pub city: Option<String>,
    /// Requested result limit; `None` falls back to [`DEFAULT_LIMIT`]
    pub limit: Option<i64>,
    /// Fuzzy-match flag
    pub fuzzy: bool,
}

impl SearchParams {
    /// Checks and normalizes the raw arguments into a [`SearchQuery`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if the trimmed query is shorter than
    /// [`MIN_QUERY_LEN`] or the scope is not in the allowed set. Out-of-range
    /// limits are clamped rather than rejected.
    pub fn validate(self) -> ToolResult<SearchQuery> {
        let q = self.q.trim().to_string();
        if q.chars().count() < MIN_QUERY_LEN {
            return Err(ToolError::validation(format!(
                "q must be at least {MIN_QUERY_LEN} characters"
            )));
        }

        let scope = match self.scope.as_deref() {
            None | Some("") => SearchScope::All,
            Some(raw) => raw.parse()?,
        };

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(MIN_LIMIT, MAX_LIMIT);

        // The remote query must never receive empty filter parameters.
        let country = self.country.filter(|c| !c.is_empty());
        let city = self.city.filter(|c| !c.is_empty());

        Ok(SearchQuery {
            q,
            scope,
            country,
            city,
            limit,
            fuzzy: self.fuzzy,
        })
    }
}

/// Validated, normalized search parameters.
///
/// Invariants: `q` is trimmed and at least [`MIN_QUERY_LEN`] characters,
/// `limit` is within `[MIN_LIMIT, MAX_LIMIT]`, and the optional filters are
/// non-empty when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Trimmed query text
    pub q: String,
    /// Normalized scope
    pub scope: SearchScope,
    /// Country filter, non-empty when present
    pub country: Option<String>,
    /// City filter, non-empty when present
    pub city: Option<String>,
    /// Clamped result limit
    pub limit: i64,
    /// Fuzzy-match flag
    pub fuzzy: bool,
}

impl SearchQuery {
    /// Outbound query parameters for the remote search endpoint.
    ///
    /// `fuzzy` is encoded asymmetrically: the pair is present only when the
    /// flag is true. The remote service keys on the parameter's presence,
    /// not its value.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.q.clone()),
            ("scope", self.scope.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if self.fuzzy {
            pairs.push(("fuzzy", "true".to_string()));
        }
        pairs
    }
}
