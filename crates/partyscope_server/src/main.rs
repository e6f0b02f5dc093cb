//! PARTYSCOPE Server
//!
//! Wires configuration, the remote client, and the tool registry together
//! and exposes them over HTTP.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use partyscope_client::{ApiConfig, PartyClient};
use partyscope_server::ApiServer;
use partyscope_tool::{GetPartyInfo, SearchParty, ToolRegistry};

#[derive(Parser)]
#[command(name = "partyscope-server")]
#[command(about = "Sanctioned-party lookup tool service", long_about = None)]
struct Args {
    /// Bind address
    #[arg(short, long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind: String,

    /// Lookup endpoint of the remote party service
    #[arg(long, env = "API_ENDPOINT")]
    api_endpoint: Option<String>,

    /// Search endpoint of the remote party service
    #[arg(long, env = "SEARCH_ENDPOINT")]
    search_endpoint: Option<String>,
}

impl Args {
    /// Endpoint config: defaults, then env, then flags (clap folds the
    /// last two); the search endpoint derives from the lookup endpoint
    /// unless overridden explicitly.
    fn api_config(&self) -> ApiConfig {
        let config = match self.api_endpoint.clone() {
            Some(endpoint) => ApiConfig::new(endpoint),
            None => ApiConfig::default(),
        };
        match self.search_endpoint.clone() {
            Some(endpoint) => config.with_search_endpoint(endpoint),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter("partyscope=info,tower_http=info")
        .init();

    let config = args.api_config();
    tracing::info!(
        api_endpoint = %config.api_endpoint,
        search_endpoint = %config.search_endpoint,
        "resolved remote endpoints"
    );

    let client = PartyClient::new(config);
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GetPartyInfo::new(client.clone())))?;
    registry.register(Arc::new(SearchParty::new(client)))?;

    let server = ApiServer::new(args.bind, Arc::new(registry));
    server.serve().await?;

    Ok(())
}
