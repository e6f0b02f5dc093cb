//! API server

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use partyscope_core::Outcome;
use partyscope_tool::{ToolDescriptor, ToolRegistry};

/// HTTP server wrapping a tool registry.
pub struct ApiServer {
    bind: String,
    registry: Arc<ToolRegistry>,
}

impl ApiServer {
    /// Server that will expose `registry` on `bind`.
    #[must_use]
    pub fn new(bind: impl Into<String>, registry: Arc<ToolRegistry>) -> Self {
        Self {
            bind: bind.into(),
            registry,
        }
    }

    /// Binds and serves until the process is stopped.
    ///
    /// # Errors
    ///
    /// Returns error if the address cannot be bound or the listener fails.
    pub async fn serve(self) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.bind).await?;
        tracing::info!(addr = %listener.local_addr()?, "listening");
        axum::serve(listener, router(self.registry)).await
    }
}

/// The service's router: tool discovery, tool invocation, and a health
/// probe.
#[must_use]
pub fn router(registry: Arc<ToolRegistry>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/tools", get(list_tools))
        .route("/tools/{name}", post(invoke_tool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(registry)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn list_tools(State(registry): State<Arc<ToolRegistry>>) -> Json<Vec<ToolDescriptor>> {
    Json(registry.list())
}

/// Invocation always answers 200 with an outcome envelope; only an unknown
/// tool name surfaces as an HTTP-level failure.
async fn invoke_tool(
    State(registry): State<Arc<ToolRegistry>>,
    Path(name): Path<String>,
    Json(args): Json<Value>,
) -> Response {
    match registry.get(&name) {
        Ok(tool) => Json(tool.invoke(args).await).into_response(),
        Err(err) => {
            (StatusCode::NOT_FOUND, Json(Outcome::error(err.to_string()))).into_response()
        }
    }
}
