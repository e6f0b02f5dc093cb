//! Router behavior: discovery, dispatch, and the uniform envelope.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use partyscope_client::{ApiConfig, PartyClient};
use partyscope_server::router;
use partyscope_tool::{GetPartyInfo, SearchParty, ToolRegistry};

/// Router over the real tools; the client endpoint is never dialed by
/// these tests.
fn test_router() -> Router {
    let client = PartyClient::new(ApiConfig::new("http://127.0.0.1:9"));
    let mut registry = ToolRegistry::new();
    registry
        .register(Arc::new(GetPartyInfo::new(client.clone())))
        .unwrap();
    registry
        .register(Arc::new(SearchParty::new(client)))
        .unwrap();
    router(Arc::new(registry))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_healthz() {
    let response = test_router()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_tools_in_registration_order() {
    let response = test_router()
        .oneshot(Request::builder().uri("/tools").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["get_party_info", "search_party"]);
    assert!(body[1]["inputSchema"]["properties"]["q"].is_object());
}

#[tokio::test]
async fn test_invoke_returns_envelope_not_http_failure() {
    // A validation failure still answers 200; the envelope carries it.
    let response = test_router()
        .oneshot(post_json("/tools/search_party", r#"{"q": "x"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "error", "message": "q must be at least 2 characters"})
    );
}

#[tokio::test]
async fn test_invoke_unknown_tool_is_404_with_envelope() {
    let response = test_router()
        .oneshot(post_json("/tools/nope", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"status": "error", "message": "Tool not found: nope"})
    );
}

#[tokio::test]
async fn test_invoke_lookup_missing_argument() {
    let response = test_router()
        .oneshot(post_json("/tools/get_party_info", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "error", "message": "partyId is required"})
    );
}
