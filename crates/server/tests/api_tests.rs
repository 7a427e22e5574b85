//! Integration tests for the command server API endpoints

use assist_lib::{
    health::{components, HealthRegistry},
    kube::KubectlRunner,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mcp_k8s_server::api::{create_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn create_test_app(allow_kubectl: bool) -> (Router, HealthRegistry) {
    create_test_app_with_runner(KubectlRunner::new(allow_kubectl)).await
}

async fn create_test_app_with_runner(runner: KubectlRunner) -> (Router, HealthRegistry) {
    let health_registry = HealthRegistry::new();
    health_registry.register(components::INTENT_PARSER).await;
    health_registry.register(components::KUBECTL_RUNNER).await;

    let state = Arc::new(AppState::new(health_registry.clone(), runner));
    (create_router(state), health_registry)
}

fn post_command(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_command_requires_text() {
    let (app, _) = create_test_app(false).await;

    for body in ["{}", r#"{"text":""}"#, "not json"] {
        let response = app
            .clone()
            .oneshot(post_command("/command", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"], "text required");
    }
}

#[tokio::test]
async fn test_command_returns_parsed_translation() {
    let (app, _) = create_test_app(false).await;

    let response = app
        .oneshot(post_command(
            "/command",
            r#"{"text":"Show me pods in namespace payments"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["parsed"]["intent"], "show-pods");
    assert_eq!(
        json["parsed"]["kubectl"][0],
        "kubectl get pods -n payments -o wide"
    );
    assert!(json.get("output").is_none());
}

#[tokio::test]
async fn test_run_refused_when_disabled() {
    let (app, _) = create_test_app(false).await;

    let response = app
        .oneshot(post_command("/command?run=true", r#"{"text":"show pods"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = json_body(response).await;
    assert_eq!(
        json["error"],
        "Execution disabled. Set ALLOW_KUBECTL=1 to enable."
    );
}

#[tokio::test]
async fn test_run_flag_other_than_true_only_parses() {
    let (app, _) = create_test_app(false).await;

    let response = app
        .oneshot(post_command("/command?run=1", r#"{"text":"show pods"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["parsed"]["intent"], "show-pods");
}

#[tokio::test]
async fn test_run_unknown_intent_executes_nothing() {
    let (app, _) = create_test_app(true).await;

    let response = app
        .oneshot(post_command(
            "/command?run=true",
            r#"{"text":"make me a sandwich"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["parsed"]["intent"], "unknown");
    assert_eq!(json["output"], "");
}

#[tokio::test]
async fn test_run_failure_returns_error_and_output() {
    // `false -c <command>` exits 1 regardless of the command or any cluster
    let (app, _) = create_test_app_with_runner(KubectlRunner::new(true).with_shell("false")).await;

    let response = app
        .oneshot(post_command(
            "/command?run=true",
            r#"{"text":"show pods in namespace nowhere"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Command failed: kubectl get pods -n nowhere"));
    assert_eq!(json["output"], "$ kubectl get pods -n nowhere -o wide\n");
}

#[tokio::test]
async fn test_healthz_reports_degraded_runner() {
    let (app, health_registry) = create_test_app(false).await;
    health_registry
        .set_degraded(components::KUBECTL_RUNNER, "execution disabled")
        .await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(
        json["components"]["kubectl_runner"]["message"],
        "execution disabled"
    );
}

#[tokio::test]
async fn test_readyz_not_ready() {
    let (app, _) = create_test_app(false).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/readyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_readyz_ready() {
    let (app, health_registry) = create_test_app(false).await;
    health_registry.set_ready(true).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/readyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (app, _) = create_test_app(false).await;

    let response = app
        .clone()
        .oneshot(post_command("/command", r#"{"text":"show pods"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("assistant_commands_parsed_total"));
}
