//! HTTP API: command translation, health checks and Prometheus metrics

use assist_lib::{
    health::HealthRegistry,
    kube::{parse_command, ExecError, KubectlRunner},
    observability::{AssistantMetrics, StructuredLogger},
};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub health_registry: HealthRegistry,
    pub runner: KubectlRunner,
    pub metrics: AssistantMetrics,
    pub logger: StructuredLogger,
}

impl AppState {
    pub fn new(health_registry: HealthRegistry, runner: KubectlRunner) -> Self {
        Self {
            health_registry,
            runner,
            metrics: AssistantMetrics::new(),
            logger: StructuredLogger::new("mcp-k8s-server"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CommandBody {
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CommandParams {
    run: Option<String>,
}

impl CommandParams {
    fn wants_run(&self) -> bool {
        self.run.as_deref() == Some("true")
    }
}

/// Translate a natural-language command; `?run=true` also executes it
async fn command(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CommandParams>,
    body: Bytes,
) -> impl IntoResponse {
    let text = serde_json::from_slice::<CommandBody>(&body)
        .ok()
        .and_then(|b| b.text)
        .filter(|t| !t.is_empty());

    let Some(text) = text else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "text required" })),
        );
    };

    let parsed = parse_command(&text);
    state.metrics.inc_command_parsed(parsed.intent.as_str());
    state
        .logger
        .log_command_parsed(parsed.intent.as_str(), parsed.kubectl.len());

    if !params.wants_run() {
        return (StatusCode::OK, Json(json!({ "parsed": parsed })));
    }

    match state.runner.run(&parsed.kubectl).await {
        Ok(output) => (
            StatusCode::OK,
            Json(json!({ "parsed": parsed, "output": output })),
        ),
        Err(err @ ExecError::Disabled) => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": err.to_string() })),
        ),
        Err(err) => {
            error!(error = %err, intent = %parsed.intent, "Command execution failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string(), "output": err.output() })),
            )
        }
    }
}

/// Health check response; degraded still answers 200
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health().await;
    (StatusCode::OK, Json(health))
}

async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        error!(error = %err, "Failed to encode metrics");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [("content-type", "text/plain; charset=utf-8")],
            Vec::new(),
        );
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/command", post(command))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Start the API server and run until `shutdown` resolves
pub async fn serve(
    port: u16,
    state: Arc<AppState>,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "MCP Kubernetes server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
