//! MCP Kubernetes server - natural-language kubectl translation over HTTP

use anyhow::Result;
use assist_lib::{
    health::{components, HealthRegistry},
    kube::KubectlRunner,
    observability::StructuredLogger,
};
use mcp_k8s_server::{api, config::ServerConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    let config = ServerConfig::load()?;
    info!(port = config.port, allow_kubectl = config.allow_kubectl, "Server configured");

    let logger = StructuredLogger::new("mcp-k8s-server");
    logger.log_startup(SERVER_VERSION);

    let health_registry = HealthRegistry::new();
    health_registry.register(components::INTENT_PARSER).await;
    health_registry.register(components::KUBECTL_RUNNER).await;
    if !config.allow_kubectl {
        health_registry
            .set_degraded(components::KUBECTL_RUNNER, "execution disabled")
            .await;
    }

    let runner = KubectlRunner::new(config.allow_kubectl);
    let app_state = Arc::new(api::AppState::new(health_registry.clone(), runner));

    health_registry.set_ready(true).await;

    let shutdown_logger = logger.clone();
    api::serve(config.port, app_state, async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown_logger.log_shutdown("SIGINT received");
        }
    })
    .await?;

    info!("Shutting down");
    Ok(())
}
