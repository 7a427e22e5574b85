//! Grafana observability assistant
//!
//! This module provides:
//! - PromQL, LogQL and SLI query templates
//! - Dashboard, alert and SLO generation with an append-only recorder
//! - Explanations of common observability concepts

mod assistant;
pub mod concepts;
pub mod templates;

pub use assistant::{
    error_budget, GrafanaAssistant, GrafanaSummary, DEFAULT_ALERT_DURATION, DEFAULT_LOG_LEVEL,
    DEFAULT_SLO_WINDOW,
};
pub use templates::{logql, promql, sli_query, MetricTemplate};
