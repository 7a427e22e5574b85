//! Assistant library for observability and cloud automation demos
//!
//! This crate provides the core functionality for:
//! - PromQL/LogQL generation, dashboards, alerts and SLOs (Grafana)
//! - Simulated AWS resource provisioning
//! - Natural-language to kubectl translation and execution
//! - Health checks and observability

pub mod aws;
pub mod clock;
pub mod grafana;
pub mod health;
pub mod kube;
pub mod models;
pub mod observability;

pub use clock::{Clock, FixedClock, SystemClock};
pub use health::{ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse};
pub use models::*;
pub use observability::{AssistantMetrics, StructuredLogger};
