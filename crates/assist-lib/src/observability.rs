//! Observability infrastructure for the assistants
//!
//! Provides:
//! - Prometheus counters (artifacts recorded, commands parsed, kubectl executions)
//! - Structured logging with tracing

use prometheus::{register_histogram, register_int_counter_vec, Histogram, IntCounterVec};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Histogram buckets for kubectl execution time (in seconds)
const EXECUTION_BUCKETS: &[f64] = &[0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 120.0];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<AssistantMetricsInner> = OnceLock::new();

struct AssistantMetricsInner {
    artifacts_recorded: IntCounterVec,
    commands_parsed: IntCounterVec,
    command_executions: IntCounterVec,
    execution_latency_seconds: Histogram,
}

impl AssistantMetricsInner {
    fn new() -> Self {
        Self {
            artifacts_recorded: register_int_counter_vec!(
                "assistant_artifacts_recorded_total",
                "Artifacts appended to an assistant recorder",
                &["kind"]
            )
            .expect("Failed to register artifacts_recorded"),

            commands_parsed: register_int_counter_vec!(
                "assistant_commands_parsed_total",
                "Natural-language commands translated, by intent",
                &["intent"]
            )
            .expect("Failed to register commands_parsed"),

            command_executions: register_int_counter_vec!(
                "assistant_command_executions_total",
                "kubectl command batches executed, by outcome",
                &["outcome"]
            )
            .expect("Failed to register command_executions"),

            execution_latency_seconds: register_histogram!(
                "assistant_execution_latency_seconds",
                "Time spent running a kubectl command batch",
                EXECUTION_BUCKETS.to_vec()
            )
            .expect("Failed to register execution_latency_seconds"),
        }
    }
}

/// Lightweight handle to the process-wide assistant metrics.
/// Clones share the same underlying counters.
#[derive(Clone)]
pub struct AssistantMetrics {
    _private: (),
}

impl Default for AssistantMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(AssistantMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &AssistantMetricsInner {
        GLOBAL_METRICS.get_or_init(AssistantMetricsInner::new)
    }

    pub fn inc_artifact(&self, kind: &str) {
        self.inner()
            .artifacts_recorded
            .with_label_values(&[kind])
            .inc();
    }

    pub fn inc_command_parsed(&self, intent: &str) {
        self.inner()
            .commands_parsed
            .with_label_values(&[intent])
            .inc();
    }

    /// Record the outcome of one execution batch
    pub fn observe_execution(&self, success: bool, duration_secs: f64) {
        let outcome = if success { "success" } else { "failure" };
        self.inner()
            .command_executions
            .with_label_values(&[outcome])
            .inc();
        self.inner().execution_latency_seconds.observe(duration_secs);
    }

    pub fn artifacts_recorded(&self, kind: &str) -> u64 {
        self.inner()
            .artifacts_recorded
            .with_label_values(&[kind])
            .get()
    }

    pub fn commands_parsed(&self, intent: &str) -> u64 {
        self.inner()
            .commands_parsed
            .with_label_values(&[intent])
            .get()
    }
}

/// Structured logger for assistant events
#[derive(Clone)]
pub struct StructuredLogger {
    component: String,
}

impl StructuredLogger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Log an artifact appended to a recorder
    pub fn log_artifact(&self, kind: &str, id: &str) {
        debug!(
            event = "artifact_recorded",
            component = %self.component,
            kind = %kind,
            id = %id,
            "Recorded artifact"
        );
    }

    /// Log a simulated cloud operation
    pub fn log_operation(&self, service: &str, action: &str, resource_id: &str, status: &str) {
        debug!(
            event = "operation_logged",
            component = %self.component,
            service = %service,
            action = %action,
            resource_id = %resource_id,
            status = %status,
            "Logged simulated operation"
        );
    }

    /// Log a translated natural-language command
    pub fn log_command_parsed(&self, intent: &str, commands: usize) {
        info!(
            event = "command_parsed",
            component = %self.component,
            intent = %intent,
            commands = commands,
            "Translated natural-language command"
        );
    }

    /// Log the result of running a command batch
    pub fn log_execution(&self, commands: usize, success: bool, duration_ms: u128) {
        if success {
            info!(
                event = "commands_executed",
                component = %self.component,
                commands = commands,
                duration_ms = duration_ms as u64,
                "kubectl commands completed"
            );
        } else {
            warn!(
                event = "commands_failed",
                component = %self.component,
                commands = commands,
                duration_ms = duration_ms as u64,
                "kubectl command batch failed"
            );
        }
    }

    /// Log a refused execution request
    pub fn log_execution_refused(&self, reason: &str) {
        warn!(
            event = "execution_refused",
            component = %self.component,
            reason = %reason,
            "Refused to run kubectl commands"
        );
    }

    /// Log process startup
    pub fn log_startup(&self, version: &str) {
        info!(
            event = "started",
            component = %self.component,
            version = %version,
            "Assistant started"
        );
    }

    /// Log process shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "shutdown",
            component = %self.component,
            reason = %reason,
            "Assistant shutting down"
        );
    }
}
