//! Core records produced by the observability assistant

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Threshold at or above which an alert is raised as critical
pub const CRITICAL_THRESHOLD: f64 = 80.0;

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    /// Severity for an alert threshold: critical from 80 upwards
    pub fn for_threshold(threshold: f64) -> Self {
        if threshold < CRITICAL_THRESHOLD {
            Severity::Warning
        } else {
            Severity::Critical
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Grafana panel visualization type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Graph,
    Stat,
    Gauge,
    Timeseries,
    Heatmap,
    Logs,
    Trace,
    #[serde(rename = "nodeGraph")]
    NodeGraph,
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PanelKind::Graph => "graph",
            PanelKind::Stat => "stat",
            PanelKind::Gauge => "gauge",
            PanelKind::Timeseries => "timeseries",
            PanelKind::Heatmap => "heatmap",
            PanelKind::Logs => "logs",
            PanelKind::Trace => "trace",
            PanelKind::NodeGraph => "nodeGraph",
        };
        f.write_str(name)
    }
}

/// Backend a panel reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Datasource {
    Prometheus,
    Loki,
    Tempo,
}

impl std::fmt::Display for Datasource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Datasource::Prometheus => write!(f, "Prometheus"),
            Datasource::Loki => write!(f, "Loki"),
            Datasource::Tempo => write!(f, "Tempo"),
        }
    }
}

/// A single dashboard panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PanelKind,
    pub datasource: Datasource,
    /// Query text, in display order. Most panels carry exactly one.
    pub queries: Vec<String>,
    /// Whether the panel draws the alert threshold line
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub alert_threshold: bool,
}

impl Panel {
    /// Primary query of the panel
    pub fn query(&self) -> Option<&str> {
        self.queries.first().map(String::as_str)
    }
}

/// Dashboard template variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardVariable {
    pub name: String,
    pub value: String,
}

/// Generated Grafana dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub dashboard_id: String,
    pub title: String,
    pub panels: Vec<Panel>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<DashboardVariable>,
}

/// Generated alert rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub alert_id: String,
    pub name: String,
    pub threshold: f64,
    pub condition: String,
    pub duration: String,
    pub severity: Severity,
    pub query: String,
    pub notification_channels: Vec<String>,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
}

/// Burn rate alert windows for an SLO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRateAlert {
    pub fast_burn: String,
    pub slow_burn: String,
}

/// Panel placed on an SLO dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SloPanel {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PanelKind,
}

/// Service level objective definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slo {
    pub slo_id: String,
    pub service: String,
    pub name: String,
    pub objective: String,
    pub target: f64,
    pub window: String,
    pub sli_query: String,
    /// Percentage points of allowed unreliability (100 - target)
    pub error_budget: f64,
    pub burn_rate_alert: BurnRateAlert,
    pub dashboard_panels: Vec<SloPanel>,
}

/// Query language of a generated query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryLanguage {
    LogQL,
}

/// Standalone query handed back to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    #[serde(rename = "type")]
    pub language: QueryLanguage,
    pub service: String,
    pub query: String,
    pub purpose: String,
}

/// One user request and the assistant's answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub timestamp: String,
    pub user_query: String,
    pub assistant_response: serde_json::Value,
}
