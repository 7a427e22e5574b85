//! Grafana assistant recorder
//!
//! Turns small sets of named inputs into dashboards, alert rules, SLOs and
//! queries, keeping every generated artifact in append-only lists.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{concepts, templates};
use crate::clock::{Clock, SystemClock};
use crate::models::{
    Alert, BurnRateAlert, Conversation, Dashboard, DashboardVariable, Datasource, Panel,
    PanelKind, QueryLanguage, QueryRecord, Severity, Slo, SloPanel,
};
use crate::observability::{AssistantMetrics, StructuredLogger};

/// Default evaluation window for alert rules
pub const DEFAULT_ALERT_DURATION: &str = "5m";

/// Default SLO compliance window
pub const DEFAULT_SLO_WINDOW: &str = "30d";

/// Default log level for LogQL queries
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Channels every generated alert notifies
const NOTIFICATION_CHANNELS: [&str; 3] = ["slack", "email", "pagerduty"];

/// Aggregate counts over the recorder's lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrafanaSummary {
    pub dashboards: usize,
    pub alerts: usize,
    pub slos: usize,
    pub queries: usize,
    pub conversations: usize,
}

/// In-memory Grafana assistant
#[derive(Serialize)]
pub struct GrafanaAssistant {
    #[serde(skip)]
    clock: Box<dyn Clock>,
    #[serde(skip)]
    logger: StructuredLogger,
    #[serde(skip)]
    metrics: AssistantMetrics,
    conversations: Vec<Conversation>,
    dashboards: Vec<Dashboard>,
    alerts: Vec<Alert>,
    slos: Vec<Slo>,
    queries: Vec<QueryRecord>,
}

impl Default for GrafanaAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl GrafanaAssistant {
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
            logger: StructuredLogger::new("grafana-assistant"),
            metrics: AssistantMetrics::new(),
            conversations: Vec::new(),
            dashboards: Vec::new(),
            alerts: Vec::new(),
            slos: Vec::new(),
            queries: Vec::new(),
        }
    }

    /// Use a different time source for identifiers and timestamps
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Record one user request and the assistant's answer
    pub fn log_conversation(
        &mut self,
        user_query: impl Into<String>,
        assistant_response: serde_json::Value,
    ) -> &Conversation {
        let conversation = Conversation {
            timestamp: self.clock.log_timestamp(),
            user_query: user_query.into(),
            assistant_response,
        };
        self.record("conversation", &conversation.timestamp);
        self.conversations.push(conversation);
        &self.conversations[self.conversations.len() - 1]
    }

    /// Build a monitoring dashboard with one panel per metric
    pub fn generate_dashboard(&mut self, service: &str, metrics: &[&str]) -> Dashboard {
        let panels = metrics
            .iter()
            .zip(1u32..)
            .map(|(metric, id)| Panel {
                id,
                title: templates::panel_title(metric),
                kind: templates::panel_kind(metric),
                datasource: Datasource::Prometheus,
                queries: vec![templates::promql(service, metric)],
                alert_threshold: false,
            })
            .collect();

        let dashboard = Dashboard {
            dashboard_id: format!("dash-{}-{}", service, self.clock.id_stamp()),
            title: format!("{} Monitoring Dashboard", service.to_uppercase()),
            panels,
            tags: vec![
                "automated".to_string(),
                "grafana-assistant".to_string(),
                service.to_string(),
            ],
            refresh: Some("30s".to_string()),
            time_range: Some("Last 6 hours".to_string()),
            variables: Vec::new(),
        };

        self.record("dashboard", &dashboard.dashboard_id);
        self.dashboards.push(dashboard.clone());
        dashboard
    }

    /// Create an alert rule firing when `metric` stays above `threshold`
    pub fn create_alert(&mut self, metric: &str, threshold: f64, duration: &str) -> Alert {
        let labels = BTreeMap::from([
            ("team".to_string(), "sre".to_string()),
            ("priority".to_string(), "high".to_string()),
            ("environment".to_string(), "production".to_string()),
        ]);
        let annotations = BTreeMap::from([
            (
                "description".to_string(),
                format!(
                    "{} has exceeded {}% threshold for {}",
                    metric, threshold, duration
                ),
            ),
            (
                "runbook_url".to_string(),
                format!("https://wiki.example.com/runbooks/{}", metric),
            ),
        ]);

        let alert = Alert {
            alert_id: format!("alert-{}-{}", metric, self.clock.id_stamp()),
            name: format!("High {}", templates::panel_title(metric)),
            threshold,
            condition: format!("{} > {}", metric, threshold),
            duration: duration.to_string(),
            severity: Severity::for_threshold(threshold),
            query: format!("avg(rate({}[5m])) > {}", metric, threshold),
            notification_channels: NOTIFICATION_CHANNELS.iter().map(|c| c.to_string()).collect(),
            labels,
            annotations,
        };

        self.record("alert", &alert.alert_id);
        self.alerts.push(alert.clone());
        alert
    }

    /// Define an SLO for `metric` on `service` with a percentage target
    pub fn create_slo(&mut self, service: &str, metric: &str, target: f64, window: &str) -> Slo {
        let slo = Slo {
            slo_id: format!("slo-{}-{}-{}", service, metric, self.clock.id_stamp()),
            service: service.to_string(),
            name: format!("{} {} SLO", service, metric),
            objective: format!("{}% availability", target),
            target,
            window: window.to_string(),
            sli_query: templates::sli_query(service, metric),
            error_budget: error_budget(target),
            burn_rate_alert: BurnRateAlert {
                fast_burn: "5m".to_string(),
                slow_burn: "1h".to_string(),
            },
            dashboard_panels: slo_panels(),
        };

        self.record("slo", &slo.slo_id);
        self.slos.push(slo.clone());
        slo
    }

    /// Generate a LogQL query for a service's logs and keep it
    pub fn generate_logql_query(&mut self, service: &str, log_level: &str) -> String {
        let query = templates::logql(service, log_level);

        self.record("query", service);
        self.queries.push(QueryRecord {
            language: QueryLanguage::LogQL,
            service: service.to_string(),
            query: query.clone(),
            purpose: format!("Find {} logs for {}", log_level, service),
        });
        query
    }

    /// Build an incident investigation dashboard spanning metrics, logs and traces
    pub fn create_incident_dashboard(&mut self, service: &str, incident_type: &str) -> Dashboard {
        let panel = |id: u32, title: &str, kind: PanelKind, datasource: Datasource, queries: Vec<String>| Panel {
            id,
            title: title.to_string(),
            kind,
            datasource,
            queries,
            alert_threshold: false,
        };

        let mut error_timeline = panel(
            1,
            "Error Rate Timeline",
            PanelKind::Timeseries,
            Datasource::Prometheus,
            vec![templates::server_errors(service)],
        );
        error_timeline.alert_threshold = true;

        let panels = vec![
            error_timeline,
            panel(
                2,
                "Latency Distribution",
                PanelKind::Heatmap,
                Datasource::Prometheus,
                vec![templates::latency_buckets(service)],
            ),
            panel(
                3,
                "Resource Utilization",
                PanelKind::Graph,
                Datasource::Prometheus,
                vec![
                    templates::cpu_percent(service),
                    templates::memory_megabytes(service),
                ],
            ),
            panel(
                4,
                "Error Logs",
                PanelKind::Logs,
                Datasource::Loki,
                vec![format!(
                    r#"{{service="{}", level="error"}} |= "{}""#,
                    service, incident_type
                )],
            ),
            panel(
                5,
                "Distributed Traces",
                PanelKind::Trace,
                Datasource::Tempo,
                vec![format!(r#"{{service.name="{}"}}"#, service)],
            ),
            panel(
                6,
                "Dependency Map",
                PanelKind::NodeGraph,
                Datasource::Tempo,
                vec![format!(r#"traces{{service.name="{}"}}"#, service)],
            ),
        ];

        let dashboard = Dashboard {
            dashboard_id: format!("incident-{}-{}", service, self.clock.id_stamp()),
            title: format!("Incident Investigation: {} - {}", service, incident_type),
            panels,
            tags: vec![
                "incident".to_string(),
                "investigation".to_string(),
                service.to_string(),
            ],
            refresh: None,
            time_range: None,
            variables: vec![
                DashboardVariable {
                    name: "service".to_string(),
                    value: service.to_string(),
                },
                DashboardVariable {
                    name: "time_range".to_string(),
                    value: "now-1h".to_string(),
                },
            ],
        };

        self.record("dashboard", &dashboard.dashboard_id);
        self.dashboards.push(dashboard.clone());
        dashboard
    }

    /// Explain an observability concept (not recorded)
    pub fn explain_concept(&self, concept: &str) -> String {
        concepts::explain(concept)
    }

    pub fn summary(&self) -> GrafanaSummary {
        GrafanaSummary {
            dashboards: self.dashboards.len(),
            alerts: self.alerts.len(),
            slos: self.slos.len(),
            queries: self.queries.len(),
            conversations: self.conversations.len(),
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn dashboards(&self) -> &[Dashboard] {
        &self.dashboards
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn slos(&self) -> &[Slo] {
        &self.slos
    }

    pub fn queries(&self) -> &[QueryRecord] {
        &self.queries
    }

    fn record(&self, kind: &str, id: &str) {
        self.logger.log_artifact(kind, id);
        self.metrics.inc_artifact(kind);
    }
}

/// 100 - target, rounded at 1e-12 to drop float noise (99.9 yields exactly 0.1)
pub fn error_budget(target: f64) -> f64 {
    ((100.0 - target) * 1e12).round() / 1e12
}

fn slo_panels() -> Vec<SloPanel> {
    [
        ("SLO Compliance", PanelKind::Gauge),
        ("Error Budget Remaining", PanelKind::Stat),
        ("Burn Rate", PanelKind::Graph),
        ("SLI Trend", PanelKind::Timeseries),
    ]
    .into_iter()
    .map(|(title, kind)| SloPanel {
        title: title.to_string(),
        kind,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn assistant() -> GrafanaAssistant {
        let at = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        GrafanaAssistant::new().with_clock(FixedClock(at))
    }

    #[test]
    fn test_dashboard_for_two_metrics() {
        let mut assistant = assistant();
        let dashboard = assistant.generate_dashboard("api-service", &["request_rate", "error_rate"]);

        assert_eq!(dashboard.dashboard_id, "dash-api-service-20260115093000");
        assert_eq!(dashboard.title, "API-SERVICE Monitoring Dashboard");
        assert_eq!(dashboard.panels.len(), 2);
        assert_eq!(
            dashboard.panels[0].query(),
            Some(templates::promql("api-service", "request_rate").as_str())
        );
        assert_eq!(
            dashboard.panels[1].query(),
            Some(
                r#"rate(http_requests_total{service="api-service",status=~"5.."}[5m]) / rate(http_requests_total{service="api-service"}[5m])"#
            )
        );
        assert_eq!(dashboard.panels[0].id, 1);
        assert_eq!(dashboard.panels[1].id, 2);
        assert_eq!(dashboard.panels[0].title, "Request Rate");
        assert_eq!(dashboard.panels[0].kind, PanelKind::Graph);
        assert_eq!(dashboard.tags, vec!["automated", "grafana-assistant", "api-service"]);
        assert_eq!(dashboard.refresh.as_deref(), Some("30s"));
    }

    #[test]
    fn test_stat_panel_for_non_rate_metric() {
        let mut assistant = assistant();
        let dashboard = assistant.generate_dashboard("db", &["memory_usage", "disk_iops"]);

        assert_eq!(dashboard.panels[0].kind, PanelKind::Stat);
        assert_eq!(dashboard.panels[1].query(), Some(r#"disk_iops{service="db"}"#));
    }

    #[test]
    fn test_creation_appends_exactly_one() {
        let mut assistant = assistant();

        assistant.generate_dashboard("api", &["request_rate"]);
        assert_eq!(assistant.dashboards().len(), 1);

        assistant.create_incident_dashboard("api", "timeout");
        assert_eq!(assistant.dashboards().len(), 2);

        assistant.create_alert("cpu_usage_percent", 80.0, DEFAULT_ALERT_DURATION);
        assert_eq!(assistant.alerts().len(), 1);

        assistant.create_slo("api", "latency", 99.9, DEFAULT_SLO_WINDOW);
        assert_eq!(assistant.slos().len(), 1);

        assistant.generate_logql_query("api", DEFAULT_LOG_LEVEL);
        assert_eq!(assistant.queries().len(), 1);

        assistant.log_conversation("hello", serde_json::json!({"ok": true}));
        assert_eq!(assistant.conversations().len(), 1);

        // explanations are not recorded
        assistant.explain_concept("SLO");

        assert_eq!(
            assistant.summary(),
            GrafanaSummary {
                dashboards: 2,
                alerts: 1,
                slos: 1,
                queries: 1,
                conversations: 1,
            }
        );
    }

    #[test]
    fn test_alert_fields() {
        let mut assistant = assistant();
        let alert = assistant.create_alert("cpu_usage_percent", 80.0, "5m");

        assert_eq!(alert.alert_id, "alert-cpu_usage_percent-20260115093000");
        assert_eq!(alert.name, "High Cpu Usage Percent");
        assert_eq!(alert.condition, "cpu_usage_percent > 80");
        assert_eq!(alert.query, "avg(rate(cpu_usage_percent[5m])) > 80");
        assert_eq!(alert.severity, Severity::Critical);
        assert_eq!(alert.notification_channels, vec!["slack", "email", "pagerduty"]);
        assert_eq!(alert.labels["team"], "sre");
        assert_eq!(
            alert.annotations["description"],
            "cpu_usage_percent has exceeded 80% threshold for 5m"
        );
        assert_eq!(
            alert.annotations["runbook_url"],
            "https://wiki.example.com/runbooks/cpu_usage_percent"
        );
    }

    #[test]
    fn test_alert_severity_boundary() {
        let mut assistant = assistant();
        assert_eq!(assistant.create_alert("m", 80.0, "5m").severity, Severity::Critical);
        assert_eq!(assistant.create_alert("m", 79.9, "5m").severity, Severity::Warning);
        assert_eq!(assistant.create_alert("m", 79.9, "5m").condition, "m > 79.9");
    }

    #[test]
    fn test_slo_error_budget() {
        let mut assistant = assistant();
        let slo = assistant.create_slo("api-service", "latency", 99.9, "30d");

        assert_eq!(slo.error_budget, 0.1);
        assert_eq!(slo.objective, "99.9% availability");
        assert_eq!(slo.name, "api-service latency SLO");
        assert_eq!(slo.slo_id, "slo-api-service-latency-20260115093000");
        assert!(slo.sli_query.ends_with("< 0.5"));
        assert_eq!(slo.burn_rate_alert.fast_burn, "5m");
        assert_eq!(slo.burn_rate_alert.slow_burn, "1h");
        assert_eq!(slo.dashboard_panels.len(), 4);
        assert_eq!(slo.dashboard_panels[0].kind, PanelKind::Gauge);

        assert_eq!(error_budget(99.0), 1.0);
        assert_eq!(error_budget(99.95), 0.05);
        assert_eq!(error_budget(100.0), 0.0);
    }

    #[test]
    fn test_error_budget_keeps_high_nines() {
        assert!(error_budget(99.9999999) > 0.0);
        assert!(error_budget(99.99999999) > 0.0);
        assert!((error_budget(99.9999999) - 1e-7).abs() < 1e-12);
    }

    #[test]
    fn test_logql_query_recorded() {
        let mut assistant = assistant();
        let query = assistant.generate_logql_query("api-service", "error");

        let record = &assistant.queries()[0];
        assert_eq!(record.query, query);
        assert_eq!(record.language, QueryLanguage::LogQL);
        assert_eq!(record.purpose, "Find error logs for api-service");
    }

    #[test]
    fn test_incident_dashboard_panels() {
        let mut assistant = assistant();
        let dashboard = assistant.create_incident_dashboard("api-service", "high_error_rate");

        assert_eq!(dashboard.dashboard_id, "incident-api-service-20260115093000");
        assert_eq!(
            dashboard.title,
            "Incident Investigation: api-service - high_error_rate"
        );
        assert_eq!(dashboard.panels.len(), 6);
        assert!(dashboard.panels[0].alert_threshold);
        assert_eq!(dashboard.panels[2].queries.len(), 2);
        assert_eq!(dashboard.panels[3].datasource, Datasource::Loki);
        assert_eq!(
            dashboard.panels[3].query(),
            Some(r#"{service="api-service", level="error"} |= "high_error_rate""#)
        );
        assert_eq!(dashboard.panels[4].query(), Some(r#"{service.name="api-service"}"#));
        assert_eq!(dashboard.panels[5].kind, PanelKind::NodeGraph);
        assert_eq!(dashboard.variables[1].value, "now-1h");
        assert_eq!(dashboard.tags, vec!["incident", "investigation", "api-service"]);
    }

    #[test]
    fn test_conversation_timestamp() {
        let mut assistant = assistant();
        let conversation = assistant.log_conversation("Show me error logs", serde_json::json!("q"));

        assert_eq!(conversation.timestamp, "2026-01-15 09:30:00");
        assert_eq!(conversation.user_query, "Show me error logs");
    }

    #[test]
    fn test_serializes_recorded_lists() {
        let mut assistant = assistant();
        assistant.create_alert("errors", 5.0, "10m");

        let json = serde_json::to_value(&assistant).unwrap();
        assert_eq!(json["alerts"][0]["severity"], "warning");
        assert!(json["dashboards"].as_array().unwrap().is_empty());
        assert!(json.get("clock").is_none());
    }
}
