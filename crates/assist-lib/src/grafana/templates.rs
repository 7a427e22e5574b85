//! Query templates for PromQL, LogQL and SLI generation
//!
//! Every generator here is total: a name outside the known table degrades
//! to a generic `{metric}{service="..."}` selector instead of failing.

use crate::models::PanelKind;

/// Metrics with a dedicated PromQL template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricTemplate {
    RequestRate,
    ErrorRate,
    LatencyP95,
    LatencyP99,
    CpuUsage,
    MemoryUsage,
    ActiveConnections,
}

impl MetricTemplate {
    pub const ALL: [MetricTemplate; 7] = [
        MetricTemplate::RequestRate,
        MetricTemplate::ErrorRate,
        MetricTemplate::LatencyP95,
        MetricTemplate::LatencyP99,
        MetricTemplate::CpuUsage,
        MetricTemplate::MemoryUsage,
        MetricTemplate::ActiveConnections,
    ];

    /// Look up the template registered under a metric name
    pub fn from_name(metric: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == metric)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MetricTemplate::RequestRate => "request_rate",
            MetricTemplate::ErrorRate => "error_rate",
            MetricTemplate::LatencyP95 => "latency_p95",
            MetricTemplate::LatencyP99 => "latency_p99",
            MetricTemplate::CpuUsage => "cpu_usage",
            MetricTemplate::MemoryUsage => "memory_usage",
            MetricTemplate::ActiveConnections => "active_connections",
        }
    }

    /// Substitute the service label into the template
    pub fn render(&self, service: &str) -> String {
        match self {
            MetricTemplate::RequestRate => request_rate(service),
            MetricTemplate::ErrorRate => format!(
                "{} / {}",
                server_errors(service),
                request_rate(service)
            ),
            MetricTemplate::LatencyP95 => latency_quantile(service, "0.95"),
            MetricTemplate::LatencyP99 => latency_quantile(service, "0.99"),
            MetricTemplate::CpuUsage => cpu_percent(service),
            MetricTemplate::MemoryUsage => memory_megabytes(service),
            MetricTemplate::ActiveConnections => {
                format!(r#"http_server_active_connections{{service="{service}"}}"#)
            }
        }
    }
}

/// PromQL for a metric, falling back to a plain selector for unknown names
pub fn promql(service: &str, metric: &str) -> String {
    match MetricTemplate::from_name(metric) {
        Some(template) => template.render(service),
        None => fallback_selector(service, metric),
    }
}

/// SLI query backing an SLO on `metric`
pub fn sli_query(service: &str, metric: &str) -> String {
    if metric.contains("latency") {
        format!("{} < 0.5", latency_quantile(service, "0.95"))
    } else if metric.contains("availability") {
        format!(
            r#"sum(rate(http_requests_total{{service="{service}",status!~"5.."}}[5m])) / sum(rate(http_requests_total{{service="{service}"}}[5m]))"#
        )
    } else {
        fallback_selector(service, metric)
    }
}

/// LogQL query for a service's logs at a given level
pub fn logql(service: &str, level: &str) -> String {
    format!(
        r#"{{service="{service}", level="{level}"}} |= "error" | json | line_format "{{{{.timestamp}}}} [{{{{.level}}}}] {{{{.message}}}}""#
    )
}

/// Panel title for a metric name (`latency_p95` -> `Latency P95`)
pub fn panel_title(metric: &str) -> String {
    title_case(&metric.replace('_', " "))
}

/// Rates and latencies plot over time; everything else is a single stat
pub fn panel_kind(metric: &str) -> PanelKind {
    if metric.contains("rate") || metric.contains("latency") {
        PanelKind::Graph
    } else {
        PanelKind::Stat
    }
}

pub(crate) fn request_rate(service: &str) -> String {
    format!(r#"rate(http_requests_total{{service="{service}"}}[5m])"#)
}

pub(crate) fn server_errors(service: &str) -> String {
    format!(r#"rate(http_requests_total{{service="{service}",status=~"5.."}}[5m])"#)
}

pub(crate) fn latency_quantile(service: &str, quantile: &str) -> String {
    format!(
        r#"histogram_quantile({quantile}, rate(http_request_duration_seconds_bucket{{service="{service}"}}[5m]))"#
    )
}

pub(crate) fn latency_buckets(service: &str) -> String {
    format!(r#"rate(http_request_duration_seconds_bucket{{service="{service}"}}[5m])"#)
}

pub(crate) fn cpu_percent(service: &str) -> String {
    format!(r#"rate(process_cpu_seconds_total{{service="{service}"}}[5m]) * 100"#)
}

pub(crate) fn memory_megabytes(service: &str) -> String {
    format!(r#"process_resident_memory_bytes{{service="{service}"}} / 1024 / 1024"#)
}

fn fallback_selector(service: &str, metric: &str) -> String {
    format!(r#"{metric}{{service="{service}"}}"#)
}

/// Uppercase the first letter of every word, lowercase the rest.
/// A "word" starts after any non-alphabetic character, so `p95` stays `P95`.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
