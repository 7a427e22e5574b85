//! Built-in explanations of observability concepts

const SLO: &str = "\
Service Level Objective (SLO):
- A target value for a service level indicator (SLI)
- Example: \"99.9% of requests should complete within 500ms\"
- Helps define reliability targets
- Error budget = 100% - SLO target

In Grafana:
1. Use Prometheus metrics to calculate SLI
2. Create dashboard panels to visualize SLO compliance
3. Set alerts for burn rate (when error budget depletes too fast)";

const SLA: &str = "\
Service Level Agreement (SLA):
- A formal contract with customers about service availability
- Includes penalties if SLO targets are not met
- Example: \"99.95% uptime or customer gets refund\"
- SLA ≥ SLO (SLA is more strict)

Difference from SLO:
- SLO = Internal target for engineering
- SLA = External promise to customers";

const PROMQL: &str = "\
Prometheus Query Language (PromQL):
- Query language for Prometheus metrics
- Examples:
  * Rate: rate(http_requests_total[5m])
  * Average: avg(cpu_usage_percent)
  * Percentile: histogram_quantile(0.95, ...)

Common functions:
- rate(): Calculate per-second rate
- sum(): Aggregate across dimensions
- histogram_quantile(): Calculate percentiles";

const LOGQL: &str = "\
Loki Query Language (LogQL):
- Query language for Loki logs (similar to PromQL)
- Examples:
  * Filter: {service=\"api\"} |= \"error\"
  * Parse JSON: {app=\"web\"} | json
  * Metrics: rate({job=\"varlogs\"}[5m])

Operators:
- |=: Contains string
- !=: Does not contain
- |~: Regex match
- | json: Parse JSON logs";

/// Concept names with a built-in explanation
pub const KNOWN_CONCEPTS: [&str; 4] = ["SLO", "SLA", "PromQL", "LogQL"];

/// Explain a concept; names are matched exactly
pub fn explain(concept: &str) -> String {
    match concept {
        "SLO" => SLO.to_string(),
        "SLA" => SLA.to_string(),
        "PromQL" => PROMQL.to_string(),
        "LogQL" => LOGQL.to_string(),
        other => format!("Concept '{}' not found in knowledge base.", other),
    }
}
