//! Grafana assistant walkthrough

use anyhow::Result;
use assist_lib::grafana::{GrafanaAssistant, DEFAULT_ALERT_DURATION, DEFAULT_LOG_LEVEL};
use colored::Colorize;
use serde_json::json;

use crate::output::{
    color_severity, print_banner, print_json, print_request, print_section, print_success,
    print_table, CountRow, OutputFormat,
};

const WIDTH: usize = 100;
const SERVICE: &str = "api-service";

const DASHBOARD_METRICS: [&str; 6] = [
    "request_rate",
    "error_rate",
    "latency_p95",
    "latency_p99",
    "cpu_usage",
    "memory_usage",
];

/// Run the walkthrough; JSON output prints the recorder instead of narration
pub fn run(format: OutputFormat) -> Result<()> {
    let mut assistant = GrafanaAssistant::new();
    let narrate = format.is_table();

    if narrate {
        print_banner("GRAFANA ASSISTANT - AI-DRIVEN OBSERVABILITY DEMO", WIDTH);
    }

    create_dashboard(&mut assistant, narrate)?;
    create_alert(&mut assistant, narrate)?;
    create_slo(&mut assistant, narrate)?;
    investigate_incident(&mut assistant, narrate)?;
    explain_concepts(&mut assistant, narrate);
    generate_logql(&mut assistant, narrate);

    if narrate {
        print_impact_summary(&assistant);
        Ok(())
    } else {
        print_json(&json!({
            "summary": assistant.summary(),
            "records": assistant,
        }))
    }
}

fn create_dashboard(assistant: &mut GrafanaAssistant, narrate: bool) -> Result<()> {
    let request = "Create a dashboard for monitoring my API service";
    let dashboard = assistant.generate_dashboard(SERVICE, &DASHBOARD_METRICS);
    assistant.log_conversation(request, serde_json::to_value(&dashboard)?);

    if narrate {
        print_section("Demo 1: Create Dashboard for API Service", WIDTH);
        print_request(request);
        print_success("Grafana Assistant Response:");
        println!("   Created dashboard: {}", dashboard.title.cyan());
        println!("   Dashboard ID: {}", dashboard.dashboard_id);
        println!(
            "   Refresh Rate: {}",
            dashboard.refresh.as_deref().unwrap_or("-")
        );
        println!("   Panels created: {}", dashboard.panels.len());
        println!();
        println!("   Panels:");
        for panel in &dashboard.panels {
            println!("   - {}: {}", panel.title, panel.kind);
            println!("     Query: {}", panel.query().unwrap_or_default());
        }
        println!();
    }
    Ok(())
}

fn create_alert(assistant: &mut GrafanaAssistant, narrate: bool) -> Result<()> {
    let request = "Create a CPU usage alert that triggers when CPU exceeds 80% for 5 minutes";
    let alert = assistant.create_alert("cpu_usage_percent", 80.0, DEFAULT_ALERT_DURATION);
    assistant.log_conversation(request, serde_json::to_value(&alert)?);

    if narrate {
        print_section("Demo 2: Create CPU Usage Alert", WIDTH);
        print_request(request);
        print_success("Grafana Assistant Response:");
        println!("   Alert created: {}", alert.name.cyan());
        println!("   Alert ID: {}", alert.alert_id);
        println!("   Condition: {}", alert.condition);
        println!("   Duration: {}", alert.duration);
        println!("   Severity: {}", color_severity(alert.severity));
        println!(
            "   Notifications: {}",
            alert.notification_channels.join(", ")
        );
        println!("   Query: {}", alert.query);
        println!();
    }
    Ok(())
}

fn create_slo(assistant: &mut GrafanaAssistant, narrate: bool) -> Result<()> {
    let request = "Create an SLO dashboard with 99.9% availability target";
    let slo = assistant.create_slo(SERVICE, "latency", 99.9, "30d");
    assistant.log_conversation(request, serde_json::to_value(&slo)?);

    if narrate {
        print_section("Demo 3: Setup SLO for API Latency", WIDTH);
        print_request(request);
        print_success("Grafana Assistant Response:");
        println!("   SLO created: {}", slo.name.cyan());
        println!("   SLO ID: {}", slo.slo_id);
        println!("   Target: {}", slo.objective);
        println!("   Time Window: {}", slo.window);
        println!("   Error Budget: {}%", slo.error_budget);
        println!("   SLI Query: {}", slo.sli_query);
        println!();
        println!("   Dashboard Panels:");
        for panel in &slo.dashboard_panels {
            println!("   - {} ({})", panel.title, panel.kind);
        }
        println!();
    }
    Ok(())
}

fn investigate_incident(assistant: &mut GrafanaAssistant, narrate: bool) -> Result<()> {
    let request = "Create an incident investigation dashboard for high error rate";
    let dashboard = assistant.create_incident_dashboard(SERVICE, "high_error_rate");
    assistant.log_conversation(request, serde_json::to_value(&dashboard)?);

    if narrate {
        print_section("Demo 4: Incident Investigation Dashboard", WIDTH);
        print_request(request);
        print_success("Grafana Assistant Response:");
        println!("   Dashboard created: {}", dashboard.title.cyan());
        println!("   Dashboard ID: {}", dashboard.dashboard_id);
        println!();
        println!("   Investigation Panels:");
        for panel in &dashboard.panels {
            println!("   - {} ({})", panel.title, panel.kind);
            for query in &panel.queries {
                println!("     Query: {}", query);
            }
        }
        println!();
    }
    Ok(())
}

fn explain_concepts(assistant: &mut GrafanaAssistant, narrate: bool) {
    let request = "Explain the difference between SLO and SLA";
    let slo = assistant.explain_concept("SLO");
    let sla = assistant.explain_concept("SLA");
    assistant.log_conversation(request, json!({ "SLO": slo, "SLA": sla }));

    if narrate {
        print_section("Demo 5: Explain Observability Concepts", WIDTH);
        print_request(request);
        print_success("Grafana Assistant Response:");
        println!("{}", slo);
        println!("{}", sla);
        println!();
    }
}

fn generate_logql(assistant: &mut GrafanaAssistant, narrate: bool) {
    let request = "Show me error logs for the API service";
    let query = assistant.generate_logql_query(SERVICE, DEFAULT_LOG_LEVEL);
    assistant.log_conversation(request, json!({ "logql": query }));

    if narrate {
        print_section("Demo 6: Generate LogQL Query", WIDTH);
        print_request(request);
        print_success("Grafana Assistant Response:");
        println!("   LogQL Query: {}", query);
        println!();
    }
}

fn print_impact_summary(assistant: &GrafanaAssistant) {
    let summary = assistant.summary();

    print_banner("GRAFANA ASSISTANT - IMPACT SUMMARY", WIDTH);
    print_table(vec![
        CountRow::new("Dashboards Created", summary.dashboards),
        CountRow::new("Alerts Configured", summary.alerts),
        CountRow::new("SLOs Defined", summary.slos),
        CountRow::new("Queries Generated", summary.queries),
        CountRow::new("Conversations", summary.conversations),
    ]);
    println!();
}
