//! Natural-language to kubectl translation
//!
//! Recognizes a fixed set of request patterns. Rules are tried in order and
//! the first match wins; anything else maps to [`Intent::Unknown`] with no
//! commands.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Namespace used when the request names none
pub const DEFAULT_NAMESPACE: &str = "default";

/// Note returned for unrecognized requests
pub const UNKNOWN_NOTE: &str = "Command not recognized; try one of the supported patterns.";

/// Recognized kind of request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    ShowPods,
    ScaleDeployment,
    InvestigateCrash,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ShowPods => "show-pods",
            Intent::ScaleDeployment => "scale-deployment",
            Intent::InvestigateCrash => "investigate-crash",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translation result: intent, suggested kubectl lines and a human note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub intent: Intent,
    pub kubectl: Vec<String>,
    pub note: String,
}

struct Patterns {
    namespace: Regex,
    scale: Regex,
    service: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        namespace: Regex::new(r"namespace\s+([A-Za-z0-9_]+)").expect("valid namespace pattern"),
        scale: Regex::new(r"scale .*deployment\s+(\S+)\s+to\s+([0-9]+)\s+replicas")
            .expect("valid scale pattern"),
        service: Regex::new(r"service\s+(\S+)").expect("valid service pattern"),
    })
}

/// Translate a natural-language request into kubectl commands.
/// Matching is case-insensitive; empty input yields `Unknown`.
pub fn parse_command(text: &str) -> ParsedCommand {
    let text = text.to_lowercase();
    let patterns = patterns();
    let namespace = || capture(&patterns.namespace, &text).unwrap_or(DEFAULT_NAMESPACE);

    if text.contains("show") && text.contains("pods") {
        let ns = namespace();
        return ParsedCommand {
            intent: Intent::ShowPods,
            kubectl: vec![format!("kubectl get pods -n {} -o wide", ns)],
            note: format!("Listing pods in namespace '{}'", ns),
        };
    }

    if let Some(caps) = patterns.scale.captures(&text) {
        let deployment = &caps[1];
        let replicas = &caps[2];
        let ns = namespace();
        return ParsedCommand {
            intent: Intent::ScaleDeployment,
            kubectl: vec![
                format!(
                    "kubectl scale deployment/{} --replicas={} -n {}",
                    deployment, replicas, ns
                ),
                format!(
                    "kubectl rollout status deployment/{} -n {} --timeout=120s",
                    deployment, ns
                ),
            ],
            note: format!(
                "Scale deployment '{}' to {} replicas in '{}' and verify rollout",
                deployment, replicas, ns
            ),
        };
    }

    if (text.contains("investigate") && text.contains("crash")) || text.contains("crashing") {
        let ns = namespace();
        let service = capture(&patterns.service, &text);
        let kubectl = match service {
            Some(svc) => vec![
                format!("kubectl get pods -l app={} -n {} -o wide", svc, ns),
                format!("kubectl logs -l app={} -n {} --tail=200", svc, ns),
                format!("kubectl describe pods -l app={} -n {}", svc, ns),
            ],
            None => vec![
                format!("kubectl get pods -n {} -o wide", ns),
                format!(
                    "kubectl get events -n {} --sort-by=.metadata.creationTimestamp",
                    ns
                ),
                format!(
                    "kubectl logs -n {} --all-containers --tail=200 --selector='' || true",
                    ns
                ),
            ],
        };
        let subject = service
            .map(|svc| format!(" '{}'", svc))
            .unwrap_or_default();
        return ParsedCommand {
            intent: Intent::InvestigateCrash,
            kubectl,
            note: format!(
                "Investigate crashing service{} in namespace '{}'",
                subject, ns
            ),
        };
    }

    ParsedCommand {
        intent: Intent::Unknown,
        kubectl: Vec::new(),
        note: UNKNOWN_NOTE.to_string(),
    }
}

fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_pods_default_namespace() {
        let parsed = parse_command("Show me the pods");
        assert_eq!(parsed.intent, Intent::ShowPods);
        assert_eq!(parsed.kubectl, vec!["kubectl get pods -n default -o wide"]);
        assert_eq!(parsed.note, "Listing pods in namespace 'default'");
    }

    #[test]
    fn test_show_pods_with_namespace() {
        let parsed = parse_command("show pods in namespace Payments");
        assert_eq!(parsed.kubectl, vec!["kubectl get pods -n payments -o wide"]);
    }

    #[test]
    fn test_scale_deployment() {
        let parsed = parse_command("Please scale the deployment web-api to 5 replicas in namespace prod");
        assert_eq!(parsed.intent, Intent::ScaleDeployment);
        assert_eq!(
            parsed.kubectl,
            vec![
                "kubectl scale deployment/web-api --replicas=5 -n prod",
                "kubectl rollout status deployment/web-api -n prod --timeout=120s",
            ]
        );
        assert_eq!(
            parsed.note,
            "Scale deployment 'web-api' to 5 replicas in 'prod' and verify rollout"
        );
    }

    #[test]
    fn test_scale_requires_replica_count() {
        let parsed = parse_command("scale deployment web to many replicas");
        assert_eq!(parsed.intent, Intent::Unknown);
    }

    #[test]
    fn test_investigate_crash_with_service() {
        let parsed = parse_command("Investigate why service checkout keeps crashing");
        assert_eq!(parsed.intent, Intent::InvestigateCrash);
        assert_eq!(
            parsed.kubectl,
            vec![
                "kubectl get pods -l app=checkout -n default -o wide",
                "kubectl logs -l app=checkout -n default --tail=200",
                "kubectl describe pods -l app=checkout -n default",
            ]
        );
        assert_eq!(
            parsed.note,
            "Investigate crashing service 'checkout' in namespace 'default'"
        );
    }

    #[test]
    fn test_investigate_crash_without_service() {
        let parsed = parse_command("investigate the crash in namespace staging");
        assert_eq!(parsed.intent, Intent::InvestigateCrash);
        assert_eq!(parsed.kubectl.len(), 3);
        assert_eq!(
            parsed.kubectl[1],
            "kubectl get events -n staging --sort-by=.metadata.creationTimestamp"
        );
        assert!(parsed.kubectl[2].ends_with("|| true"));
        assert_eq!(
            parsed.note,
            "Investigate crashing service in namespace 'staging'"
        );
    }

    #[test]
    fn test_show_pods_wins_over_crash() {
        // rule order: show-pods is checked first
        let parsed = parse_command("show pods that are crashing");
        assert_eq!(parsed.intent, Intent::ShowPods);
    }

    #[test]
    fn test_unknown_request() {
        let parsed = parse_command("delete everything");
        assert_eq!(parsed.intent, Intent::Unknown);
        assert!(parsed.kubectl.is_empty());
        assert_eq!(parsed.note, UNKNOWN_NOTE);

        assert_eq!(parse_command("").intent, Intent::Unknown);
    }

    #[test]
    fn test_intent_serialization() {
        let parsed = parse_command("show pods");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["intent"], "show-pods");
        assert_eq!(Intent::InvestigateCrash.to_string(), "investigate-crash");
    }
}
