//! Subcommand implementations

pub mod aws;
pub mod grafana;
pub mod k8s;
