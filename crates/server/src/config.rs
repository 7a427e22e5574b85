//! Server configuration

use anyhow::{Context, Result};
use assist_lib::kube::execution_allowed;
use serde::{Deserialize, Deserializer};

/// Server configuration, read from plain environment variables
/// (`PORT`, `ALLOW_KUBECTL`)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether `?run=true` may execute kubectl
    #[serde(default, deserialize_with = "deserialize_allow_flag")]
    pub allow_kubectl: bool,
}

/// Only the exact values accepted by [`execution_allowed`] enable execution;
/// anything else leaves it disabled
fn deserialize_allow_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().is_some_and(execution_allowed))
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            allow_kubectl: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::load_from(config::Environment::default())
    }

    /// Load configuration from an explicit environment source.
    /// Values stay strings; `port` is parsed on deserialization.
    pub fn load_from(environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(environment)
            .build()
            .context("Failed to read server configuration")?;

        config
            .try_deserialize()
            .context("Invalid server configuration")
    }
}
