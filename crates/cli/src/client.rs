//! HTTP client for the MCP Kubernetes command server

use anyhow::{Context, Result};
use assist_lib::kube::ParsedCommand;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

/// Client for `POST /command`
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Clone, Serialize)]
struct CommandRequest<'a> {
    text: &'a str,
}

/// Body of every `/command` reply; which fields are set depends on the status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed: Option<ParsedCommand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(180))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid server URL")?;

        Ok(Self { client, base_url })
    }

    /// Ask the server to translate `text`, and run it when `run` is set.
    /// Documented error statuses come back as a reply with `error` set.
    pub async fn post_command(&self, text: &str, run: bool) -> Result<CommandReply> {
        let mut url = self.base_url.join("command").context("Invalid path")?;
        if run {
            url.query_pairs_mut().append_pair("run", "true");
        }

        let response = self
            .client
            .post(url)
            .json(&CommandRequest { text })
            .send()
            .await
            .context("Failed to send request")?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::BAD_REQUEST | StatusCode::FORBIDDEN | StatusCode::INTERNAL_SERVER_ERROR => {}
            status => {
                let body = response.text().await.unwrap_or_default();
                anyhow::bail!("API error ({}): {}", status, body);
            }
        }

        response.json().await.context("Failed to parse response")
    }
}
