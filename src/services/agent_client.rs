use async_trait::async_trait;
use bon::Builder;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::services::settings::AgentConfig;
use crate::traits::agent_api::AgentApi;

/// Fixed address of the locally running agent service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// A real implementation of the `AgentApi` trait that sends HTTP requests to the
/// local agent service.
#[derive(Builder)]
pub struct RealAgentApi {
    pub client: Client,
    pub base_url: String,
    pub preview_chars: Option<usize>,
}

impl Default for RealAgentApi {
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            preview_chars: None,
        }
    }
}

impl RealAgentApi {
    /// Creates a client from the `agent` section of the config file.
    /// Missing fields fall back to the default local endpoint.
    pub fn from_config(cfg: &AgentConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: cfg
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            preview_chars: cfg.log_prompt_preview_chars,
        }
    }

    /// Probes the agent's health endpoint and returns the decoded document.
    ///
    /// Decoded under the same rules as `ask`: any JSON body comes back
    /// regardless of the HTTP status code.
    pub async fn health(&self) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));
        info!(url = %url, "agent: health probe");
        let res = self.client.get(&url).send().await?;
        let body: Value = res.json().await?;
        Ok(body)
    }
}

#[async_trait]
impl AgentApi for RealAgentApi {
    /// Sends a prompt to the agent and returns the decoded JSON reply.
    ///
    /// The HTTP status code is not inspected: the agent reports failures in the
    /// response body, so any JSON-decodable body is returned to the caller as-is.
    /// Transport and decode errors propagate unchanged; there are no retries.
    async fn ask(&self, prompt: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/agent", self.base_url.trim_end_matches('/'));
        let preview_len = self.preview_chars.unwrap_or(200);
        let prompt_preview: String = prompt.chars().take(preview_len).collect();
        info!(
            url = %url,
            prompt_len = prompt.len(),
            prompt_preview = %prompt_preview,
            "agent: ask request"
        );

        let res = self
            .client
            .post(&url)
            .json(&AskRequest { prompt })
            .send()
            .await?;

        let status = res.status();
        let body: Value = res.json().await?;
        let response_preview: String = body.to_string().chars().take(preview_len).collect();
        info!(
            status = %status,
            response_preview = %response_preview,
            "agent: ask response"
        );
        Ok(body)
    }
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    prompt: &'a str,
}
