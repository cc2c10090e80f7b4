pub mod services;
pub mod traits;

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::services::agent_client::RealAgentApi;
use crate::services::settings::{AppConfig, load_config};
use crate::traits::agent_api::AgentApi;

/// Sends a prompt to the agent at the default local endpoint and returns the
/// decoded JSON reply. One POST per call; failures propagate to the caller.
pub async fn ask_agent(prompt: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
    RealAgentApi::default().ask(prompt).await
}

/// High-level entrypoint: load config, init logging, send one prompt
pub async fn run_with_config_path(path: &str, prompt: &str) -> std::io::Result<Value> {
    let cfg = load_config_and_init_logging(path)?;

    let agent: Arc<dyn AgentApi> = Arc::new(RealAgentApi::from_config(&cfg.agent));
    info!(prompt_len = prompt.len(), "query starting");
    agent
        .ask(prompt)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
}

/// High-level entrypoint: load config, init logging, probe the agent's health endpoint
pub async fn health_with_config_path(path: &str) -> std::io::Result<Value> {
    let cfg = load_config_and_init_logging(path)?;

    let agent = RealAgentApi::from_config(&cfg.agent);
    agent
        .health()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
}

fn load_config_and_init_logging(path: &str) -> std::io::Result<AppConfig> {
    // Load YAML config
    let cfg: AppConfig = load_config(path).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to load {}: {}", path, e),
        )
    })?;

    // Initialize structured logging (default to info if RUST_LOG not set)
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_target(false)
        .compact()
        .try_init();

    Ok(cfg)
}
