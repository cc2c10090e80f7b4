use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub agent: AgentConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AgentConfig {
    pub base_url: Option<String>,                // defaults to http://localhost:8001
    pub log_prompt_preview_chars: Option<usize>, // how many prompt chars to log
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    let content = fs::read_to_string(path)?;
    let cfg: AppConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}
