use async_trait::async_trait;
use serde_json::Value;

/// Defines the interface for the locally running assistant agent service.
///
/// This trait allows consumers to abstract over different backend implementations
/// (e.g., real HTTP clients, mocks for testing).
///
/// Any implementation must be thread-safe (`Send + Sync`) and provide an asynchronous
/// method for sending prompts and receiving the agent's reply.
#[async_trait]
pub trait AgentApi: Send + Sync {
    /// Sends a prompt to the agent and returns the decoded JSON reply.
    async fn ask(&self, prompt: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>>;
}
