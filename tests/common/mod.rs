use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use assistant_client::services::agent_client::RealAgentApi;

pub fn agent_for(server: &MockServer) -> RealAgentApi {
    RealAgentApi::builder()
        .client(reqwest::Client::new())
        .base_url(server.uri())
        .build()
}

pub async fn mount_agent(server: &MockServer, response: Value) {
    Mock::given(method("POST"))
        .and(path("/agent"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_agent_with_status(server: &MockServer, status: u16, response: Value) {
    Mock::given(method("POST"))
        .and(path("/agent"))
        .respond_with(ResponseTemplate::new(status).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_agent_plain_text(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_agent_for_prompt(server: &MockServer, prompt: &str, response: Value) {
    Mock::given(method("POST"))
        .and(path("/agent"))
        .and(body_json(json!({ "prompt": prompt })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_health(server: &MockServer, response: Value) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

pub fn render_config(base: &str) -> tempfile::NamedTempFile {
    let cfg_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        cfg_file.path(),
        format!("agent:\n  base_url: {}\n  log_prompt_preview_chars: 80\n", base),
    )
    .unwrap();
    cfg_file
}
