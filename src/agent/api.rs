use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{
    Client,
    Response,
    StatusCode,
};

use super::TranslateCall;
use crate::core::{
    LingotError,
    TranslationRequest,
    TranslationResult,
};

pub const DEFAULT_AGENT_URL: &str = "http://localhost:3500/api";

/// HTTP client for the translation agent: `POST {base}/translate` plus a
/// `GET {base}/health` probe for the status dot.
#[derive(Clone)]
pub struct AgentApi {
    client: Client,
    base_url: String,
}

impl AgentApi {
    pub fn new(base_url: &str) -> Result<Self, LingotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| LingotError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, base_url: normalize_base_url(base_url) })
    }

    /// Same client, different endpoint. Rebuilding the reqwest client on a
    /// settings change would drop its connection pool for nothing.
    pub fn with_base_url(&self, base_url: &str) -> Self {
        Self { client: self.client.clone(), base_url: normalize_base_url(base_url) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, LingotError> {
        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(request)
            .send()
            .await?;

        read_translation(response).await
    }

    pub async fn check_health(&self) -> Result<(), LingotError> {
        let response =
            self.client.get(format!("{}/health", self.base_url)).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(LingotError::Agent(format!("health probe returned {}", response.status())))
        }
    }
}

impl TranslateCall for AgentApi {
    fn invoke(
        &self,
        request: TranslationRequest,
    ) -> BoxFuture<'static, Result<TranslationResult, LingotError>> {
        let api = self.clone();
        Box::pin(async move { api.translate(&request).await })
    }

    fn health(&self) -> BoxFuture<'static, Result<(), LingotError>> {
        let api = self.clone();
        Box::pin(async move { api.check_health().await })
    }
}

async fn read_translation(response: Response) -> Result<TranslationResult, LingotError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(LingotError::Agent(error_message(status, &body)));
    }

    Ok(serde_json::from_str(&body)?)
}

/// Pull a human-readable message out of an error body. Agent failures come
/// back as `{"error": "..."}`; anything else falls back to the status line.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }

    format!("agent returned {}", status)
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_error_field() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, r#"{"error": "Upstream timeout"}"#),
            "Upstream timeout"
        );
    }

    #[test]
    fn error_message_accepts_message_field() {
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, r#"{"message": "missing API key"}"#),
            "missing API key"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            "agent returned 500 Internal Server Error"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, r#"{"error": ""}"#),
            "agent returned 502 Bad Gateway"
        );
    }

    #[test]
    fn base_url_is_normalized() {
        let api = AgentApi::new(" http://localhost:3500/api/ ").expect("build client");
        assert_eq!(api.base_url(), "http://localhost:3500/api");

        let moved = api.with_base_url("https://agent.example.com");
        assert_eq!(moved.base_url(), "https://agent.example.com");
    }
}
