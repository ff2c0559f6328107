//! HTTP client for the classification oracle.
//!
//! The oracle is any endpoint speaking the OpenAI-compatible
//! `/chat/completions` format. It is used strictly as a classifier - bounded
//! non-streaming calls, temperature 0, thinking suppressed - never as a
//! content generator.

use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct OracleClient {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: String,
    /// Pre-computed chat completions URL.
    cached_chat_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_body: Option<ThinkingBudget>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: String,
}

/// Zero thinking-token budget - forces the oracle into deterministic
/// classification mode instead of emitting reasoning preambles.
#[derive(Debug, Serialize)]
pub struct ThinkingBudget {
    pub min_thinking_tokens: u32,
    pub max_thinking_tokens: u32,
}

impl ThinkingBudget {
    pub fn suppressed() -> Self {
        Self {
            min_thinking_tokens: 0,
            max_thinking_tokens: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    reasoning_content: Option<String>,
}

impl OracleClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let cached_chat_url = if base_url.contains("chat/completions") {
            base_url.to_string()
        } else {
            format!("{base_url}/chat/completions")
        };

        Self {
            cached_auth_header: format!("Bearer {api_key}"),
            cached_chat_url,
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .pool_max_idle_per_host(10)
                .pool_idle_timeout(std::time::Duration::from_secs(90))
                .tcp_keepalive(std::time::Duration::from_secs(60))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    pub fn chat_completions_url(&self) -> &str {
        &self.cached_chat_url
    }

    /// One bounded request/response round trip. Returns the reply text,
    /// preferring `message.content` and falling back to `reasoning_content`
    /// when the primary field is empty.
    pub async fn complete(&self, request: &ChatRequest) -> anyhow::Result<String> {
        let response = self
            .client
            .post(&self.cached_chat_url)
            .header("Authorization", &self.cached_auth_header)
            .json(request)
            .send()
            .await
            .context("oracle request failed")?;

        if !response.status().is_success() {
            anyhow::bail!("oracle HTTP error: {}", response.status());
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("oracle response JSON decode failed")?;

        Ok(extract_reply_text(&chat_response))
    }
}

fn extract_reply_text(response: &ChatResponse) -> String {
    let Some(message) = response.choices.first().map(|c| &c.message) else {
        return String::new();
    };

    let content = message.content.as_deref().unwrap_or("").trim();
    if !content.is_empty() {
        return content.to_string();
    }
    message
        .reasoning_content
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string()
}
