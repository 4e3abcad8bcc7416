//! Upstream chat-completion client for the analyst assistant
//!
//! The server never talks to the LLM service on the frontend's behalf
//! beyond this relay: one user message in, one answer plus citations out,
//! with a pinned system prompt. The bearer token comes from the
//! environment; a missing key fails the request, not startup.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

/// Environment variable holding the upstream bearer token
pub const CHAT_API_KEY_VAR: &str = "SALESDASH_CHAT_API_KEY";

const UPSTREAM_URL: &str = "https://api.perplexity.ai/chat/completions";
const UPSTREAM_MODEL: &str = "sonar-reasoning-pro";

/// System prompt pinned for every relayed conversation
const SYSTEM_PROMPT: &str = "You are an expert Data Analysis Assistant with extensive knowledge in:
- Data analysis and interpretation
- Statistical methods and metrics
- Business intelligence
- Performance indicators
- Sales data analysis
- Trend identification
- Report generation
- Data visualization

Your role is to:
1. Help users understand and analyze their data
2. Explain metrics and their significance
3. Identify trends and patterns
4. Suggest relevant visualizations
5. Provide insights and recommendations
6. Help with report interpretation
7. Answer questions about data analysis methods

Maintain a professional, knowledgeable tone while making complex information accessible. When appropriate, cite industry statistics and studies. Focus on helping users gain actionable insights from their data.";

/// Errors from the upstream relay
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat API key not configured (set SALESDASH_CHAT_API_KEY)")]
    MissingApiKey,

    #[error("upstream authentication failed")]
    Auth,

    #[error("upstream rate limit exceeded")]
    RateLimited,

    #[error("upstream request failed with status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected upstream response shape")]
    MalformedResponse,
}

/// A relayed answer plus any source citations the upstream returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub citations: Vec<String>,
}

/// HTTP client for the upstream chat-completion API
pub struct ChatClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl ChatClient {
    /// Build a client, reading the API key from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            api_key: std::env::var(CHAT_API_KEY_VAR).ok(),
        }
    }

    /// Relay one user message to the upstream chat-completion API
    pub async fn ask(&self, message: &str) -> Result<ChatReply, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingApiKey)?;

        let payload = json!({
            "model": UPSTREAM_MODEL,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": message },
            ],
        });

        let response = self
            .client
            .post(UPSTREAM_URL)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            401 | 403 => return Err(ChatError::Auth),
            429 => return Err(ChatError::RateLimited),
            code if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                tracing::error!(status = code, "chat upstream request failed: {body}");
                return Err(ChatError::UpstreamStatus { status: code, body });
            }
            _ => {}
        }

        let body: UpstreamResponse = response.json().await?;
        parse_reply(body)
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    #[serde(default)]
    choices: Vec<UpstreamChoice>,
    #[serde(default)]
    citations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamChoice {
    message: UpstreamMessage,
}

#[derive(Debug, Deserialize)]
struct UpstreamMessage {
    #[serde(default)]
    content: String,
}

fn parse_reply(body: UpstreamResponse) -> Result<ChatReply, ChatError> {
    let citations = body.citations;
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or(ChatError::MalformedResponse)?;
    if choice.message.content.is_empty() {
        return Err(ChatError::MalformedResponse);
    }
    Ok(ChatReply {
        response: choice.message.content,
        citations,
    })
}
