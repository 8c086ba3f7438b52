use async_trait::async_trait;
use chatrs_core::{ChatBackend, Role};
use reqwest::Client;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

const DEFAULT_HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize)]
struct WireMessage {
    role: Role,
    content: String,
}

/// Hosted chat session speaking the OpenAI-compatible chat completions API.
///
/// The session owns the running conversation: each successful `chat` call
/// appends the prompt and the reply. Only the last `history_limit` stored
/// messages are kept and resent with each new prompt.
pub struct HostedChatSession {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    history_limit: usize,
    messages: Mutex<Vec<WireMessage>>,
}

impl HostedChatSession {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let base_url = base_url.into();
        info!("Creating HostedChatSession for {base_url}");
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
            model: model.into(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            messages: Mutex::new(Vec::new()),
        })
    }

    /// Set how many earlier messages accompany each prompt.
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Number of messages the backend has seen so far.
    pub async fn context_len(&self) -> usize {
        self.messages.lock().await.len()
    }

    async fn try_send(&self, request: &serde_json::Value) -> anyhow::Result<String> {
        let mut builder = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .json(request);
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing content"))?
            .to_string();

        Ok(content)
    }
}

#[async_trait]
impl ChatBackend for HostedChatSession {
    async fn chat(&self, prompt: &str) -> anyhow::Result<String> {
        let mut messages = self.messages.lock().await;

        let start = messages.len().saturating_sub(self.history_limit);
        let mut outgoing = messages[start..].to_vec();
        outgoing.push(WireMessage {
            role: Role::User,
            content: prompt.to_string(),
        });

        let request = json!({
            "model": self.model,
            "messages": outgoing,
        });

        info!("Sending request to hosted chat: model={}", self.model);
        let reply = self.try_send(&request).await?;
        debug!("Received {} chars from hosted chat", reply.len());

        messages.push(WireMessage {
            role: Role::User,
            content: prompt.to_string(),
        });
        messages.push(WireMessage {
            role: Role::Assistant,
            content: reply.clone(),
        });
        let overflow = messages.len().saturating_sub(self.history_limit);
        messages.drain(..overflow);

        Ok(reply)
    }
}
