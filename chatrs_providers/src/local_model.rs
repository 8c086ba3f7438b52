use async_trait::async_trait;
use chatrs_core::TextGenerator;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::info;

/// Client for a text-generation server hosting a causal language model.
///
/// `generate` returns the full decoded sequence, prompt included, the way a
/// causal model's first output sequence decodes.
pub struct LocalModelClient {
    client: Client,
    base_url: String,
    max_new_tokens: u32,
}

impl LocalModelClient {
    pub fn new(
        base_url: impl Into<String>,
        max_new_tokens: u32,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_new_tokens,
        })
    }

    /// Probe the server so a missing model is reported at startup rather than
    /// on the first prompt.
    pub async fn connect(self) -> anyhow::Result<Self> {
        let server_info = self
            .client
            .get(format!("{}/info", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let model_id = server_info["model_id"].as_str().unwrap_or("unknown");
        info!("Connected to model server at {}: {model_id}", self.base_url);
        Ok(self)
    }

    #[must_use]
    pub const fn max_new_tokens(&self) -> u32 {
        self.max_new_tokens
    }
}

#[async_trait]
impl TextGenerator for LocalModelClient {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let request = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": self.max_new_tokens,
                "return_full_text": true,
            },
        });

        info!(
            "Generating with local model: max_new_tokens={}",
            self.max_new_tokens
        );

        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        let text = response["generated_text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing generated_text"))?
            .to_string();

        Ok(text)
    }
}
