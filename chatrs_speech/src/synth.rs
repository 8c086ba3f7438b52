//! Text-to-speech synthesis backends.

use crate::error::{SpeechError, SpeechResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Turns text into encoded audio bytes (MP3).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> SpeechResult<Vec<u8>>;
}

/// OpenAI-compatible `/audio/speech` backend.
#[derive(Debug, Clone)]
pub struct HttpSpeechSynthesizer {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    voice: String,
}

impl HttpSpeechSynthesizer {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        voice: impl Into<String>,
        timeout: Duration,
    ) -> SpeechResult<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            voice: voice.into(),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> SpeechResult<Vec<u8>> {
        let url = format!("{}/audio/speech", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.model,
            "input": text,
            "voice": self.voice,
            "response_format": "mp3",
        });

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.bearer_auth(key);
        }

        let audio = request.send().await?.error_for_status()?.bytes().await?;
        if audio.is_empty() {
            return Err(SpeechError::Synthesis("empty audio response".to_string()));
        }

        debug!("Synthesized {} bytes of audio", audio.len());
        Ok(audio.to_vec())
    }
}
