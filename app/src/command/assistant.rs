//! Keyword-routed assistant backed by the code model and wordlist dataset.

use chatrs_config::{Config, LocalModelConfig, SpeechConfig};
use chatrs_conversation::{ConversationManager, FrontendConfig, KeywordResponder};
use chatrs_providers::{LocalModelClient, WordlistDataset};
use chatrs_speech::{AudioPlayer, HttpSpeechSynthesizer, TextToSpeech};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Input parameters for the `assistant` command.
#[derive(Debug, Clone)]
pub struct AssistantInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Skip spoken replies
    pub no_speech: bool,
}

/// Strategy for the assistant front-end.
///
/// Collaborators that fail to load are reported once and left out; the
/// assistant still answers with whatever remains.
#[derive(Debug, Clone, Copy)]
pub struct AssistantStrategy;

impl super::CommandStrategy for AssistantStrategy {
    type Input = AssistantInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        let mut responder = KeywordResponder::new();

        if let Some(model) = load_model(&config.local_model).await {
            responder = responder.with_generator(Arc::new(model));
        }
        if let Some(dataset) = config.wordlist.path.as_deref().and_then(load_wordlist) {
            responder = responder.with_wordlist(Arc::new(dataset));
        }

        let caps = responder.capabilities();
        info!(
            "Assistant ready: model={}, dataset={}",
            caps.model, caps.dataset
        );

        let frontend = FrontendConfig::assistant(config.assistant.greeting);
        let mut manager = ConversationManager::new(responder, frontend);

        if config.speech.enabled && !input.no_speech {
            manager = manager.with_speaker(Arc::new(build_speaker(&config.speech)?));
        }

        super::run_session(manager, input.message).await
    }
}

async fn load_model(config: &LocalModelConfig) -> Option<LocalModelClient> {
    if !config.enabled {
        info!("Local model disabled in config");
        return None;
    }

    match connect_model(config).await {
        Ok(client) => Some(client),
        Err(e) => {
            error!("Error loading model: {e:#}");
            eprintln!("❌ Error loading model: {e:#}");
            None
        }
    }
}

async fn connect_model(config: &LocalModelConfig) -> anyhow::Result<LocalModelClient> {
    LocalModelClient::new(
        config.base_url.clone(),
        config.max_new_tokens,
        Duration::from_secs(config.timeout_secs),
    )?
    .connect()
    .await
}

fn load_wordlist(path: &Path) -> Option<WordlistDataset> {
    match WordlistDataset::load(path) {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            error!("Error loading Wordlist dataset: {e:#}");
            eprintln!("❌ Error loading Wordlist dataset: {e:#}");
            None
        }
    }
}

fn build_speaker(config: &SpeechConfig) -> anyhow::Result<TextToSpeech> {
    let synthesizer = HttpSpeechSynthesizer::new(
        config.base_url.clone(),
        config.api_key.clone(),
        config.model.clone(),
        config.voice.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;
    Ok(TextToSpeech::new(
        synthesizer,
        AudioPlayer::new(config.player.clone()),
        config.output_path.clone(),
    ))
}
