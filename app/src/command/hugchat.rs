//! Pass-through chat with the hosted backend.

use chatrs_config::Config;
use chatrs_conversation::{ConversationManager, FrontendConfig, HostedResponder};
use chatrs_providers::HostedChatSession;
use std::time::Duration;
use tracing::info;

/// Input parameters for the `hugchat` command.
#[derive(Debug, Clone)]
pub struct HugChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Optional model override
    pub model: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct HugChatStrategy;

impl super::CommandStrategy for HugChatStrategy {
    type Input = HugChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let hugchat = config.hugchat;

        let model = input.model.unwrap_or(hugchat.model);
        info!("Using hosted model: {model}");

        let session = HostedChatSession::new(
            hugchat.base_url,
            model,
            hugchat.api_key,
            Duration::from_secs(hugchat.timeout_secs),
        )?
        .with_history_limit(hugchat.history_limit);

        let manager = ConversationManager::new(
            HostedResponder::new(session),
            FrontendConfig::hugchat(hugchat.greeting),
        );

        super::run_session(manager, input.message).await
    }
}
