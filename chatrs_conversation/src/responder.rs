//! Reply generation strategies for the two front-ends.

use async_trait::async_trait;
use chatrs_core::routing::wordlist_reply;
use chatrs_core::{Capabilities, ChatBackend, Route, TextGenerator, WordlistSource, route};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ConversationError;

/// Produces the assistant reply for one prompt.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<String, ConversationError>;
}

/// Hands every prompt to a hosted chat session.
pub struct HostedResponder<B> {
    backend: B,
}

impl<B: ChatBackend> HostedResponder<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl<B: ChatBackend> Responder for HostedResponder<B> {
    async fn respond(&self, prompt: &str) -> Result<String, ConversationError> {
        self.backend
            .chat(prompt)
            .await
            .map_err(|e| ConversationError::external(&e))
    }
}

/// Routes prompts by keyword to canned replies, the wordlist dataset or the
/// code model.
#[derive(Default)]
pub struct KeywordResponder {
    generator: Option<Arc<dyn TextGenerator>>,
    wordlist: Option<Arc<dyn WordlistSource>>,
}

impl KeywordResponder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    #[must_use]
    pub fn with_wordlist(mut self, wordlist: Arc<dyn WordlistSource>) -> Self {
        self.wordlist = Some(wordlist);
        self
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            model: self.generator.is_some(),
            dataset: self.wordlist.is_some(),
        }
    }
}

#[async_trait]
impl Responder for KeywordResponder {
    async fn respond(&self, prompt: &str) -> Result<String, ConversationError> {
        let chosen = route(prompt, self.capabilities());
        debug!("Prompt routed to {chosen:?}");

        if let Some(reply) = chosen.canned_reply() {
            return Ok(reply.to_string());
        }

        match (chosen, &self.generator, &self.wordlist) {
            (Route::Wordlist, _, Some(wordlist)) => wordlist
                .random_entry()
                .map(|entry| wordlist_reply(&entry))
                .ok_or_else(|| {
                    ConversationError::ExternalCallFailed(
                        "wordlist dataset has no entries".to_string(),
                    )
                }),
            (Route::CodeModel, Some(generator), _) => {
                info!("Forwarding prompt to code model");
                generator
                    .generate(prompt)
                    .await
                    .map_err(|e| ConversationError::external(&e))
            }
            _ => Err(ConversationError::ExternalCallFailed(format!(
                "no collaborator available for {chosen:?}"
            ))),
        }
    }
}
