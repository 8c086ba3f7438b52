use thiserror::Error;

/// Errors that can occur while handling a conversation turn.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// A chat backend, model or dataset call failed.
    #[error("{0}")]
    ExternalCallFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConversationError {
    pub(crate) fn external(err: &anyhow::Error) -> Self {
        Self::ExternalCallFailed(format!("{err:#}"))
    }
}
