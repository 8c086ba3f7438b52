//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so
//! dispatch is resolved at compile time.

use chatrs_conversation::{ConversationManager, Responder, Submission};

mod assistant;
mod hugchat;
mod info;
mod init;
mod version;

pub use assistant::{AssistantInput, AssistantStrategy};
pub use hugchat::{HugChatInput, HugChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Run either a single message or the interactive loop.
async fn run_session<R: Responder>(
    mut manager: ConversationManager<R>,
    message: Option<String>,
) -> anyhow::Result<()> {
    let Some(msg) = message else {
        manager.run_interactive().await?;
        return Ok(());
    };

    match manager.submit(&msg).await {
        Submission::Answered(result) => {
            println!("{}", result.response);
            if let Some(err) = result.speech_error {
                eprintln!("Error generating speech: {err}");
            }
            Ok(())
        }
        Submission::Rejected { warning } => anyhow::bail!("{warning}"),
        Submission::Ignored => anyhow::bail!("Message is empty"),
    }
}
