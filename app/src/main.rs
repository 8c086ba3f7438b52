#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    AssistantInput, AssistantStrategy, CommandStrategy, HugChatInput, HugChatStrategy,
    InfoStrategy, InitStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "chatrs")]
#[command(about = "Terminal chat front-ends for hosted and local language models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat through the hosted chat backend
    Hugchat {
        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,
    },
    /// Keyword-routed assistant with code model, wordlists and speech
    Assistant {
        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Do not speak replies even if speech is enabled in config
        #[arg(long)]
        no_speech: bool,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Hugchat { message, model } => {
            HugChatStrategy
                .execute(HugChatInput { message, model })
                .await
        }
        Commands::Assistant { message, no_speech } => {
            AssistantStrategy
                .execute(AssistantInput { message, no_speech })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
