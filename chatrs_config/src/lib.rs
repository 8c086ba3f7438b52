//! Configuration file handling for `chatrs`.

mod schema;

pub use schema::{
    AssistantConfig, Config, HugChatConfig, LocalModelConfig, SpeechConfig, WordlistConfig,
};
