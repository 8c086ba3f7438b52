use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub hugchat: HugChatConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub local_model: LocalModelConfig,
    #[serde(default)]
    pub wordlist: WordlistConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Hosted chat backend used by the `hugchat` front-end.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HugChatConfig {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub model: String,
    #[serde(default = "HugChatConfig::default_greeting")]
    pub greeting: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Earlier messages resent with each prompt
    #[serde(default = "HugChatConfig::default_history_limit")]
    pub history_limit: usize,
}

impl HugChatConfig {
    fn default_greeting() -> String {
        "I'm HugChat, How may I help you?".to_string()
    }

    const fn default_history_limit() -> usize {
        20
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssistantConfig {
    #[serde(default = "AssistantConfig::default_greeting")]
    pub greeting: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            greeting: Self::default_greeting(),
        }
    }
}

impl AssistantConfig {
    fn default_greeting() -> String {
        "How may I assist you?".to_string()
    }
}

/// Text-generation server hosting the code model.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LocalModelConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "LocalModelConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "LocalModelConfig::default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LocalModelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: Self::default_base_url(),
            max_new_tokens: Self::default_max_new_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LocalModelConfig {
    fn default_base_url() -> String {
        "http://127.0.0.1:8080".to_string()
    }

    const fn default_max_new_tokens() -> u32 {
        150
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WordlistConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SpeechConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "SpeechConfig::default_base_url")]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "SpeechConfig::default_model")]
    pub model: String,
    #[serde(default = "SpeechConfig::default_voice")]
    pub voice: String,
    #[serde(default = "SpeechConfig::default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "SpeechConfig::default_player")]
    pub player: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: Self::default_base_url(),
            api_key: None,
            model: Self::default_model(),
            voice: Self::default_voice(),
            output_path: Self::default_output_path(),
            player: Self::default_player(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SpeechConfig {
    fn default_base_url() -> String {
        "https://api.openai.com/v1".to_string()
    }

    fn default_model() -> String {
        "tts-1".to_string()
    }

    fn default_voice() -> String {
        "alloy".to_string()
    }

    fn default_output_path() -> PathBuf {
        PathBuf::from("response.mp3")
    }

    fn default_player() -> String {
        "mpg321".to_string()
    }
}

const fn default_true() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    120
}

const CONFIG_TEMPLATE: &str = r#"{
  "hugchat": {
    "base_url": "https://api-inference.huggingface.co/v1",
    "api_key": "your-api-key-here",
    "model": "OpenAssistant/oasst-sft-6-llama-30b-xor",
    "greeting": "I'm HugChat, How may I help you?",
    "history_limit": 20
  },
  "assistant": {
    "greeting": "How may I assist you?"
  },
  "local_model": {
    "enabled": true,
    "base_url": "http://127.0.0.1:8080",
    "max_new_tokens": 150
  },
  "wordlist": {
    "path": "wordlists.jsonl"
  },
  "speech": {
    "enabled": false,
    "base_url": "https://api.openai.com/v1",
    "api_key": "your-tts-api-key-here",
    "model": "tts-1",
    "voice": "alloy",
    "output_path": "response.mp3",
    "player": "mpg321"
  }
}"#;

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("chatrs"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'chatrs init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        debug!("Reading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        Self::write_template(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and add your chat backend API key");
        println!("   2. Start a text-generation server for the code model (optional)");
        println!("   3. Point wordlist.path at a .jsonl or .txt wordlist (optional)");
        println!("   4. Run 'chatrs hugchat' or 'chatrs assistant' to start chatting");
        println!();
        println!("🔧 Configuration options:");
        println!("   - hugchat.model: model served by the hosted chat backend");
        println!("   - hugchat.history_limit: earlier messages resent with each prompt");
        println!("   - local_model.max_new_tokens: length limit for code model replies");
        println!("   - speech.enabled: speak assistant replies through speech.player");
        println!();
        Ok(())
    }

    /// Write the default template, refusing to overwrite an existing file.
    pub fn write_template(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(config_path, CONFIG_TEMPLATE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_with_all_sections() {
        let config: Config = serde_json::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.local_model.max_new_tokens, 150);
        assert_eq!(config.speech.player, "mpg321");
        assert_eq!(config.speech.output_path, PathBuf::from("response.mp3"));
        assert_eq!(
            config.wordlist.path.as_deref(),
            Some(Path::new("wordlists.jsonl"))
        );
        assert!(!config.speech.enabled);
    }

    #[test]
    fn optional_sections_default() {
        let json = r#"{
            "hugchat": {
                "base_url": "http://localhost:9000/v1",
                "model": "test-model"
            }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.hugchat.api_key, None);
        assert_eq!(config.hugchat.greeting, "I'm HugChat, How may I help you?");
        assert_eq!(config.hugchat.timeout_secs, 120);
        assert_eq!(config.hugchat.history_limit, 20);
        assert_eq!(config.speech.timeout_secs, 120);
        assert_eq!(config.assistant.greeting, "How may I assist you?");
        assert!(config.local_model.enabled);
        assert_eq!(config.local_model.base_url, "http://127.0.0.1:8080");
        assert!(config.wordlist.path.is_none());
        assert!(!config.speech.enabled);
    }

    #[test]
    fn missing_hugchat_section_is_an_error() {
        let result: Result<Config, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn write_template_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::write_template(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.hugchat.model, "OpenAssistant/oasst-sft-6-llama-30b-xor");

        let err = Config::write_template(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
