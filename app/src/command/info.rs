use chatrs_config::Config;

/// Strategy for displaying configuration information.
///
/// Prints the hosted chat backend (API key masked), the local model server,
/// the wordlist path and the speech settings.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== chatrs Configuration ===\n");

        println!("HugChat:");
        println!("  Base URL: {}", config.hugchat.base_url);
        println!("  Model: {}", config.hugchat.model);
        println!("  API Key: {}", mask_secret(config.hugchat.api_key.as_deref()));
        println!("  Greeting: {}", truncate(&config.hugchat.greeting, 60));
        println!("  History Limit: {}", config.hugchat.history_limit);
        println!();

        println!("Assistant:");
        println!("  Greeting: {}", truncate(&config.assistant.greeting, 60));
        println!();

        println!("Local Model:");
        println!("  Enabled: {}", config.local_model.enabled);
        println!("  Base URL: {}", config.local_model.base_url);
        println!("  Max New Tokens: {}", config.local_model.max_new_tokens);
        println!();

        println!("Wordlist:");
        match &config.wordlist.path {
            Some(path) => println!("  Path: {}", path.display()),
            None => println!("  Path: (not set)"),
        }
        println!();

        println!("Speech:");
        println!("  Enabled: {}", config.speech.enabled);
        println!("  Base URL: {}", config.speech.base_url);
        println!("  API Key: {}", mask_secret(config.speech.api_key.as_deref()));
        println!("  Model: {}", config.speech.model);
        println!("  Voice: {}", config.speech.voice);
        println!("  Output: {}", config.speech.output_path.display());
        println!("  Player: {}", config.speech.player);
        println!("  Timeout: {}s", config.speech.timeout_secs);

        Ok(())
    }
}

fn mask_secret(secret: Option<&str>) -> String {
    let Some(secret) = secret.filter(|s| !s.is_empty()) else {
        return "(not set)".to_string();
    };

    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_long_secrets() {
        assert_eq!(mask_secret(Some("hf_abcdefghijkl")), "hf_a...ijkl");
        assert_eq!(mask_secret(Some("short")), "***");
        assert_eq!(mask_secret(Some("")), "(not set)");
        assert_eq!(mask_secret(None), "(not set)");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("😊😊😊😊😊😊", 5), "😊😊...");
    }
}
