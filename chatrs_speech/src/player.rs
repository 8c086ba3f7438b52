//! Audio playback through an external player command.

use crate::error::{SpeechError, SpeechResult};
use std::path::Path;
use tracing::debug;

/// Program and arguments that run `line` through the user's shell.
fn shell_invocation(line: &str) -> (String, [String; 2]) {
    #[cfg(windows)]
    let (shell, flag) = ("cmd".to_string(), "/C");
    #[cfg(not(windows))]
    let (shell, flag) = (
        std::env::var("SHELL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "/bin/sh".to_string()),
        "-c",
    );
    (shell, [flag.to_string(), line.to_string()])
}

/// Plays an audio file with a player such as `mpg321`.
#[derive(Debug, Clone)]
pub struct AudioPlayer {
    player: String,
}

impl AudioPlayer {
    #[must_use]
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
        }
    }

    /// Shell command line that plays `file`.
    #[must_use]
    pub fn command_line(&self, file: &Path) -> String {
        format!("{} \"{}\"", self.player, file.display())
    }

    pub async fn play(&self, file: &Path) -> SpeechResult<()> {
        let line = self.command_line(file);
        let (shell, args) = shell_invocation(&line);
        debug!("Playing audio with {shell}: {line}");

        let output = tokio::process::Command::new(&shell)
            .args(&args)
            .output()
            .await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(SpeechError::Playback(format!(
                "'{line}' exited with {}: {}",
                output.status,
                stderr.trim()
            )))
        }
    }
}
