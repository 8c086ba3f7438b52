#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::missing_errors_doc)]

//! Spoken playback of assistant replies.
//!
//! A reply is synthesized to MP3, written to a file, then handed to an
//! external player command.

pub mod error;
mod player;
mod synth;

use async_trait::async_trait;
use chatrs_core::Speaker;
use std::path::PathBuf;
use tracing::info;

pub use error::{SpeechError, SpeechResult};
pub use player::AudioPlayer;
pub use synth::{HttpSpeechSynthesizer, SpeechSynthesizer};

pub struct TextToSpeech<S = HttpSpeechSynthesizer> {
    synthesizer: S,
    player: AudioPlayer,
    output_path: PathBuf,
}

impl<S: SpeechSynthesizer> TextToSpeech<S> {
    pub fn new(synthesizer: S, player: AudioPlayer, output_path: impl Into<PathBuf>) -> Self {
        Self {
            synthesizer,
            player,
            output_path: output_path.into(),
        }
    }

    /// Synthesize `text`, save it to the output file and play it.
    pub async fn say(&self, text: &str) -> SpeechResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let audio = self.synthesizer.synthesize(text).await?;
        tokio::fs::write(&self.output_path, &audio).await?;
        info!(
            "Saved {} bytes of speech to {}",
            audio.len(),
            self.output_path.display()
        );

        self.player.play(&self.output_path).await
    }
}

#[async_trait]
impl<S: SpeechSynthesizer> Speaker for TextToSpeech<S> {
    async fn speak(&self, text: &str) -> anyhow::Result<()> {
        self.say(text).await.map_err(anyhow::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSynth {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SpeechSynthesizer for FixedSynth {
        async fn synthesize(&self, _text: &str) -> SpeechResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(b"ID3fake".to_vec())
        }
    }

    struct FailingSynth;

    #[async_trait]
    impl SpeechSynthesizer for FailingSynth {
        async fn synthesize(&self, _text: &str) -> SpeechResult<Vec<u8>> {
            Err(SpeechError::Synthesis("quota exceeded".to_string()))
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn writes_audio_then_plays() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("response.mp3");
        let calls = Arc::new(AtomicUsize::new(0));
        let tts = TextToSpeech::new(
            FixedSynth {
                calls: calls.clone(),
            },
            AudioPlayer::new("true"),
            &out,
        );

        tts.speak("Hello there").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(std::fs::read(&out).unwrap(), b"ID3fake");
    }

    #[tokio::test]
    async fn empty_text_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let tts = TextToSpeech::new(
            FixedSynth {
                calls: calls.clone(),
            },
            AudioPlayer::new("false"),
            dir.path().join("response.mp3"),
        );

        tts.say("   ").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn synthesis_failure_surfaces_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("response.mp3");
        let tts = TextToSpeech::new(FailingSynth, AudioPlayer::new("true"), &out);

        let err = tts.speak("Hello").await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert!(!out.exists());
    }
}
