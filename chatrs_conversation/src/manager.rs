//! Conversation manager driving one chat front-end.
//!
//! The manager owns the session history and handles each submitted line:
//! validate, ask the responder once, append the user and assistant turns,
//! then optionally speak the reply.

use chatrs_core::{INVALID_INPUT_WARNING, Role, Speaker, Turn, validate_prompt};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::error::ConversationError;
use crate::feedback::Feedback;
use crate::history::ConversationHistory;
use crate::responder::Responder;

/// Static description of a front-end.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Banner printed when the interactive session starts
    pub title: String,
    /// Label used when rendering assistant turns
    pub assistant_name: String,
    /// Turns present before the first prompt
    pub seed: Vec<Turn>,
    /// Reject prompts outside the character whitelist
    pub validate_input: bool,
    /// Ask for a rating when the session ends
    pub ask_feedback: bool,
}

impl FrontendConfig {
    /// Pass-through front-end for a hosted chat session.
    #[must_use]
    pub fn hugchat(greeting: impl Into<String>) -> Self {
        Self {
            title: "🤗💬 HugChat App".to_string(),
            assistant_name: "HugChat".to_string(),
            seed: vec![Turn::user("Hi!"), Turn::assistant(greeting)],
            validate_input: false,
            ask_feedback: false,
        }
    }

    /// Validated, keyword-routed assistant front-end.
    #[must_use]
    pub fn assistant(greeting: impl Into<String>) -> Self {
        Self {
            title: "Assistant".to_string(),
            assistant_name: "Assistant".to_string(),
            seed: vec![Turn::assistant(greeting)],
            validate_input: true,
            ask_feedback: true,
        }
    }
}

/// Outcome of submitting one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Empty input; nothing happened.
    Ignored,
    /// Input failed validation; history is unchanged.
    Rejected { warning: &'static str },
    /// A reply was produced and both turns were appended.
    Answered(TurnResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// Assistant reply as stored in history
    pub response: String,
    /// The external call failed and `response` carries the error text
    pub failed: bool,
    /// 1-based count of answered prompts in this session
    pub turn_number: usize,
    /// Speech playback error, if a speaker is attached and it failed
    pub speech_error: Option<String>,
}

pub struct ConversationManager<R> {
    responder: R,
    config: FrontendConfig,
    history: ConversationHistory,
    speaker: Option<Arc<dyn Speaker>>,
    answered: usize,
    feedback: Option<Feedback>,
}

impl<R: Responder> ConversationManager<R> {
    pub fn new(responder: R, config: FrontendConfig) -> Self {
        let history = ConversationHistory::seeded(config.seed.clone());
        info!(
            "Starting {} session {} ({} seeded turns)",
            config.assistant_name,
            history.id,
            history.len()
        );
        Self {
            responder,
            config,
            history,
            speaker: None,
            answered: 0,
            feedback: None,
        }
    }

    /// Speak every reply after it is stored.
    #[must_use]
    pub fn with_speaker(mut self, speaker: Arc<dyn Speaker>) -> Self {
        self.speaker = Some(speaker);
        self
    }

    #[must_use]
    pub const fn history(&self) -> &ConversationHistory {
        &self.history
    }

    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn record_feedback(&mut self, feedback: Feedback) -> String {
        info!("Session {} rated {feedback}", self.history.id);
        self.feedback = Some(feedback);
        feedback.acknowledgement()
    }

    /// Handle one submitted line. The prompt is stored exactly as given.
    pub async fn submit(&mut self, prompt: &str) -> Submission {
        if prompt.is_empty() {
            return Submission::Ignored;
        }

        if self.config.validate_input && !validate_prompt(prompt) {
            warn!("Rejected prompt with characters outside the whitelist");
            return Submission::Rejected {
                warning: INVALID_INPUT_WARNING,
            };
        }

        let (response, failed) = match self.responder.respond(prompt).await {
            Ok(reply) => (reply, false),
            Err(e) => {
                error!("External call failed: {e}");
                (format!("An error occurred: {e}"), true)
            }
        };

        self.history.append(Role::User, prompt);
        self.history.append(Role::Assistant, response.clone());
        self.answered += 1;
        debug!(
            "Turn {} stored, history has {} turns",
            self.answered,
            self.history.len()
        );

        let speech_error = self.speak(&response).await;

        Submission::Answered(TurnResult {
            response,
            failed,
            turn_number: self.answered,
            speech_error,
        })
    }

    async fn speak(&self, text: &str) -> Option<String> {
        let speaker = self.speaker.as_ref()?;
        match speaker.speak(text).await {
            Ok(()) => None,
            Err(e) => {
                error!("Error generating speech: {e:#}");
                Some(format!("{e:#}"))
            }
        }
    }

    /// Run the session on stdin/stdout.
    pub async fn run_interactive(&mut self) -> Result<(), ConversationError> {
        let stdin = std::io::BufReader::new(std::io::stdin());
        self.run_with(stdin, std::io::stdout()).await
    }

    /// Run the session over arbitrary input and output streams.
    pub async fn run_with<I, O>(
        &mut self,
        mut input: I,
        mut out: O,
    ) -> Result<(), ConversationError>
    where
        I: BufRead,
        O: Write,
    {
        writeln!(out, "=== {} ===", self.config.title)?;
        writeln!(
            out,
            "Type 'exit', 'quit', or Ctrl+D to end the session. '/history' shows the transcript.\n"
        )?;
        self.render_transcript(&mut out)?;

        loop {
            write!(out, "You: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);

            match line.trim() {
                "exit" | "quit" | "q" => break,
                "/history" => {
                    self.render_transcript(&mut out)?;
                    continue;
                }
                "/feedback" => {
                    self.ask_feedback(&mut input, &mut out)?;
                    continue;
                }
                _ => {}
            }

            if !line.is_empty() && (!self.config.validate_input || validate_prompt(line)) {
                writeln!(out, "{} is typing...", self.config.assistant_name)?;
                out.flush()?;
            }

            match self.submit(line).await {
                Submission::Ignored => {}
                Submission::Rejected { warning } => writeln!(out, "⚠️  {warning}\n")?,
                Submission::Answered(result) => {
                    writeln!(out, "{}: {}\n", self.config.assistant_name, result.response)?;
                    if let Some(err) = result.speech_error {
                        writeln!(out, "❌ Error generating speech: {err}\n")?;
                    }
                }
            }
        }

        writeln!(out, "\nSession ended. Total turns: {}", self.answered)?;

        if self.config.ask_feedback && self.feedback.is_none() {
            self.ask_feedback(&mut input, &mut out)?;
        }

        Ok(())
    }

    fn ask_feedback<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        out: &mut O,
    ) -> Result<(), ConversationError> {
        writeln!(out, "{}\n{}", Feedback::PROMPT, Feedback::menu())?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(());
        }

        match line.parse::<Feedback>() {
            Ok(feedback) => {
                let ack = self.record_feedback(feedback);
                writeln!(out, "✅ {ack}")?;
            }
            Err(e) => writeln!(out, "⚠️  {e}")?,
        }
        Ok(())
    }

    fn render_transcript<O: Write>(&self, out: &mut O) -> Result<(), ConversationError> {
        for turn in self.history.turns() {
            let label = match turn.role {
                Role::User => "You",
                Role::Assistant => self.config.assistant_name.as_str(),
            };
            writeln!(out, "{label}: {}", turn.text)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
