//! End-to-end behaviour of both chat front-ends with in-process collaborators.

use async_trait::async_trait;
use chatrs_conversation::{
    ConversationManager, FrontendConfig, HostedResponder, KeywordResponder, Submission,
};
use chatrs_core::routing::{GENERAL_REPLY, OSINT_REPLY};
use chatrs_core::{
    ChatBackend, INVALID_INPUT_WARNING, Role, Speaker, TextGenerator, WordlistSource,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct ScriptedBackend {
    calls: AtomicUsize,
    fail_on: usize,
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn chat(&self, prompt: &str) -> anyhow::Result<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n == self.fail_on {
            anyhow::bail!("backend unavailable (429)");
        }
        Ok(format!("reply to {prompt}"))
    }
}

struct BrokenModel;

#[async_trait]
impl TextGenerator for BrokenModel {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("CUDA out of memory"))
    }
}

struct Fixed(&'static str);

impl WordlistSource for Fixed {
    fn len(&self) -> usize {
        1
    }

    fn random_entry(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

struct MuteSpeaker {
    calls: AtomicUsize,
}

#[async_trait]
impl Speaker for MuteSpeaker {
    async fn speak(&self, _text: &str) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        anyhow::bail!("mpg321: command not found")
    }
}

#[tokio::test]
async fn hugchat_failure_is_rendered_and_history_still_advances() {
    let backend = ScriptedBackend {
        calls: AtomicUsize::new(0),
        fail_on: 2,
    };
    let mut manager = ConversationManager::new(
        HostedResponder::new(backend),
        FrontendConfig::hugchat("I'm HugChat, How may I help you?"),
    );
    assert_eq!(manager.history().len(), 2);

    let Submission::Answered(first) = manager.submit("Hello").await else {
        panic!("expected an answer");
    };
    assert!(!first.failed);
    assert_eq!(first.response, "reply to Hello");
    assert_eq!(manager.history().len(), 4);

    let Submission::Answered(second) = manager.submit("Again").await else {
        panic!("expected an answer");
    };
    assert!(second.failed);
    assert_eq!(
        second.response,
        "An error occurred: backend unavailable (429)"
    );
    assert_eq!(second.turn_number, 2);
    assert_eq!(manager.history().len(), 6);

    let last = manager.history().last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert!(last.text.contains("backend unavailable"));
    assert_eq!(manager.history().turn_pairs().len(), 3);
}

#[tokio::test]
async fn assistant_rejects_invalid_input_without_mutation() {
    let mut manager = ConversationManager::new(
        KeywordResponder::new(),
        FrontendConfig::assistant("How may I assist you?"),
    );

    let outcome = manager.submit("café").await;
    assert_eq!(
        outcome,
        Submission::Rejected {
            warning: INVALID_INPUT_WARNING
        }
    );
    assert_eq!(manager.history().len(), 1);
    assert_eq!(manager.history().turns()[0].text, "How may I assist you?");
}

#[tokio::test]
async fn assistant_routes_and_survives_model_failure() {
    let responder = KeywordResponder::new()
        .with_generator(Arc::new(BrokenModel))
        .with_wordlist(Arc::new(Fixed("qwerty")));
    let mut manager =
        ConversationManager::new(responder, FrontendConfig::assistant("How may I assist you?"));

    let mut replies = Vec::new();
    for prompt in ["osint and wordlist", "wordlist please", "hello", "python code"] {
        match manager.submit(prompt).await {
            Submission::Answered(result) => replies.push(result),
            other => panic!("unexpected outcome for {prompt}: {other:?}"),
        }
    }

    assert_eq!(replies[0].response, OSINT_REPLY);
    assert_eq!(replies[1].response, "Here's a random wordlist entry: qwerty");
    assert_eq!(replies[2].response, GENERAL_REPLY);
    assert!(replies[3].failed);
    assert!(replies[3].response.contains("CUDA out of memory"));
    assert_eq!(manager.history().len(), 1 + 2 * 4);
}

#[tokio::test]
async fn speech_failure_is_reported_but_does_not_touch_history() {
    let speaker = Arc::new(MuteSpeaker {
        calls: AtomicUsize::new(0),
    });
    let mut manager = ConversationManager::new(
        KeywordResponder::new(),
        FrontendConfig::assistant("How may I assist you?"),
    )
    .with_speaker(speaker.clone());

    let Submission::Answered(result) = manager.submit("Hello").await else {
        panic!("expected an answer");
    };

    assert_eq!(speaker.calls.load(Ordering::SeqCst), 1);
    assert!(!result.failed);
    assert!(
        result
            .speech_error
            .as_deref()
            .is_some_and(|e| e.contains("command not found"))
    );
    assert_eq!(manager.history().len(), 3);
}
