//! In-memory conversation history.
//!
//! History lives for one front-end session: it is seeded with a greeting,
//! grows by one user and one assistant turn per answered prompt, and is
//! dropped with the session.

use chatrs_core::{Role, Turn};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ConversationHistory {
    /// Session identifier
    pub id: Uuid,
    turns: Vec<Turn>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ConversationHistory {
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            turns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Start a history with the given turns already in place.
    #[must_use]
    pub fn seeded(seed: impl IntoIterator<Item = Turn>) -> Self {
        let mut history = Self::new();
        history.turns.extend(seed);
        history
    }

    /// Append a turn. Turns are never removed and role alternation is not
    /// enforced.
    pub fn append(&mut self, role: Role, text: impl Into<String>) {
        self.turns.push(Turn {
            role,
            text: text.into(),
        });
        self.updated_at = Utc::now();
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// The newest `n` turns, oldest first.
    #[must_use]
    pub fn last_n(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    #[must_use]
    pub fn user_turns(&self) -> Vec<&Turn> {
        self.turns.iter().filter(|t| t.role == Role::User).collect()
    }

    /// User turns zipped with assistant turns by position, the way a
    /// two-column chat transcript pairs them.
    #[must_use]
    pub fn turn_pairs(&self) -> Vec<(&Turn, &Turn)> {
        let assistant = self.turns.iter().filter(|t| t.role == Role::Assistant);
        self.turns
            .iter()
            .filter(|t| t.role == Role::User)
            .zip(assistant)
            .collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_history_keeps_seed_order() {
        let history =
            ConversationHistory::seeded([Turn::user("Hi!"), Turn::assistant("I'm HugChat")]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].text, "Hi!");
        assert_eq!(history.last().map(|t| t.role), Some(Role::Assistant));
    }

    #[test]
    fn append_never_removes() {
        let mut history = ConversationHistory::seeded([Turn::assistant("How may I assist you?")]);

        for i in 0..5 {
            let before = history.len();
            history.append(Role::User, format!("q{i}"));
            history.append(Role::Assistant, format!("a{i}"));
            assert_eq!(history.len(), before + 2);
        }

        assert_eq!(history.turns()[0].text, "How may I assist you?");
        assert_eq!(history.user_turns().len(), 5);
        assert_eq!(history.last_n(2)[0].text, "q4");
        assert_eq!(history.last_n(100).len(), 11);
    }

    #[test]
    fn alternation_is_not_enforced() {
        let mut history = ConversationHistory::new();
        history.append(Role::Assistant, "one");
        history.append(Role::Assistant, "two");
        assert_eq!(history.len(), 2);
        assert!(history.user_turns().is_empty());
    }

    #[test]
    fn turn_pairs_zip_by_position() {
        let mut history =
            ConversationHistory::seeded([Turn::user("Hi!"), Turn::assistant("Hello")]);
        history.append(Role::User, "How are you");
        history.append(Role::Assistant, "Fine");

        let pairs = history.turn_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].0.text, "How are you");
        assert_eq!(pairs[1].1.text, "Fine");
    }
}
