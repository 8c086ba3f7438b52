//! Character whitelist check for user prompts.

use once_cell::sync::Lazy;
use regex::Regex;

/// Warning shown when a prompt is rejected.
pub const INVALID_INPUT_WARNING: &str =
    "Invalid input. Please ensure your input contains only valid characters.";

static PROMPT_WHITELIST: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s.,;!?(){}\[\]]+$").ok());

/// Returns true when the prompt is non-empty and made only of ASCII letters,
/// digits, whitespace and `.,;!?(){}[]`.
#[must_use]
pub fn validate_prompt(prompt: &str) -> bool {
    PROMPT_WHITELIST
        .as_ref()
        .is_some_and(|re| re.is_match(prompt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_sentences() {
        assert!(validate_prompt("Hello, world!"));
        assert!(validate_prompt("Write python code (please); thanks?"));
        assert!(validate_prompt("list [1, 2] {a}"));
        assert!(validate_prompt("two\tlines\nhere."));
    }

    #[test]
    fn rejects_characters_outside_whitelist() {
        assert!(!validate_prompt("café"));
        assert!(!validate_prompt("a-b"));
        assert!(!validate_prompt("rm -rf /"));
        assert!(!validate_prompt("what's up"));
        assert!(!validate_prompt("<script>"));
        assert!(!validate_prompt("\"quoted\""));
    }

    #[test]
    fn rejects_empty_prompt() {
        assert!(!validate_prompt(""));
    }

    #[test]
    fn whitespace_only_is_accepted_by_the_predicate() {
        // Blank lines are filtered before validation runs.
        assert!(validate_prompt("   "));
    }
}
