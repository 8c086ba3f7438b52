//! Keyword routing for assistant prompts.
//!
//! Keywords are matched as substrings of the lowercased prompt, in a fixed
//! order: `osint`, then `wordlist`, then `python`. The first match wins.

pub const OSINT_KEYWORD: &str = "osint";
pub const WORDLIST_KEYWORD: &str = "wordlist";
pub const PYTHON_KEYWORD: &str = "python";

pub const OSINT_REPLY: &str = "OSINT data analysis coming soon!";
pub const GENERAL_REPLY: &str = "I'm here to assist with your queries.";
pub const MODEL_UNAVAILABLE_REPLY: &str = "Model not loaded. Please try again later.";

/// Which external collaborators were loaded at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub model: bool,
    pub dataset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Canned OSINT placeholder.
    Osint,
    /// Random entry from the wordlist dataset.
    Wordlist,
    /// Forward the prompt to the code model.
    CodeModel,
    /// Model is loaded but nothing matched.
    General,
    /// Model failed to load and nothing else matched.
    ModelUnavailable,
}

impl Route {
    /// Reply text for routes that need no collaborator.
    #[must_use]
    pub const fn canned_reply(&self) -> Option<&'static str> {
        match self {
            Self::Osint => Some(OSINT_REPLY),
            Self::General => Some(GENERAL_REPLY),
            Self::ModelUnavailable => Some(MODEL_UNAVAILABLE_REPLY),
            Self::Wordlist | Self::CodeModel => None,
        }
    }
}

/// Pick the route for a prompt.
#[must_use]
pub fn route(prompt: &str, capabilities: Capabilities) -> Route {
    let lowered = prompt.to_lowercase();

    if lowered.contains(OSINT_KEYWORD) {
        return Route::Osint;
    }
    if capabilities.dataset && lowered.contains(WORDLIST_KEYWORD) {
        return Route::Wordlist;
    }
    if !capabilities.model {
        return Route::ModelUnavailable;
    }
    if lowered.contains(PYTHON_KEYWORD) {
        Route::CodeModel
    } else {
        Route::General
    }
}

/// Format a dataset entry as an assistant reply.
#[must_use]
pub fn wordlist_reply(entry: &str) -> String {
    format!("Here's a random wordlist entry: {entry}")
}
