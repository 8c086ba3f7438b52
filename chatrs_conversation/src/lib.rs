#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Chat front-ends: session history, reply generation and the interactive loop.
//!
//! # Key Features
//! - Seeded in-memory history that only grows
//! - Hosted pass-through and keyword-routed responders
//! - Failed external calls rendered as replies instead of aborting the session
//! - Optional spoken replies and an end-of-session rating

mod error;
mod feedback;
mod history;
mod manager;
mod responder;

pub use error::ConversationError;
pub use feedback::Feedback;
pub use history::ConversationHistory;
pub use manager::{ConversationManager, FrontendConfig, Submission, TurnResult};
pub use responder::{HostedResponder, KeywordResponder, Responder};
