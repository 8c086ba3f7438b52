//! End-of-session experience rating.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Excellent,
    Okay,
    Poor,
}

impl Feedback {
    pub const ALL: [Self; 3] = [Self::Excellent, Self::Okay, Self::Poor];

    pub const PROMPT: &'static str = "How was your experience?";

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "😊 Excellent",
            Self::Okay => "😐 Okay",
            Self::Poor => "😕 Poor",
        }
    }

    #[must_use]
    pub fn acknowledgement(&self) -> String {
        format!("Thank you for your feedback: {}", self.label())
    }

    /// Numbered menu, one option per line.
    #[must_use]
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .enumerate()
            .map(|(i, f)| format!("  [{}] {}", i + 1, f.label()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "excellent" => Ok(Self::Excellent),
            "2" | "okay" | "ok" => Ok(Self::Okay),
            "3" | "poor" => Ok(Self::Poor),
            other => Err(format!("unknown feedback option: {other}")),
        }
    }
}
