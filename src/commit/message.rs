//! Commit message cleanup and run outcomes.

use std::fmt;

/// Printed when the working tree has no changes.
pub const NO_CHANGES_MESSAGE: &str = "No changes detected. There is nothing to commit.";

/// Printed when the API returns no choices.
pub const NO_RESPONSE_MESSAGE: &str = "No response from AI model";

/// Characters models wrap answers in (code fences, padding).
const WRAPPING_CHARS: [char; 3] = ['`', '\n', ' '];

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A cleaned commit message.
    Message(String),
    /// The diff was empty; no request was made.
    NoChanges,
    /// The API answered without any choices.
    NoResponse,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Message(message) => f.write_str(message),
            Outcome::NoChanges => f.write_str(NO_CHANGES_MESSAGE),
            Outcome::NoResponse => f.write_str(NO_RESPONSE_MESSAGE),
        }
    }
}

/// Strip whitespace and wrapping backticks from a model's answer.
pub fn clean_commit_message(raw: &str) -> String {
    raw.trim().trim_matches(&WRAPPING_CHARS[..]).to_string()
}
