//! AI-generated commit messages for the working tree diff.

pub mod generate;
pub mod message;

pub use generate::{GenerateOptions, build_request, generate_commit_message};
pub use message::{NO_CHANGES_MESSAGE, NO_RESPONSE_MESSAGE, Outcome, clean_commit_message};
