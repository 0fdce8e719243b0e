//! gdm - A CLI tool that writes commit messages for your working tree diff.
//!
//! # Overview
//!
//! gdm captures `git diff`, sends it to an OpenAI-compatible chat completions
//! endpoint together with a system prompt (customizable through
//! `~/.git_diff_prompt.txt`) and optional context, and prints the cleaned-up
//! commit message.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod prompt;

// Re-export commonly used types
pub use commit::{GenerateOptions, Outcome, generate_commit_message};
pub use config::Settings;
pub use error::{CompletionError, DiffError, GdmError, PromptFileError};
pub use git::{DiffSource, GitCli};
pub use llm::{ChatMessage, CompletionClient, CompletionRequest, CompletionResponse, Role};
