//! Chat completions API client and wire types.

pub mod client;
pub mod types;

pub use client::CompletionClient;
pub use types::{ChatMessage, Choice, CompletionRequest, CompletionResponse, Role, Usage};
