//! Prompt construction: system instruction and user message.

pub mod system;
pub mod user;

pub use system::{DEFAULT_SYSTEM_PROMPT, resolve_system_prompt};
pub use user::build_user_prompt;
