//! The commit message pipeline: diff → prompt → request → completion.

use tracing::debug;

use crate::config::Settings;
use crate::error::GdmError;
use crate::git::DiffSource;
use crate::llm::{ChatMessage, CompletionClient, CompletionRequest};
use crate::prompt::{build_user_prompt, resolve_system_prompt};

use super::message::{Outcome, clean_commit_message};

/// Per-invocation options from the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub model: String,
    /// Free-text context; blank means none.
    pub context: String,
}

/// Build the two-message request: system instruction, then the diff request.
pub fn build_request(
    model: &str,
    system_prompt: &str,
    diff: &str,
    context: &str,
) -> CompletionRequest {
    CompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(build_user_prompt(diff, context)),
        ],
    }
}

/// Generate a commit message for the diff produced by `diff_source`.
///
/// Returns `Outcome::NoChanges` without touching the network when the diff
/// is empty, and `Outcome::NoResponse` when the API answers with no choices.
/// Every other failure is terminal and returned as a [`GdmError`].
pub async fn generate_commit_message<D: DiffSource + ?Sized>(
    options: &GenerateOptions,
    settings: &Settings,
    diff_source: &D,
) -> Result<Outcome, GdmError> {
    let diff = diff_source.diff().await?;
    if diff.is_empty() {
        return Ok(Outcome::NoChanges);
    }

    let system_prompt = resolve_system_prompt(settings.prompt_path().as_deref());
    let request = build_request(&options.model, &system_prompt, &diff, &options.context);

    debug!(
        "Prompt sizes: system {} chars, user {} chars",
        request.messages[0].content.len(),
        request.messages[1].content.len()
    );

    let client = CompletionClient::from_settings(settings)?;
    let response = client.complete(&request).await?;

    Ok(match response.first_content() {
        Some(content) => Outcome::Message(clean_commit_message(content)),
        None => Outcome::NoResponse,
    })
}
