//! Error types for gdm modules using thiserror.

use thiserror::Error;

/// Errors from collecting the working tree diff.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    GitNotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("Error running `git diff`: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

/// Errors from the chat completions API.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("{var} is not set")]
    MissingApiKey { var: String },

    #[error("Error creating request body: {0}")]
    SerializeRequest(#[source] serde_json::Error),

    #[error("Error creating HTTP request: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("Error sending request to AI model: {0}")]
    Send(#[source] reqwest::Error),

    #[error("Error reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("AI model returned HTTP {status}: {message}")]
    ApiStatus { status: u16, message: String },

    #[error("Error parsing AI response: {0}")]
    ParseResponse(#[source] serde_json::Error),
}

/// Errors from the prompt file in the home directory.
///
/// These never abort a run; the resolver logs them and falls back to the
/// built-in prompt.
#[derive(Error, Debug)]
pub enum PromptFileError {
    #[error("Error checking prompt file: {0}")]
    Check(#[source] std::io::Error),

    #[error("Error reading prompt file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Error creating prompt file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Error creating prompt file: {0}")]
    Persist(#[source] tempfile::PersistError),
}

/// Terminal failure of a gdm run.
#[derive(Error, Debug)]
pub enum GdmError {
    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl GdmError {
    /// Whether the run should end with a non-zero exit code.
    ///
    /// A failed `git diff` only ends this run, like an empty diff does.
    /// A missing credential or a failed API call is a hard failure.
    pub fn is_fatal(&self) -> bool {
        match self {
            GdmError::Diff(_) => false,
            GdmError::Completion(_) => true,
        }
    }
}
