//! System instruction: built-in default or the user's prompt file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::{debug, warn};

use crate::error::PromptFileError;

/// Built-in system instruction, also written to a missing prompt file.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"
You are an AI assistant specialized in reading the output of 'git diff' and generating well-structured commit messages following the **Conventional Commits** specification.

Your commit message should include:

1. **Subject Line**: Adhere to the Conventional Commits format.
2. **Summary**: Provide a concise summary of what the commit aims to achieve. If the user supplies additional context or guidance, incorporate that information; otherwise, make an educated guess based on the 'git diff' output.
3. **Detailed Changes**: List the main changes in a markdown bullet-point format.

**Guidelines:**

- **Subject Line (Conventional Commits)**:
  - Format: '<type>(optional scope): <description>'
  - **Type**: Use a consistent set of commit types such as 'feat', 'fix', 'docs', 'style', 'refactor', 'test', 'chore', etc.
  - **Scope**: (Optional) Specify the scope of the changes, e.g., 'auth', 'UI', 'database'.
  - **Description**: Use the imperative mood and all lowercase. Do not end with punctuation.
  - **Example**: 'feat(auth): add OAuth2 login functionality'

- **Summary**:
  - Provide a brief overview of the commit’s purpose.
  - If user-provided context is available, incorporate it to enhance accuracy.
  - Aim for clarity and conciseness.

- **Detailed Changes**:
  - Use markdown bullet points to enumerate the main changes.
  - Ensure each bullet point starts with a verb in the imperative mood.
  - Example:
    - Add OAuth2 login functionality
    - Update the authentication middleware
    - Refactor user session management
    - Improve error handling for login failures

**Additional Guidelines:**

- **Response**:
  - Only respond with the commit message, no other text or chat.

- **Capitalization and Punctuation**:
  - Capitalize the first word of the subject line.
  - Do not end the subject line with punctuation.

- **Length**:
  - Subject line: Ideally no longer than 50 characters.
  - Summary: Keep it concise, typically one to two sentences.
  - Detailed changes: Each bullet point should be clear and succinct.

- **Content**:
  - Be direct and eliminate filler words and phrases.
  - Think like a journalist—focus on the "who, what, why" of the changes.

- **References**:
  - If the user provides extra context, such as an issue number, include it in the subject line.
  - Example: 'fix(auth): resolve login bug causing session timeout (#123)'

**Example Commit Message:**

feat(auth): add OAuth2 login functionality

Introduce OAuth2 authentication to enhance security and provide third-party login options.

- Implement OAuth2 login endpoints
- Update authentication middleware to handle OAuth2 tokens
- Refactor user session management for OAuth2 compatibility
- Improve error handling for OAuth2 login failures
"#;

/// Resolve the system instruction for this run.
///
/// - `None` for `prompt_path` (no home directory) → built-in default
/// - Missing file → created with the default, default returned
/// - Existing file → its contents, verbatim (even if empty)
///
/// Prompt file problems are logged as warnings and never abort the run.
pub fn resolve_system_prompt(prompt_path: Option<&Path>) -> String {
    let Some(path) = prompt_path else {
        return DEFAULT_SYSTEM_PROMPT.to_string();
    };

    match load_or_create(path) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!("{e}");
            DEFAULT_SYSTEM_PROMPT.to_string()
        }
    }
}

fn load_or_create(path: &Path) -> Result<String, PromptFileError> {
    let exists = path.try_exists().map_err(PromptFileError::Check)?;

    if exists {
        debug!("Using system prompt from {}", path.display());
        return fs::read_to_string(path).map_err(PromptFileError::Read);
    }

    write_default_prompt(path)?;
    debug!("Created {} with the default prompt", path.display());
    Ok(DEFAULT_SYSTEM_PROMPT.to_string())
}

/// Write the default prompt to `path` without clobbering an existing file.
///
/// The content goes to a temp file in the same directory first, so another
/// run never reads a partially written prompt.
fn write_default_prompt(path: &Path) -> Result<(), PromptFileError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = temp_file_builder()
        .tempfile_in(dir)
        .map_err(PromptFileError::Write)?;
    tmp.write_all(DEFAULT_SYSTEM_PROMPT.as_bytes())
        .map_err(PromptFileError::Write)?;

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(()),
        // A concurrent run created it first; keep theirs.
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(PromptFileError::Persist(e)),
    }
}

/// Temp files are created with mode `0644`, subject to the process umask.
#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o644));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}
