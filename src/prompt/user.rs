//! User message construction for the commit message request.

/// Build the user message asking for a commit message for `diff`.
///
/// The diff is embedded verbatim between `<diff>` tags. Non-empty `context`
/// is prepended verbatim on its own `Context:` line followed by a blank line.
pub fn build_user_prompt(diff: &str, context: &str) -> String {
    let request = format!(
        "I have the following output from running `git diff`. \
         Could you give me a commit message for it? <diff>{diff}</diff>"
    );

    if context.is_empty() {
        request
    } else {
        format!("Context: {context}\n\n{request}")
    }
}
