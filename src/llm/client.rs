//! HTTP client for the chat completions API.

use std::fmt;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::debug;

use crate::config::{API_KEY_ENV_VAR, REDACTED, Settings};
use crate::error::CompletionError;

use super::types::{ApiErrorBody, CompletionRequest, CompletionResponse};

/// Maximum characters of a non-JSON error body kept in the error message.
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Sends a single completion request per call. No retries.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &REDACTED)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from settings, refusing to run without an API key.
    pub fn from_settings(settings: &Settings) -> Result<Self, CompletionError> {
        let api_key = settings
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CompletionError::MissingApiKey {
                var: API_KEY_ENV_VAR.to_string(),
            })?;

        Ok(Self::new(&settings.endpoint, api_key))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `request` to the endpoint and parse the response.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let body = serde_json::to_vec(request).map_err(CompletionError::SerializeRequest)?;

        let http_request = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .build()
            .map_err(CompletionError::BuildRequest)?;

        debug!(
            "Sending {} messages to {} (model {})",
            request.messages.len(),
            self.endpoint,
            request.model
        );

        let response = self
            .http
            .execute(http_request)
            .await
            .map_err(CompletionError::Send)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(CompletionError::ReadBody)?;

        if !status.is_success() {
            return Err(CompletionError::ApiStatus {
                status: status.as_u16(),
                message: error_message(&bytes),
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_slice(&bytes).map_err(CompletionError::ParseResponse)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Token usage: {} prompt, {} completion, {} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(parsed)
    }
}

/// Pull `error.message` out of an API error body, or fall back to the raw text.
fn error_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ApiErrorBody>(body) {
        return parsed.error.message;
    }

    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_LENGTH).collect()
}
