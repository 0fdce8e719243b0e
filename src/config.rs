//! Runtime settings resolved from the environment.

use std::env;
use std::fmt;
use std::path::PathBuf;

use reqwest::Url;
use tracing::warn;

/// Environment variable holding the API credential.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable to override the completion endpoint.
pub const ENDPOINT_ENV_VAR: &str = "GDM_API_URL";

/// Default chat completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model when `--model` is not given.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Name of the user-editable system prompt file in the home directory.
pub const PROMPT_FILE_NAME: &str = ".git_diff_prompt.txt";

/// Placeholder printed instead of the API key in `Debug` output.
pub(crate) const REDACTED: &str = "[redacted]";

/// Settings for a single run.
#[derive(Clone)]
pub struct Settings {
    /// API key, `None` when unset or empty.
    pub api_key: Option<String>,
    pub endpoint: String,
    /// `None` when the home directory could not be determined.
    pub home_dir: Option<PathBuf>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("endpoint", &self.endpoint)
            .field("home_dir", &self.home_dir)
            .finish()
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// Logs a warning if the home directory cannot be found or if
    /// `GDM_API_URL` is set to something that is not a URL.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_ENV_VAR).ok().filter(|k| !k.is_empty());

        let home_dir = dirs::home_dir();
        if home_dir.is_none() {
            warn!("Error getting user's home directory, using the default prompt");
        }

        Self {
            api_key,
            endpoint: endpoint_from_env(),
            home_dir,
        }
    }

    /// Path of the prompt file, if the home directory is known.
    pub fn prompt_path(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(PROMPT_FILE_NAME))
    }
}

fn endpoint_from_env() -> String {
    match env::var(ENDPOINT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match Url::parse(&v) {
            Ok(_) => v,
            Err(e) => {
                warn!(
                    "Invalid {} value '{}' ({}), using {}",
                    ENDPOINT_ENV_VAR, v, e, DEFAULT_ENDPOINT
                );
                DEFAULT_ENDPOINT.to_string()
            }
        },
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_from_env() {
        temp_env::with_var(API_KEY_ENV_VAR, Some("sk-test"), || {
            let settings = Settings::from_env();
            assert_eq!(settings.api_key.as_deref(), Some("sk-test"));
        });
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        temp_env::with_var(API_KEY_ENV_VAR, Some(""), || {
            assert!(Settings::from_env().api_key.is_none());
        });
    }

    #[test]
    fn test_missing_api_key_is_unset() {
        temp_env::with_var_unset(API_KEY_ENV_VAR, || {
            assert!(Settings::from_env().api_key.is_none());
        });
    }

    #[test]
    fn test_endpoint_default() {
        temp_env::with_var_unset(ENDPOINT_ENV_VAR, || {
            assert_eq!(Settings::from_env().endpoint, DEFAULT_ENDPOINT);
        });
    }

    #[test]
    fn test_endpoint_override() {
        temp_env::with_var(
            ENDPOINT_ENV_VAR,
            Some("http://localhost:8080/v1/chat/completions"),
            || {
                assert_eq!(
                    Settings::from_env().endpoint,
                    "http://localhost:8080/v1/chat/completions"
                );
            },
        );
    }

    #[test]
    fn test_invalid_endpoint_uses_default() {
        temp_env::with_var(ENDPOINT_ENV_VAR, Some("not a url"), || {
            assert_eq!(Settings::from_env().endpoint, DEFAULT_ENDPOINT);
        });
    }

    #[test]
    #[cfg(unix)]
    fn test_prompt_path_under_home() {
        let dir = tempfile::tempdir().unwrap();
        temp_env::with_var("HOME", Some(dir.path()), || {
            let settings = Settings::from_env();
            assert_eq!(
                settings.prompt_path(),
                Some(dir.path().join(".git_diff_prompt.txt"))
            );
        });
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let settings = Settings {
            api_key: Some("sk-secret-123".to_string()),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            home_dir: None,
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("sk-secret-123"));
        assert!(debug.contains("api_key: Some(\"[redacted]\")"));
        assert!(debug.contains(DEFAULT_ENDPOINT));
    }

    #[test]
    fn test_prompt_path_none_without_home() {
        let settings = Settings {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            home_dir: None,
        };
        assert!(settings.prompt_path().is_none());
    }
}
