//! Model-API configuration resolved once at process start.

use std::env;

use crate::error::Error;

/// Environment variable holding the Anthropic API credential.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Default model identifier for all completions.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default maximum number of tokens per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 8192;

/// Configuration for the model-API boundary.
///
/// Resolved once in command dispatch and threaded into the live LLM adapter,
/// so no deep call path reads the environment ad hoc.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// API credential sent in the `x-api-key` header.
    pub api_key: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Maximum output size per completion.
    pub max_tokens: u32,
}

impl ModelConfig {
    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when the credential variable is unset
    /// or empty.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_key(env::var(API_KEY_VAR).ok())
    }

    /// Builds a configuration from an optional credential value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when the value is absent or empty.
    pub fn from_key(api_key: Option<String>) -> Result<Self, Error> {
        match api_key {
            Some(key) if !key.is_empty() => Ok(Self {
                api_key: key,
                model: DEFAULT_MODEL.to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
            }),
            _ => Err(Error::MissingApiKey),
        }
    }
}
