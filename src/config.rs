//! Process configuration read from the environment.

use thiserror::Error;

pub const BASE_URL_VAR: &str = "AI_CHAT_BASE_URL";
pub const API_KEY_VAR: &str = "AI_CHAT_KEY";
pub const MODEL_VAR: &str = "AI_CHAT_MODEL";
pub const NAME_VAR: &str = "AI_CHAT_NAME";

/// Errors raised while loading the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Immutable settings for one server process.
///
/// Built once at startup and handed to the tool adapter by value; nothing
/// reads the environment after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the OpenAI-compatible endpoint (e.g. `https://api.openai.com/v1`).
    pub base_url: String,
    /// Bearer credential sent with every request.
    pub api_key: String,
    /// Model identifier requested from the endpoint.
    pub model: String,
    /// Human-readable name of the remote assistant.
    pub name: String,
}

impl Config {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            name: name.into(),
        }
    }

    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// Variables are checked in a fixed order and the first one that is
    /// absent or empty is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            base_url: require(BASE_URL_VAR)?,
            api_key: require(API_KEY_VAR)?,
            model: require(MODEL_VAR)?,
            name: require(NAME_VAR)?,
        })
    }

    /// Slug used in the tool name: lower-cased, first space turned into `-`.
    pub fn tool_slug(&self) -> String {
        self.name.to_lowercase().replacen(' ', "-", 1)
    }

    /// Name of the single advertised tool.
    pub fn tool_name(&self) -> String {
        format!("chat-with-{}", self.tool_slug())
    }
}
