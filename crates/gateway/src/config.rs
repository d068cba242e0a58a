//! Configuration loading from stockgw.toml.

use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Chat-completion backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,

    /// HTTP surface configuration.
    #[serde(default)]
    pub http: HttpConfig,

    /// Tool server process configuration.
    #[serde(default)]
    pub tools: ToolServerConfig,
}

/// Backend provider configuration.
#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    /// Model to use.
    #[serde(default = "default_model")]
    pub model: String,

    /// Response token budget.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Anthropic API key. Falls back to the ANTHROPIC_API_KEY environment
    /// variable when unset.
    pub api_key: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_key: None,
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    /// Address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Development origin allowed to make cross-origin requests.
    /// Explicitly setting this to nothing disables CORS entirely.
    #[serde(default = "default_cors_origin")]
    pub cors_origin: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// The tool server process to spawn.
#[derive(Debug, Deserialize)]
pub struct ToolServerConfig {
    #[serde(default = "default_tool_command")]
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ToolServerConfig {
    fn default() -> Self {
        Self {
            command: default_tool_command(),
            args: Vec::new(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_cors_origin() -> Option<String> {
    Some("http://localhost:3000".to_string())
}

fn default_tool_command() -> String {
    "stockd".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve the API key from config or environment.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = &self.backend.api_key {
            return Ok(key.clone());
        }
        std::env::var("ANTHROPIC_API_KEY").map_err(|_| ConfigError::MissingApiKey)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("API key not configured: set backend.api_key or ANTHROPIC_API_KEY")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_an_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.http.bind, "127.0.0.1:8080");
        assert_eq!(
            config.http.cors_origin.as_deref(),
            Some("http://localhost:3000")
        );
        assert_eq!(config.tools.command, "stockd");
        assert_eq!(config.backend.max_tokens, 1024);
    }

    #[test]
    fn parsed_values_override_defaults() {
        let config = Config::parse(
            r#"
            [backend]
            model = "claude-haiku-4-5"
            api_key = "sk-ant-test"

            [http]
            bind = "0.0.0.0:9000"

            [tools]
            command = "./target/debug/stockd"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.model, "claude-haiku-4-5");
        assert_eq!(config.http.bind, "0.0.0.0:9000");
        assert_eq!(config.tools.command, "./target/debug/stockd");
        assert_eq!(config.api_key().unwrap(), "sk-ant-test");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        assert!(matches!(
            Config::parse("backend = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
