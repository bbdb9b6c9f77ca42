//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default so partial files merge cleanly over the
//! built-in values.

use serde::{Deserialize, Serialize};

/// Groq provider configuration (`[provider]` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI-compatible Groq API.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature. Non-zero, so repeated identical questions may
    /// receive different answers.
    pub temperature: f32,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "mixtral-8x7b-32768".to_string(),
            temperature: 0.8,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key: the inline value wins, then the configured
    /// environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
    }
}

/// HTTP server configuration (`[server]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Bind host (default: loopback only).
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl FileServerConfig {
    /// The address to bind, in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language-model provider settings
    pub provider: FileProviderConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
api_key_env = "MY_GROQ_KEY"
base_url = "https://example.test/openai/v1"
model = "llama-3.3-70b-versatile"
temperature = 0.2

[server]
host = "0.0.0.0"
port = 9000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.api_key_env, "MY_GROQ_KEY");
        assert_eq!(config.provider.model, "llama-3.3-70b-versatile");
        assert_eq!(config.provider.temperature, 0.2);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[server]
port = 8080
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply everywhere else
        assert_eq!(config.provider, FileProviderConfig::default());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.provider.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.provider.model, "mixtral-8x7b-32768");
        assert_eq!(config.provider.temperature, 0.8);
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_inline_api_key_wins_over_env() {
        let config = FileProviderConfig {
            api_key: Some("inline-key".to_string()),
            ..FileProviderConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("inline-key"));
    }

    #[test]
    fn test_missing_api_key_resolves_to_none() {
        let config = FileProviderConfig {
            api_key_env: "CONSULTA_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..FileProviderConfig::default()
        };
        assert!(config.resolve_api_key().is_none());
    }
}
