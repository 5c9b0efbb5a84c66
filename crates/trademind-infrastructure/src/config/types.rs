//! Configuration types

use serde::{Deserialize, Serialize};

use trademind_domain::settings::ProviderSettings;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// AI backend configuration
    pub backend: BackendConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// AI backend configuration
///
/// Describes which backend the provider layer talks to. The URL drives
/// provider selection; the models and key are passed through to whichever
/// provider gets constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend endpoint URL
    pub backend_url: String,
    /// Model used for quick reasoning (search answers)
    pub quick_think_llm: String,
    /// Model used for embedding generation
    pub embedding_model: String,
    /// API key for authenticated backends
    pub api_key: Option<String>,
}

impl BackendConfig {
    /// Bridge this configuration into the domain's provider settings
    pub fn provider_settings(&self) -> ProviderSettings {
        let mut settings = ProviderSettings::new(&self.backend_url)
            .with_quick_think_llm(&self.quick_think_llm)
            .with_embedding_model(&self.embedding_model);
        if let Some(api_key) = &self.api_key {
            settings = settings.with_api_key(api_key);
        }
        settings
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_url: "https://api.openai.com/v1".to_string(),
            quick_think_llm: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            api_key: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-structured log lines instead of human-readable ones
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
