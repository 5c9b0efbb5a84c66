//! Backend Provider Settings
//!
//! The configuration view consumed by provider selection and construction.
//! Settings are read-only input to this layer: whoever owns application
//! configuration builds a [`ProviderSettings`] value and hands it in.

use std::collections::HashMap;

/// Settings describing which AI backend to talk to and how
///
/// Only `backend_url` and `quick_think_llm` participate in provider
/// identity (see [`crate::cache_key::CacheKey`]); the remaining fields are
/// passed through to the constructed provider and never affect caching.
///
/// ## Example
///
/// ```rust
/// use trademind_domain::ProviderSettings;
///
/// let settings = ProviderSettings::new("https://api.openai.com/v1")
///     .with_quick_think_llm("gpt-4o-mini")
///     .with_api_key("sk-secret");
/// assert_eq!(settings.backend_url, "https://api.openai.com/v1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    /// Backend endpoint URL; selection pattern-matches on this string.
    /// An empty or unrecognized URL is not an error: selection falls
    /// through to the default provider family.
    pub backend_url: String,
    /// Model used by search providers for quick reasoning over results
    pub quick_think_llm: Option<String>,
    /// Model used by embedding providers
    pub embedding_model: Option<String>,
    /// API key for authenticated backends
    pub api_key: Option<String>,
    /// Additional backend-specific settings
    pub extra: HashMap<String, String>,
}

impl ProviderSettings {
    /// Create settings for the given backend URL
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Default::default()
        }
    }

    /// Set the quick-think model
    pub fn with_quick_think_llm(mut self, model: impl Into<String>) -> Self {
        self.quick_think_llm = Some(model.into());
        self
    }

    /// Set the embedding model
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Add an extra backend-specific setting
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
