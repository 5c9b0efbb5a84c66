//! Provider Selection Strategies
//!
//! A selector maps backend settings to a provider-type label. Selection is
//! policy only: it never constructs anything and performs no I/O, which
//! keeps it trivially testable and lets the factory swap strategies.

use trademind_domain::settings::ProviderSettings;

/// Strategy for choosing a provider family from backend settings
///
/// Implementations must be pure functions of the settings: no side effects,
/// no I/O, and a label for every input (the label space always resolves;
/// "nothing matched" is expressed through a default label, not an error).
pub trait ProviderSelector: Send + Sync {
    /// Select the provider-type label for the given settings
    fn select_provider_type(&self, settings: &ProviderSettings) -> String;
}

/// Selects a provider by URL substring mapping table
///
/// Holds an ordered list of `(pattern, label)` pairs. The first pattern that
/// occurs as a substring of `backend_url` wins, so registration order is
/// semantically significant; a `Vec` rather than a map preserves it. URLs
/// matching nothing fall through to the default label, including empty or
/// malformed URLs: misconfiguration resolves to the default family rather
/// than failing.
///
/// ## Example
///
/// ```rust
/// use trademind_application::selector::{MappingBasedProviderSelector, ProviderSelector};
/// use trademind_domain::ProviderSettings;
///
/// let selector = MappingBasedProviderSelector::new("openai")
///     .with_mapping("generativelanguage.googleapis.com", "google")
///     .with_mapping("api.openai.com", "openai");
///
/// let settings = ProviderSettings::new("https://generativelanguage.googleapis.com/v1");
/// assert_eq!(selector.select_provider_type(&settings), "google");
/// ```
pub struct MappingBasedProviderSelector {
    mappings: Vec<(String, String)>,
    default_provider: String,
}

impl MappingBasedProviderSelector {
    /// Create a selector with the given default label and no mappings
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            mappings: Vec::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Append a pattern → label mapping (builder form)
    pub fn with_mapping(mut self, pattern: impl Into<String>, label: impl Into<String>) -> Self {
        self.push_mapping(pattern, label);
        self
    }

    /// Append a pattern → label mapping
    ///
    /// Later mappings only apply to URLs no earlier pattern matched.
    pub fn push_mapping(&mut self, pattern: impl Into<String>, label: impl Into<String>) {
        self.mappings.push((pattern.into(), label.into()));
    }

    /// The label used when no pattern matches
    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }
}

impl ProviderSelector for MappingBasedProviderSelector {
    fn select_provider_type(&self, settings: &ProviderSettings) -> String {
        for (pattern, label) in &self.mappings {
            if settings.backend_url.contains(pattern.as_str()) {
                return label.clone();
            }
        }
        self.default_provider.clone()
    }
}
