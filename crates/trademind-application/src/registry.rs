//! Provider Builder Registry
//!
//! Open lookup table from provider-type label to a builder closure. The
//! registry is the extensibility surface of the provider layer: a new
//! backend family needs a label, a builder, and a selection pattern, and
//! nothing else changes.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use trademind_domain::error::{Error, Result};
use trademind_domain::ports::providers::SearchProvider;
use trademind_domain::settings::ProviderSettings;

/// Builder closure constructing a search provider from settings
pub type SearchProviderBuilder =
    Box<dyn Fn(&ProviderSettings) -> Result<Arc<dyn SearchProvider>> + Send + Sync>;

/// Registry of search provider builders, keyed by provider-type label
///
/// Populated once at composition time and treated as read-only afterwards.
/// Re-registering a label replaces the previous builder (last write wins);
/// duplicate registration is not an error.
#[derive(Default)]
pub struct SearchProviderRegistry {
    builders: HashMap<String, SearchProviderBuilder>,
}

impl SearchProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a label with a builder closure
    ///
    /// Last write wins: registering an existing label silently replaces the
    /// previous builder.
    pub fn register(&mut self, label: impl Into<String>, builder: SearchProviderBuilder) {
        let label = label.into();
        if self.builders.insert(label.clone(), builder).is_some() {
            debug!(label = %label, "replaced search provider builder");
        }
    }

    /// Build a provider instance for the given label
    ///
    /// Fails with [`Error::UnknownProvider`] if the label was never
    /// registered; no construction is attempted in that case.
    pub fn build(&self, label: &str, settings: &ProviderSettings) -> Result<Arc<dyn SearchProvider>> {
        let builder = self
            .builders
            .get(label)
            .ok_or_else(|| Error::unknown_provider(label, self.available_types()))?;
        builder(settings)
    }

    /// Labels with a registered builder, in no particular order
    pub fn available_types(&self) -> Vec<String> {
        self.builders.keys().cloned().collect()
    }

    /// Whether a label has a registered builder
    pub fn contains(&self, label: &str) -> bool {
        self.builders.contains_key(label)
    }
}
