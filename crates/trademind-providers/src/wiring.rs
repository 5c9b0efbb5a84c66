//! Default Provider Wiring
//!
//! Composition helpers connecting the concrete providers in this crate to
//! the selection machinery in `trademind-application`. This is the one
//! place that knows both sides; the application layer stays free of
//! concrete provider types.

use std::sync::Arc;

use trademind_application::{
    MappingBasedProviderSelector, SearchProviderFactory, SearchProviderRegistry,
};
use trademind_domain::ports::providers::SearchProvider;

use crate::constants::{GEMINI_URL_PATTERN, OPENAI_URL_PATTERN};
use crate::search::{GoogleSearchProvider, OpenAISearchProvider};

/// Build a search provider factory wired with the built-in backends
///
/// Registers the `google` and `openai` builders and maps backend URLs in
/// order: Google's generative-language endpoint first, then the hosted
/// OpenAI API, with `openai` as the default label for everything else -
/// any OpenAI-compatible vendor works without further wiring.
///
/// The returned factory is a plain value: the composition root owns it and
/// passes references around. Constructing one per test gives full isolation.
///
/// ## Example
///
/// ```rust
/// use trademind_providers::default_search_factory;
///
/// let factory = default_search_factory();
/// let mut types = factory.available_provider_types();
/// types.sort();
/// assert_eq!(types, vec!["google".to_string(), "openai".to_string()]);
/// ```
pub fn default_search_factory() -> SearchProviderFactory {
    let mut registry = SearchProviderRegistry::new();

    registry.register(
        "google",
        Box::new(|settings| {
            let provider = GoogleSearchProvider::from_settings(settings)?;
            Ok(Arc::new(provider) as Arc<dyn SearchProvider>)
        }),
    );
    registry.register(
        "openai",
        Box::new(|settings| {
            let provider = OpenAISearchProvider::from_settings(settings)?;
            Ok(Arc::new(provider) as Arc<dyn SearchProvider>)
        }),
    );

    let selector = MappingBasedProviderSelector::new("openai")
        .with_mapping(GEMINI_URL_PATTERN, "google")
        .with_mapping(OPENAI_URL_PATTERN, "openai");

    SearchProviderFactory::new(registry, Box::new(selector))
}
