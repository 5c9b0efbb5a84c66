//! Caching Provider Factory
//!
//! Facade composing a [`ProviderSelector`] and a [`SearchProviderRegistry`]
//! behind one `create_provider` call, with an instance cache keyed by
//! [`CacheKey`]. Providers hold connection pools, so callers get shared
//! references to one instance per distinct backend identity instead of
//! re-paying construction on every call.
//!
//! The factory is an explicit long-lived value: the composition root
//! constructs it and passes it by reference to consumers. There is no
//! process-wide singleton, which keeps lifecycle and test isolation
//! straightforward (construct one per test).

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use trademind_domain::cache_key::CacheKey;
use trademind_domain::error::Result;
use trademind_domain::ports::providers::SearchProvider;
use trademind_domain::settings::ProviderSettings;

use crate::registry::SearchProviderRegistry;
use crate::selector::ProviderSelector;

/// Caching factory for search providers
///
/// Guarantee: two `create_provider` calls whose settings agree on
/// `{backend_url, quick_think_llm}` return the *same* instance
/// (`Arc::ptr_eq`), not merely an equal one. The cache is never evicted
/// per-entry; [`clear_cache`](Self::clear_cache) empties it wholesale.
///
/// ## Example
///
/// ```rust
/// use trademind_application::{
///     MappingBasedProviderSelector, SearchProviderFactory, SearchProviderRegistry,
/// };
///
/// let registry = SearchProviderRegistry::new();
/// let selector = MappingBasedProviderSelector::new("openai");
/// let factory = SearchProviderFactory::new(registry, Box::new(selector));
/// assert!(factory.available_provider_types().is_empty());
/// ```
pub struct SearchProviderFactory {
    registry: SearchProviderRegistry,
    selector: Box<dyn ProviderSelector>,
    cache: DashMap<CacheKey, Arc<dyn SearchProvider>>,
}

impl SearchProviderFactory {
    /// Compose a factory from a populated registry and a selector
    pub fn new(registry: SearchProviderRegistry, selector: Box<dyn ProviderSelector>) -> Self {
        Self {
            registry,
            selector,
            cache: DashMap::new(),
        }
    }

    /// Return the provider for the given settings, constructing it at most
    /// once per backend identity
    ///
    /// Cache misses resolve a provider-type label through the selector and
    /// build through the registry. Concurrent callers racing on the same new
    /// key may each run the builder, but the entry API keeps exactly one
    /// instance and every caller receives that one, so the
    /// single-instance-per-key guarantee holds under contention.
    pub fn create_provider(&self, settings: &ProviderSettings) -> Result<Arc<dyn SearchProvider>> {
        let key = CacheKey::for_search(settings);

        if let Some(cached) = self.cache.get(&key) {
            debug!(key = %key, "search provider cache hit");
            return Ok(Arc::clone(cached.value()));
        }

        let label = self.selector.select_provider_type(settings);
        debug!(key = %key, label = %label, "constructing search provider");
        let provider = self.registry.build(&label, settings)?;

        let entry = self.cache.entry(key).or_insert(provider);
        Ok(Arc::clone(entry.value()))
    }

    /// Drop every cached instance
    ///
    /// Intended for configuration changes; the next `create_provider` call
    /// re-constructs. There is no selective invalidation.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of distinct backend identities currently cached
    pub fn cached_provider_count(&self) -> usize {
        self.cache.len()
    }

    /// Labels the underlying registry can build
    pub fn available_provider_types(&self) -> Vec<String> {
        self.registry.available_types()
    }
}
