//! Shared test doubles for the application-layer suite
//!
//! The factory and registry only ever see the `SearchProvider` trait, so a
//! stub that records its construction is enough to observe selection,
//! caching, and error behavior without any network.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use trademind_application::SearchProviderBuilder;
use trademind_domain::error::Result;
use trademind_domain::ports::providers::SearchProvider;
use trademind_domain::value_objects::SearchAnswer;

/// Search provider that answers every query with a canned string
pub struct StubSearchProvider {
    pub name: &'static str,
    pub model: String,
}

#[async_trait]
impl SearchProvider for StubSearchProvider {
    async fn search(&self, query: &str) -> Result<SearchAnswer> {
        Ok(SearchAnswer {
            query: query.to_string(),
            content: format!("stub answer from {}", self.name),
            model: self.model.clone(),
            sources: Vec::new(),
        })
    }

    fn provider_name(&self) -> &str {
        self.name
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Builder producing [`StubSearchProvider`]s and counting invocations
///
/// The counter observes how many times construction actually ran, which is
/// how the tests distinguish a cache hit from a rebuild.
pub fn counting_builder(name: &'static str, constructions: Arc<AtomicUsize>) -> SearchProviderBuilder {
    Box::new(move |settings| {
        constructions.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(StubSearchProvider {
            name,
            model: settings.quick_think_llm.clone().unwrap_or_default(),
        }))
    })
}
