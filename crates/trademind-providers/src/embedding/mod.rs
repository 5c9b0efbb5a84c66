//! Embedding Provider Implementations
//!
//! Implements the `EmbeddingProvider` port for the supported backends and
//! provides [`create_embedding_provider`], the stateless dispatcher that
//! picks a backend family from the URL in the settings.

use std::sync::Arc;

use tracing::debug;

use trademind_domain::error::Result;
use trademind_domain::ports::providers::EmbeddingProvider;
use trademind_domain::settings::ProviderSettings;

use crate::constants::{GEMINI_URL_PATTERN, OLLAMA_URL_PATTERN};

/// Gemini embedding backend
pub mod gemini;
/// Ollama local embedding backend
pub mod ollama;
/// OpenAI-compatible embedding backend
pub mod openai;

pub use gemini::GeminiEmbeddingProvider;
pub use ollama::OllamaEmbeddingProvider;
pub use openai::OpenAIEmbeddingProvider;

/// Build the embedding provider matching the backend URL
///
/// Stateless dispatch over a fixed, ordered set of URL patterns: Google's
/// generative-language endpoint, then a local Ollama server, and otherwise
/// any OpenAI-compatible backend. Selection itself cannot fail - the
/// OpenAI-compatible branch accepts every remaining URL - so the only error
/// path is provider construction.
///
/// Unlike search providers, embedding providers are built fresh per call;
/// callers that want sharing hold on to the returned `Arc`.
pub fn create_embedding_provider(
    settings: &ProviderSettings,
) -> Result<Arc<dyn EmbeddingProvider>> {
    let backend_url = settings.backend_url.as_str();

    let provider: Arc<dyn EmbeddingProvider> = if backend_url.contains(GEMINI_URL_PATTERN) {
        Arc::new(GeminiEmbeddingProvider::from_settings(settings)?)
    } else if backend_url.contains(OLLAMA_URL_PATTERN) {
        Arc::new(OllamaEmbeddingProvider::from_settings(settings)?)
    } else {
        Arc::new(OpenAIEmbeddingProvider::from_settings(settings)?)
    };

    debug!(
        provider = provider.provider_name(),
        backend_url, "dispatched embedding provider"
    );
    Ok(provider)
}
