//! Embedding Provider Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Semantic embedding capability
///
/// Business contract for AI backends that transform text into semantic
/// embeddings, from hosted APIs to self-hosted local servers.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item; providers only
/// implement `embed_batch()` unless a single-item optimization exists.
/// `health_check()` performs one throwaway embed call.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Identifier of this provider implementation (e.g., "openai", "ollama")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
