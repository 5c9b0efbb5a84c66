//! Search Provider Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::SearchAnswer;

/// Web-grounded search capability
///
/// Business contract for backends that answer a natural-language query using
/// live web results. Implementations are expected to be stateful-but-shared:
/// a single instance may hold connection pools and serve many callers, which
/// is why the factory layer caches and hands out shared references.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Answer a query using web-grounded search
    async fn search(&self, query: &str) -> Result<SearchAnswer>;

    /// Identifier of this provider implementation (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Model this provider reasons with
    fn model(&self) -> &str;
}
