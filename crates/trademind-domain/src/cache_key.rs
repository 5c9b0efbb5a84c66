//! Deterministic Provider-Identity Digests
//!
//! A [`CacheKey`] identifies a provider instance by the subset of settings
//! that determine which provider gets built and how: the backend URL and the
//! quick-think model. Two settings values that agree on those fields map to
//! the same key; every other field is free to differ without invalidating a
//! cached instance.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::settings::ProviderSettings;

/// Digest of the settings fields that determine provider identity
///
/// The key is a hex-encoded SHA-256 of a canonical JSON document. JSON
/// object keys are sorted by `serde_json`'s default `BTreeMap` backing, so
/// the serialization is stable across processes and field orderings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Compute the cache key for a search provider
    ///
    /// Only `backend_url` and `quick_think_llm` participate; an absent model
    /// hashes as the empty string so that "no model configured" is itself a
    /// stable identity.
    pub fn for_search(settings: &ProviderSettings) -> Self {
        let canonical = serde_json::json!({
            "backend_url": settings.backend_url,
            "model": settings.quick_think_llm.as_deref().unwrap_or(""),
        });

        let mut hasher = Sha256::new();
        hasher.update(canonical.to_string().as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// The hex digest as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
