//! # TradeMind - Provider Implementations
//!
//! Concrete providers behind the ports declared in `trademind-domain`, plus
//! the composition helpers that wire them into the selection machinery of
//! `trademind-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI-compatible, Gemini, Ollama |
//! | Search | `SearchProvider` | Google (Gemini grounding), OpenAI-compatible |
//!
//! ## Usage
//!
//! ```ignore
//! use trademind_providers::default_search_factory;
//! use trademind_providers::embedding::create_embedding_provider;
//!
//! let factory = default_search_factory();
//! let search = factory.create_provider(&settings)?;
//! let embedder = create_embedding_provider(&settings)?;
//! ```

// Re-export trademind-domain types commonly used with providers
pub use trademind_domain::error::{Error, Result};
pub use trademind_domain::ports::providers::{EmbeddingProvider, SearchProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations and dispatch
pub mod embedding;

/// Web-search provider implementations
pub mod search;

/// Default wiring of selectors, registries, and factories
pub mod wiring;

pub use wiring::default_search_factory;
