//! Provider Ports
//!
//! Capability traits for the two provider families the platform consumes:
//! embedding generation and web-grounded search. Concrete implementations
//! live in `trademind-providers`; the selection machinery in
//! `trademind-application` only ever sees these traits.

/// Embedding generation port
pub mod embedding;
/// Web-grounded search port
pub mod search;

pub use embedding::EmbeddingProvider;
pub use search::SearchProvider;
