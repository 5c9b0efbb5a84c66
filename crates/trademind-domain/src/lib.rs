//! # TradeMind - Domain Layer
//!
//! Core business types for the TradeMind provider layer: the contracts that
//! connect agent workloads to AI backends (embedding generation and
//! web-grounded search) without naming any concrete vendor.
//!
//! ## Contents
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`settings`] | Backend settings consumed by selection and construction |
//! | [`cache_key`] | Deterministic digest identifying a provider instance |
//! | [`value_objects`] | Embeddings and search answers |
//! | [`ports`] | Provider port traits implemented by outer layers |
//!
//! This crate has no I/O. Providers and infrastructure implement the ports
//! declared here, following the Dependency Inversion Principle.

/// Deterministic provider-identity digests
pub mod cache_key;
/// Error handling types
pub mod error;
/// Domain port interfaces
pub mod ports;
/// Backend provider settings
pub mod settings;
/// Domain value objects
pub mod value_objects;

// Re-export the types almost every consumer needs
pub use cache_key::CacheKey;
pub use error::{Error, Result};
pub use ports::providers::{EmbeddingProvider, SearchProvider};
pub use settings::ProviderSettings;
pub use value_objects::{Embedding, SearchAnswer, SearchSource};
