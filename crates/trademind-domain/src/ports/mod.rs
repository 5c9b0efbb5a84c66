//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and outer layers.
//! Ports follow the Dependency Inversion Principle: the domain declares the
//! interface, providers and infrastructure implement it.

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{EmbeddingProvider, SearchProvider};
