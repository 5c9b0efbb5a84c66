//! Application Configuration
//!
//! Serde-backed configuration types plus the figment loader that merges
//! defaults, an optional TOML file, and environment variables.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, BackendConfig, LoggingConfig};
