//! # TradeMind - Infrastructure Layer
//!
//! Configuration loading and logging for the provider layer. This crate
//! owns the boundary between the process environment (config files, env
//! vars, log subscribers) and the domain's [`ProviderSettings`] input.
//!
//! ## Contents
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `AppConfig` types and the figment-based `ConfigLoader` |
//! | [`logging`] | tracing subscriber initialization |
//!
//! [`ProviderSettings`]: trademind_domain::ProviderSettings

/// Application configuration types and loading
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Structured logging with tracing
pub mod logging;

mod error_ext;

pub use config::{AppConfig, BackendConfig, ConfigLoader, LoggingConfig};
pub use logging::init_logging;
