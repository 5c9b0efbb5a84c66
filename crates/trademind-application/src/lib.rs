//! # TradeMind - Application Layer
//!
//! Provider selection and lifecycle orchestration: this crate decides which
//! provider family serves a given backend configuration, builds instances
//! through an open registry, and caches them so equal configurations share
//! one instance.
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`ProviderSelector`] | Policy trait mapping settings to a provider-type label |
//! | [`MappingBasedProviderSelector`] | URL-substring mapping table with a default label |
//! | [`SearchProviderRegistry`] | Label → builder-closure table |
//! | [`SearchProviderFactory`] | Caching facade composing selector and registry |
//!
//! Concrete providers never appear here; they are registered as builder
//! closures by the composition root (see `trademind-providers`).

/// Caching provider factory
pub mod factory;
/// Provider builder registry
pub mod registry;
/// Provider selection strategies
pub mod selector;

pub use factory::SearchProviderFactory;
pub use registry::{SearchProviderBuilder, SearchProviderRegistry};
pub use selector::{MappingBasedProviderSelector, ProviderSelector};
