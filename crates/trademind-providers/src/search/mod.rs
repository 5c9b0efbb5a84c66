//! Web-Search Provider Implementations
//!
//! Implements the `SearchProvider` port: each backend answers a query with
//! live web grounding and reports the sources it used. These are the
//! concrete instances the caching factory hands out; construction goes
//! through the registry wired up in [`crate::wiring`].

/// Google web-grounded search backend
pub mod google;
/// OpenAI-compatible web-grounded search backend
pub mod openai;

pub use google::GoogleSearchProvider;
pub use openai::OpenAISearchProvider;
