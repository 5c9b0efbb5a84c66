//! Web Search Value Objects
//!
//! Value objects representing answers from web-grounded search backends.

use serde::{Deserialize, Serialize};

/// Value Object: Web-Grounded Search Answer
///
/// The synthesized answer a search provider returns for a query, together
/// with the sources the backend grounded it on. Providers that expose no
/// citation metadata return an empty source list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchAnswer {
    /// The query that produced this answer
    pub query: String,
    /// Synthesized answer text
    pub content: String,
    /// Model that produced the answer
    pub model: String,
    /// Sources the answer was grounded on
    pub sources: Vec<SearchSource>,
}

/// Value Object: Cited Search Source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSource {
    /// Source page title, empty when the backend omits it
    pub title: String,
    /// Source URL
    pub url: String,
}
