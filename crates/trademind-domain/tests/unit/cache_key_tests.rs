//! Tests for provider cache keys
//!
//! The cache key contract: equal relevant fields always produce equal keys,
//! and fields outside `{backend_url, quick_think_llm}` never affect the key.

use trademind_domain::{CacheKey, ProviderSettings};

#[test]
fn equal_relevant_fields_produce_equal_keys() {
    let a = ProviderSettings::new("https://api.openai.com/v1").with_quick_think_llm("gpt-4o-mini");
    let b = ProviderSettings::new("https://api.openai.com/v1").with_quick_think_llm("gpt-4o-mini");

    assert_eq!(CacheKey::for_search(&a), CacheKey::for_search(&b));
}

#[test]
fn model_change_produces_distinct_key() {
    let a = ProviderSettings::new("https://api.openai.com/v1").with_quick_think_llm("gpt-4o-mini");
    let b = ProviderSettings::new("https://api.openai.com/v1").with_quick_think_llm("gpt-4o");

    assert_ne!(CacheKey::for_search(&a), CacheKey::for_search(&b));
}

#[test]
fn backend_url_change_produces_distinct_key() {
    let a = ProviderSettings::new("https://api.openai.com/v1");
    let b = ProviderSettings::new("https://some.other.vendor/v1");

    assert_ne!(CacheKey::for_search(&a), CacheKey::for_search(&b));
}

#[test]
fn irrelevant_fields_do_not_affect_key() {
    let plain = ProviderSettings::new("https://api.openai.com/v1").with_quick_think_llm("gpt-4o");
    let decorated = ProviderSettings::new("https://api.openai.com/v1")
        .with_quick_think_llm("gpt-4o")
        .with_api_key("sk-rotated-key")
        .with_embedding_model("text-embedding-3-large")
        .with_extra("region", "eu-west-1");

    assert_eq!(
        CacheKey::for_search(&plain),
        CacheKey::for_search(&decorated),
        "api_key, embedding_model, and extra settings must not invalidate the cache"
    );
}

#[test]
fn missing_model_is_a_stable_identity() {
    let a = ProviderSettings::new("http://localhost:11434");
    let b = ProviderSettings::new("http://localhost:11434");

    assert_eq!(CacheKey::for_search(&a), CacheKey::for_search(&b));
}

#[test]
fn key_renders_as_hex_digest() {
    let key = ProviderSettings::new("https://api.openai.com/v1");
    let key = CacheKey::for_search(&key);

    assert_eq!(key.as_str().len(), 64, "SHA-256 hex digest is 64 chars");
    assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(key.to_string(), key.as_str());
}
