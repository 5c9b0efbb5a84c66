//! Tests for the default search factory wiring
//!
//! End-to-end through real provider types: URL-based selection, instance
//! caching by backend identity, and the OpenAI-compatible fallback.

use std::sync::Arc;

use trademind_domain::ProviderSettings;
use trademind_providers::default_search_factory;

#[test]
fn gemini_backend_builds_the_google_provider() {
    let factory = default_search_factory();
    let settings = ProviderSettings::new("https://generativelanguage.googleapis.com/v1")
        .with_quick_think_llm("gemini-pro");

    let provider = factory.create_provider(&settings).expect("google route");

    assert_eq!(provider.provider_name(), "google");
    assert_eq!(provider.model(), "gemini-pro");
}

#[test]
fn hosted_openai_backend_builds_the_openai_provider() {
    let factory = default_search_factory();
    let settings =
        ProviderSettings::new("https://api.openai.com/v1").with_quick_think_llm("gpt-4o-mini");

    let provider = factory.create_provider(&settings).expect("openai route");

    assert_eq!(provider.provider_name(), "openai");
    assert_eq!(provider.model(), "gpt-4o-mini");
}

#[test]
fn unknown_vendor_falls_back_to_openai_compatible() {
    let factory = default_search_factory();
    let settings = ProviderSettings::new("https://some.other.vendor/v1");

    let provider = factory.create_provider(&settings).expect("default route");

    assert_eq!(provider.provider_name(), "openai");
}

#[test]
fn equal_backend_identity_shares_one_instance() {
    let factory = default_search_factory();
    let settings = ProviderSettings::new("https://generativelanguage.googleapis.com/v1")
        .with_quick_think_llm("gemini-pro");

    let first = factory.create_provider(&settings).expect("first call");
    let second = factory.create_provider(&settings).expect("second call");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(factory.cached_provider_count(), 1);
}

#[test]
fn different_quick_think_llm_gets_its_own_instance() {
    let factory = default_search_factory();
    let base = ProviderSettings::new("https://api.openai.com/v1");

    let quick = factory
        .create_provider(&base.clone().with_quick_think_llm("gpt-4o-mini"))
        .expect("quick model");
    let deep = factory
        .create_provider(&base.with_quick_think_llm("gpt-4o"))
        .expect("deep model");

    assert!(!Arc::ptr_eq(&quick, &deep));
    assert_eq!(quick.model(), "gpt-4o-mini");
    assert_eq!(deep.model(), "gpt-4o");
}

#[test]
fn clear_cache_reconstructs_on_next_call() {
    let factory = default_search_factory();
    let settings = ProviderSettings::new("https://api.openai.com/v1");

    let before = factory.create_provider(&settings).expect("first call");
    factory.clear_cache();
    let after = factory.create_provider(&settings).expect("post-clear call");

    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn factory_advertises_builtin_provider_types() {
    let factory = default_search_factory();

    let mut types = factory.available_provider_types();
    types.sort();
    assert_eq!(types, vec!["google".to_string(), "openai".to_string()]);
}

#[test]
fn each_factory_owns_an_isolated_cache() {
    let settings = ProviderSettings::new("https://api.openai.com/v1");

    let first = default_search_factory().create_provider(&settings).expect("factory one");
    let second = default_search_factory().create_provider(&settings).expect("factory two");

    assert!(
        !Arc::ptr_eq(&first, &second),
        "no shared global state between factories"
    );
}
