//! Tests for the search provider registry

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use trademind_application::SearchProviderRegistry;
use trademind_domain::ProviderSettings;
use trademind_domain::error::Error;

use crate::support::counting_builder;

#[test]
fn build_invokes_registered_builder() {
    let constructions = Arc::new(AtomicUsize::new(0));
    let mut registry = SearchProviderRegistry::new();
    registry.register("google", counting_builder("google", Arc::clone(&constructions)));

    let settings = ProviderSettings::new("https://generativelanguage.googleapis.com/v1")
        .with_quick_think_llm("gemini-pro");
    let provider = registry.build("google", &settings).expect("registered label");

    assert_eq!(provider.provider_name(), "google");
    assert_eq!(provider.model(), "gemini-pro");
    assert_eq!(constructions.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_label_fails_without_construction() {
    let constructions = Arc::new(AtomicUsize::new(0));
    let mut registry = SearchProviderRegistry::new();
    registry.register("openai", counting_builder("openai", Arc::clone(&constructions)));

    let result = registry.build("tavily", &ProviderSettings::default());

    match result {
        Err(Error::UnknownProvider { label, available }) => {
            assert_eq!(label, "tavily");
            assert_eq!(available, vec!["openai".to_string()]);
        }
        Err(other) => panic!("expected UnknownProvider, got {other:?}"),
        Ok(_) => panic!("expected UnknownProvider, got a provider"),
    }
    assert_eq!(
        constructions.load(Ordering::SeqCst),
        0,
        "no builder may run for an unregistered label"
    );
}

#[test]
fn re_registering_a_label_replaces_the_builder() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let mut registry = SearchProviderRegistry::new();
    registry.register("openai", counting_builder("openai-v1", Arc::clone(&first)));
    registry.register("openai", counting_builder("openai-v2", Arc::clone(&second)));

    let provider = registry
        .build("openai", &ProviderSettings::default())
        .expect("label stays registered");

    assert_eq!(provider.provider_name(), "openai-v2", "last write wins");
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
    assert_eq!(registry.available_types().len(), 1, "no duplicate label");
}

#[test]
fn available_types_reflects_registrations() {
    let mut registry = SearchProviderRegistry::new();
    assert!(registry.available_types().is_empty());

    registry.register("google", counting_builder("google", Arc::new(AtomicUsize::new(0))));
    registry.register("openai", counting_builder("openai", Arc::new(AtomicUsize::new(0))));

    let mut types = registry.available_types();
    types.sort();
    assert_eq!(types, vec!["google".to_string(), "openai".to_string()]);
    assert!(registry.contains("google"));
    assert!(!registry.contains("bing"));
}
