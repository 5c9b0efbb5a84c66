//! Tests for URL-mapping provider selection
//!
//! Selection is a pure function of the settings: the backend URL decides
//! the label, every other field is ignored, and an unmatched URL resolves
//! to the default label instead of failing.

use trademind_application::selector::{MappingBasedProviderSelector, ProviderSelector};
use trademind_domain::ProviderSettings;

fn default_selector() -> MappingBasedProviderSelector {
    MappingBasedProviderSelector::new("openai")
        .with_mapping("generativelanguage.googleapis.com", "google")
        .with_mapping("api.openai.com", "openai")
}

#[test]
fn google_pattern_selects_google_label() {
    let settings = ProviderSettings::new("https://generativelanguage.googleapis.com/v1");
    assert_eq!(default_selector().select_provider_type(&settings), "google");
}

#[test]
fn selection_ignores_fields_other_than_backend_url() {
    let settings = ProviderSettings::new("https://generativelanguage.googleapis.com/v1")
        .with_quick_think_llm("gemini-pro")
        .with_api_key("AIza-anything")
        .with_extra("tenant", "alpha");

    assert_eq!(default_selector().select_provider_type(&settings), "google");
}

#[test]
fn openai_pattern_selects_openai_label() {
    let settings = ProviderSettings::new("https://api.openai.com/v1");
    assert_eq!(default_selector().select_provider_type(&settings), "openai");
}

#[test]
fn unknown_vendor_resolves_to_default() {
    let settings = ProviderSettings::new("https://some.other.vendor/v1");
    assert_eq!(default_selector().select_provider_type(&settings), "openai");
}

#[test]
fn registration_order_decides_between_overlapping_patterns() {
    let first_wins = MappingBasedProviderSelector::new("openai")
        .with_mapping("googleapis.com", "google")
        .with_mapping("generativelanguage.googleapis.com", "narrow");
    let reordered = MappingBasedProviderSelector::new("openai")
        .with_mapping("generativelanguage.googleapis.com", "narrow")
        .with_mapping("googleapis.com", "google");

    let settings = ProviderSettings::new("https://generativelanguage.googleapis.com/v1");
    assert_eq!(first_wins.select_provider_type(&settings), "google");
    assert_eq!(reordered.select_provider_type(&settings), "narrow");
}

#[test]
fn selector_without_mappings_always_returns_default() {
    let bare = MappingBasedProviderSelector::new("openai");

    for url in ["", "https://api.openai.com/v1", "not a url at all"] {
        assert_eq!(
            bare.select_provider_type(&ProviderSettings::new(url)),
            "openai"
        );
    }
}
