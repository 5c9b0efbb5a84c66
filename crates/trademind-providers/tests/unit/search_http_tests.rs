//! HTTP-level tests for search providers
//!
//! Each provider runs against a wiremock stand-in for its backend and is
//! driven through the port trait, answer text and source extraction
//! included.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trademind_domain::ProviderSettings;
use trademind_domain::ports::providers::SearchProvider;
use trademind_providers::search::{GoogleSearchProvider, OpenAISearchProvider};

#[tokio::test]
async fn google_search_parses_answer_and_grounding_sources() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .and(header("x-goog-api-key", "AIza-test"))
        .and(body_partial_json(json!({ "tools": [{ "google_search": {} }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "The Fed held rates steady" },
                        { "text": " at its June meeting." }
                    ]
                },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://example.com/fed", "title": "Fed statement" } },
                        { "retrievedContext": { "text": "not a web chunk" } }
                    ]
                }
            }]
        })))
        .mount(&server)
        .await;

    let settings = ProviderSettings::new(server.uri())
        .with_quick_think_llm("gemini-pro")
        .with_api_key("AIza-test");
    let provider = GoogleSearchProvider::from_settings(&settings).expect("client builds");

    let answer = provider.search("fed rate decision").await.expect("search succeeds");

    assert_eq!(answer.query, "fed rate decision");
    assert_eq!(answer.content, "The Fed held rates steady at its June meeting.");
    assert_eq!(answer.model, "gemini-pro");
    assert_eq!(answer.sources.len(), 1, "non-web chunks are skipped");
    assert_eq!(answer.sources[0].url, "https://example.com/fed");
    assert_eq!(answer.sources[0].title, "Fed statement");
}

#[tokio::test]
async fn google_search_without_grounding_metadata_returns_empty_sources() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "No relevant news." }] } }]
        })))
        .mount(&server)
        .await;

    let provider = GoogleSearchProvider::from_settings(&ProviderSettings::new(server.uri()))
        .expect("client builds");

    let answer = provider.search("quiet week").await.expect("search succeeds");
    assert_eq!(answer.content, "No relevant news.");
    assert!(answer.sources.is_empty());
}

#[tokio::test]
async fn openai_search_parses_answer_and_url_citations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "gpt-4o-mini", "web_search_options": {} })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "content": "Oil rallied on supply concerns.",
                    "annotations": [{
                        "type": "url_citation",
                        "url_citation": {
                            "url": "https://example.com/oil",
                            "title": "Oil markets"
                        }
                    }]
                }
            }]
        })))
        .mount(&server)
        .await;

    let settings = ProviderSettings::new(server.uri())
        .with_quick_think_llm("gpt-4o-mini")
        .with_api_key("sk-test");
    let provider = OpenAISearchProvider::from_settings(&settings).expect("client builds");

    let answer = provider.search("oil price today").await.expect("search succeeds");

    assert_eq!(answer.content, "Oil rallied on supply concerns.");
    assert_eq!(answer.sources.len(), 1);
    assert_eq!(answer.sources[0].url, "https://example.com/oil");
}

#[tokio::test]
async fn openai_search_rejects_missing_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let provider = OpenAISearchProvider::from_settings(&ProviderSettings::new(server.uri()))
        .expect("client builds");

    let err = provider.search("anything").await.expect_err("empty choices fail");
    assert!(err.to_string().contains("missing message content"), "{err}");
}

#[tokio::test]
async fn rate_limit_maps_to_search_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let provider = OpenAISearchProvider::from_settings(&ProviderSettings::new(server.uri()))
        .expect("client builds");

    let err = provider.search("anything").await.expect_err("429 fails");
    let rendered = err.to_string();
    assert!(rendered.contains("rate limit exceeded"), "{rendered}");
    assert!(rendered.starts_with("Search provider error"), "{rendered}");
}
