//! OpenAI-Compatible Web-Grounded Search Provider
//!
//! Implements the SearchProvider port with the chat-completions API and its
//! `web_search_options` extension. Works against the hosted OpenAI API and
//! any compatible backend that honors the option.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use trademind_domain::error::{Error, Result};
use trademind_domain::ports::providers::SearchProvider;
use trademind_domain::settings::ProviderSettings;
use trademind_domain::value_objects::{SearchAnswer, SearchSource};

use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_SEARCH_MODEL,
    HTTP_REQUEST_TIMEOUT_SECS,
};
use crate::utils::HttpResponseUtils;

/// OpenAI-compatible search provider
///
/// Answers queries through a chat completion with web search enabled. The
/// model comes from the `quick_think_llm` setting, the endpoint from the
/// backend URL.
pub struct OpenAISearchProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAISearchProvider {
    /// Create a new OpenAI-compatible search provider
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            base_url,
            model,
            timeout,
            http_client,
        }
    }

    /// Build a provider from backend settings
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self> {
        let base_url = if settings.backend_url.is_empty() {
            None
        } else {
            Some(settings.backend_url.clone())
        };
        let model = settings
            .quick_think_llm
            .clone()
            .unwrap_or_else(|| DEFAULT_OPENAI_SEARCH_MODEL.to_string());
        let timeout = Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS);
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self::new(
            settings.api_key.clone().unwrap_or_default(),
            base_url,
            model,
            timeout,
            http_client,
        ))
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_OPENAI_BASE_URL)
    }

    /// Run the web-search chat completion
    async fn fetch_completion(&self, query: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "web_search_options": {},
            "messages": [{ "role": "user", "content": query }]
        });

        let response = self
            .http_client
            .post(format!(
                "{}/chat/completions",
                self.base_url().trim_end_matches('/')
            ))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::search(format!("Request timed out after {:?}", self.timeout))
                } else {
                    Error::search(format!("HTTP request failed: {e}"))
                }
            })?;

        HttpResponseUtils::check_and_parse(response, "OpenAI", Error::search).await
    }

    /// Extract the answer text from the first choice
    fn parse_answer_text(response_data: &serde_json::Value) -> Result<String> {
        response_data["choices"][0]["message"]["content"]
            .as_str()
            .filter(|content| !content.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::search("Invalid response format: missing message content".to_string())
            })
    }

    /// Extract URL citations, tolerating their absence
    fn parse_sources(response_data: &serde_json::Value) -> Vec<SearchSource> {
        response_data["choices"][0]["message"]["annotations"]
            .as_array()
            .map(|annotations| {
                annotations
                    .iter()
                    .filter_map(|annotation| {
                        let citation = &annotation["url_citation"];
                        citation["url"].as_str().map(|url| SearchSource {
                            title: citation["title"].as_str().unwrap_or_default().to_string(),
                            url: url.to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchProvider for OpenAISearchProvider {
    async fn search(&self, query: &str) -> Result<SearchAnswer> {
        let response_data = self.fetch_completion(query).await?;

        Ok(SearchAnswer {
            query: query.to_string(),
            content: Self::parse_answer_text(&response_data)?,
            model: self.model.clone(),
            sources: Self::parse_sources(&response_data),
        })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
