//! Google Web-Grounded Search Provider
//!
//! Implements the SearchProvider port with Gemini's generateContent API and
//! its built-in `google_search` grounding tool: the model runs the web
//! search, synthesizes an answer, and reports the grounding sources.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use trademind_domain::error::{Error, Result};
use trademind_domain::ports::providers::SearchProvider;
use trademind_domain::settings::ProviderSettings;
use trademind_domain::value_objects::{SearchAnswer, SearchSource};

use crate::constants::{
    CONTENT_TYPE_JSON, DEFAULT_GEMINI_BASE_URL, DEFAULT_GOOGLE_SEARCH_MODEL,
    HTTP_REQUEST_TIMEOUT_SECS,
};
use crate::utils::HttpResponseUtils;

/// Google search provider
///
/// Answers queries through Gemini with the `google_search` tool enabled.
/// The model comes from the `quick_think_llm` setting.
pub struct GoogleSearchProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GoogleSearchProvider {
    /// Create a new Google search provider
    ///
    /// # Arguments
    /// * `api_key` - Google AI API key
    /// * `base_url` - Optional custom base URL (defaults to Google AI API)
    /// * `model` - Model name (e.g., "gemini-2.0-flash")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
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
            .unwrap_or_else(|| DEFAULT_GOOGLE_SEARCH_MODEL.to_string());
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

    fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_GEMINI_BASE_URL)
    }

    /// Run the grounded generateContent call
    async fn fetch_grounded_answer(&self, query: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": query }] }],
            "tools": [{ "google_search": {} }]
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.effective_base_url().trim_end_matches('/'),
            self.model
        );

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("x-goog-api-key", &self.api_key)
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

        HttpResponseUtils::check_and_parse(response, "Google", Error::search).await
    }

    /// Extract the answer text from the first candidate
    fn parse_answer_text(response_data: &serde_json::Value) -> Result<String> {
        let parts = response_data["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or_else(|| {
                Error::search("Invalid response format: missing candidate parts".to_string())
            })?;

        let content = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect::<Vec<_>>()
            .join("");

        if content.is_empty() {
            return Err(Error::search(
                "Invalid response format: candidate contains no text".to_string(),
            ));
        }
        Ok(content)
    }

    /// Extract grounding sources, tolerating their absence
    fn parse_sources(response_data: &serde_json::Value) -> Vec<SearchSource> {
        response_data["candidates"][0]["groundingMetadata"]["groundingChunks"]
            .as_array()
            .map(|chunks| {
                chunks
                    .iter()
                    .filter_map(|chunk| {
                        let web = &chunk["web"];
                        web["uri"].as_str().map(|uri| SearchSource {
                            title: web["title"].as_str().unwrap_or_default().to_string(),
                            url: uri.to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchProvider {
    async fn search(&self, query: &str) -> Result<SearchAnswer> {
        let response_data = self.fetch_grounded_answer(query).await?;

        Ok(SearchAnswer {
            query: query.to_string(),
            content: Self::parse_answer_text(&response_data)?,
            model: self.model.clone(),
            sources: Self::parse_sources(&response_data),
        })
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
