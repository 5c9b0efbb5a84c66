//! Provider Constants
//!
//! Constants specific to provider implementations: backend URL patterns the
//! dispatchers match on, default endpoints and models, and embedding
//! dimension tables.

// ============================================================================
// BACKEND URL PATTERNS
// ============================================================================

/// Substring identifying Google's generative-language backends
pub const GEMINI_URL_PATTERN: &str = "generativelanguage.googleapis.com";

/// Substring identifying a local Ollama server
pub const OLLAMA_URL_PATTERN: &str = "localhost:11434";

/// Substring identifying the hosted OpenAI API
pub const OPENAI_URL_PATTERN: &str = "api.openai.com";

// ============================================================================
// DEFAULT ENDPOINTS AND MODELS
// ============================================================================

/// Default OpenAI-compatible API endpoint
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default Google generative-language endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default local Ollama endpoint
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default OpenAI embedding model
pub const DEFAULT_OPENAI_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Default Gemini embedding model
pub const DEFAULT_GEMINI_EMBEDDING_MODEL: &str = "text-embedding-004";

/// Default Ollama embedding model
pub const DEFAULT_OLLAMA_EMBEDDING_MODEL: &str = "nomic-embed-text";

/// Default model for Google web-grounded search
pub const DEFAULT_GOOGLE_SEARCH_MODEL: &str = "gemini-2.0-flash";

/// Default model for OpenAI-compatible web-grounded search
pub const DEFAULT_OPENAI_SEARCH_MODEL: &str = "gpt-4o-mini";

// ============================================================================
// EMBEDDING DIMENSION TABLES
// ============================================================================

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Gemini embedding dimension
pub const EMBEDDING_DIMENSION_GEMINI: usize = 768;

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds (for provider API calls)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
