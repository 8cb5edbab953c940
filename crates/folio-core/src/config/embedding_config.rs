use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "tfidf", "ollama", "onnx".
    pub provider: String,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// Model name for the Ollama provider.
    pub model: String,
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// Path to the ONNX model file.
    pub model_path: Option<String>,
    /// Path to the `tokenizer.json` matching the ONNX model.
    pub tokenizer_path: Option<String>,
    /// Per-request timeout for HTTP providers.
    pub request_timeout_secs: u64,
    /// Max query embeddings kept in memory. 0 disables the cache.
    pub query_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            model: defaults::DEFAULT_OLLAMA_MODEL.to_string(),
            base_url: defaults::DEFAULT_OLLAMA_BASE_URL.to_string(),
            model_path: None,
            tokenizer_path: None,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
