// Single source of truth for all default values.

use crate::constants;

// --- Knowledge ---
pub const DEFAULT_KNOWLEDGE_PATH: &str = "data/portfolio-knowledge.json";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "tfidf";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 512;
pub const DEFAULT_OLLAMA_MODEL: &str = "nomic-embed-text";
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_024;

// --- Matcher ---
pub const DEFAULT_MATCH_THRESHOLD: f32 = constants::DEFAULT_MATCH_THRESHOLD;
pub const DEFAULT_KEYWORD_MAX_TOKENS: usize = constants::KEYWORD_MAX_TOKENS;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Config file ---
pub const DEFAULT_CONFIG_FILENAME: &str = "folio.toml";
