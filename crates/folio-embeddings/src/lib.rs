//! # folio-embeddings
//!
//! Embedding providers for the folio intent matcher.
//!
//! ## Architecture
//!
//! ```text
//! create_provider (selected once per service)
//! ├── TfIdfFallback (default, always available)
//! ├── OllamaProvider (local HTTP server)
//! └── OnnxProvider (feature "onnx", local sentence encoder)
//! QueryEmbeddingCache (moka, keyed by blake3 of normalized input)
//! ```

pub mod cache;
pub mod providers;

pub use cache::QueryEmbeddingCache;
pub use providers::{create_provider, OllamaProvider, TfIdfFallback};

#[cfg(feature = "onnx")]
pub use providers::OnnxProvider;
