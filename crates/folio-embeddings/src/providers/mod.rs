//! Provider registry and selection.
//!
//! The configured provider is tried once; if it cannot be constructed or is
//! unreachable, TF-IDF takes its place for the lifetime of the service. There
//! is no per-call fallback: pattern vectors and query vectors must come from
//! the same vector space.

pub mod ollama_provider;
#[cfg(feature = "onnx")]
pub mod onnx_provider;
pub mod tfidf_fallback;

pub use ollama_provider::OllamaProvider;
#[cfg(feature = "onnx")]
pub use onnx_provider::OnnxProvider;
pub use tfidf_fallback::TfIdfFallback;

use std::time::Duration;

use folio_core::config::EmbeddingConfig;
use folio_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Create the configured provider, falling back to TF-IDF when it is unusable.
pub async fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "ollama" => {
            let provider = OllamaProvider::new(
                config.model.clone(),
                config.dimensions,
                config.base_url.clone(),
                Duration::from_secs(config.request_timeout_secs),
            );
            if provider.health_check().await {
                info!(provider = "ollama", model = %config.model, "embedding provider connected");
                Box::new(provider)
            } else {
                warn!("Ollama unavailable, falling back to TF-IDF");
                Box::new(TfIdfFallback::new(config.dimensions))
            }
        }
        "onnx" => create_onnx_provider(config),
        "tfidf" => {
            info!(provider = "tfidf", "using TF-IDF embedding provider");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
        other => {
            warn!(provider = %other, "unknown provider, using TF-IDF fallback");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
    }
}

#[cfg(feature = "onnx")]
fn create_onnx_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match (&config.model_path, &config.tokenizer_path) {
        (Some(model_path), Some(tokenizer_path)) => {
            match OnnxProvider::load(model_path, tokenizer_path, config.dimensions) {
                Ok(p) => {
                    info!(provider = "onnx", "embedding provider loaded");
                    return Box::new(p);
                }
                Err(e) => {
                    warn!(error = %e, "ONNX provider failed to load, falling back");
                }
            }
        }
        _ => warn!("ONNX provider configured without model_path/tokenizer_path, falling back"),
    }
    info!(provider = "tfidf", "using TF-IDF fallback");
    Box::new(TfIdfFallback::new(config.dimensions))
}

#[cfg(not(feature = "onnx"))]
fn create_onnx_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    warn!("built without the \"onnx\" feature, using TF-IDF fallback");
    Box::new(TfIdfFallback::new(config.dimensions))
}
