//! Error handling for folio.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod embedding_error;
pub mod knowledge_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use knowledge_error::KnowledgeError;

/// Top-level error for the folio engine.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("knowledge base error: {0}")]
    KnowledgeError(#[from] KnowledgeError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("chatbot not initialized")]
    NotInitialized,
}

pub type FolioResult<T> = Result<T, FolioError>;
