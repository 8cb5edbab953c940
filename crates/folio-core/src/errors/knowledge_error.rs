/// Knowledge base loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("knowledge file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse knowledge base {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("duplicate intent tag: {tag}")]
    DuplicateTag { tag: String },

    #[error("intent {tag} has no patterns")]
    EmptyPatterns { tag: String },

    #[error("intent {tag} has no responses")]
    EmptyResponses { tag: String },

    #[error("intent {tag} has a blank pattern")]
    EmptyPattern { tag: String },

    #[error("knowledge base has no fallback responses")]
    NoFallbackResponses,
}
