//! # folio-core
//!
//! Foundation crate for the folio chatbot engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FolioConfig;
pub use errors::{FolioError, FolioResult};
pub use models::{ChatMessage, ChatReply, ChatRequest, Intent, KnowledgeBase, Role};
pub use traits::IEmbeddingProvider;
