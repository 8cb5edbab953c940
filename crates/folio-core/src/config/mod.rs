//! Configuration system for folio.
//! TOML-based, layered: CLI > env > config file > defaults.

pub mod defaults;
pub mod embedding_config;
pub mod folio_config;
pub mod knowledge_config;
pub mod matcher_config;
pub mod observability_config;

pub use embedding_config::EmbeddingConfig;
pub use folio_config::{CliOverrides, FolioConfig};
pub use knowledge_config::KnowledgeConfig;
pub use matcher_config::MatcherConfig;
pub use observability_config::ObservabilityConfig;
