use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the knowledge base lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to the knowledge base JSON document.
    pub path: String,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_KNOWLEDGE_PATH.to_string(),
        }
    }
}
