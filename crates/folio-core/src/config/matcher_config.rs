use serde::{Deserialize, Serialize};

use super::defaults;

/// Intent matching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Cosine similarity a semantic match must strictly exceed.
    pub threshold: f32,
    /// Inputs with at most this many tokens try keyword matching first.
    pub keyword_max_tokens: usize,
    /// Seed for response selection. `None` seeds from OS entropy.
    pub response_seed: Option<u64>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_MATCH_THRESHOLD,
            keyword_max_tokens: defaults::DEFAULT_KEYWORD_MAX_TOKENS,
            response_seed: None,
        }
    }
}
