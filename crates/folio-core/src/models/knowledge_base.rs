use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Intent;

/// The static document the chatbot answers from.
///
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KnowledgeBase {
    pub intents: Vec<Intent>,
    pub fallback_responses: Vec<String>,
}

impl KnowledgeBase {
    /// Look up an intent by tag.
    pub fn intent(&self, tag: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.tag == tag)
    }

    /// Total number of patterns across all intents, duplicates included.
    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|i| i.patterns.len()).sum()
    }
}
