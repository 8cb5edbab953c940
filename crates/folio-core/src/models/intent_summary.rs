use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Intent;
use crate::constants::EXAMPLE_PATTERN_LIMIT;

/// Debug view of an intent: its tag and a few example patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntentSummary {
    pub tag: String,
    #[serde(rename = "examplePatterns")]
    pub example_patterns: Vec<String>,
}

impl From<&Intent> for IntentSummary {
    fn from(intent: &Intent) -> Self {
        Self {
            tag: intent.tag.clone(),
            example_patterns: intent
                .patterns
                .iter()
                .take(EXAMPLE_PATTERN_LIMIT)
                .cloned()
                .collect(),
        }
    }
}
