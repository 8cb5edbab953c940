use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ChatReply;

/// Which path of the engine produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// 1–2 token input resolved by substring overlap.
    Keyword,
    /// Embedding similarity above the threshold.
    Semantic,
    /// Nothing matched; a fallback response was used.
    Fallback,
    /// Input was blank.
    EmptyInput,
    /// Matching failed and the error was absorbed.
    Error,
}

/// A reply plus how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatOutcome {
    pub reply: ChatReply,
    pub source: MatchSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub intent_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub confidence: Option<f32>,
}

impl ChatOutcome {
    pub fn new(reply: ChatReply, source: MatchSource) -> Self {
        Self {
            reply,
            source,
            intent_tag: None,
            confidence: None,
        }
    }

    pub fn with_intent(mut self, tag: impl Into<String>) -> Self {
        self.intent_tag = Some(tag.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }
}
