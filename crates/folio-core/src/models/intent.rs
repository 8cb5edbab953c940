use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A labeled category of user request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Intent {
    /// Unique identifier across the knowledge base.
    pub tag: String,
    /// Example phrases that signal this intent, in priority order.
    pub patterns: Vec<String>,
    /// Candidate replies; one is picked at random per match.
    pub responses: Vec<String>,
    /// Client-side route to open after replying. `null` and absent both mean none.
    #[serde(default)]
    pub navigate_to: Option<String>,
}

impl Intent {
    /// Whether any pattern equals `pattern` ignoring case.
    pub fn has_pattern(&self, pattern: &str) -> bool {
        let needle = pattern.to_lowercase();
        self.patterns.iter().any(|p| p.to_lowercase() == needle)
    }
}
