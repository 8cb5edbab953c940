pub mod chat_message;
pub mod chat_outcome;
pub mod intent;
pub mod intent_summary;
pub mod knowledge_base;

pub use chat_message::{ChatMessage, ChatReply, ChatRequest, Role};
pub use chat_outcome::{ChatOutcome, MatchSource};
pub use intent::Intent;
pub use intent_summary::IntentSummary;
pub use knowledge_base::KnowledgeBase;
