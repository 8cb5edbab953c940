//! # folio-intent
//!
//! Intent matching for the folio chatbot.
//!
//! ## Architecture
//!
//! ```text
//! ChatbotService::process_message
//! ├── IntentMatcher::initialize   (PatternIndex, built once)
//! ├── keyword::keyword_match      (1–2 token inputs)
//! ├── IntentMatcher::match_intent (cosine over every pattern)
//! └── response                    (random response / fallback)
//! ```

pub mod keyword;
pub mod knowledge;
pub mod matcher;
pub mod pattern_index;
pub mod response;
pub mod service;
pub mod similarity;

pub use knowledge::{load_knowledge, parse_knowledge, validate_knowledge};
pub use matcher::{IntentMatch, IntentMatcher};
pub use pattern_index::{PatternEntry, PatternIndex};
pub use service::ChatbotService;
pub use similarity::cosine_similarity;
