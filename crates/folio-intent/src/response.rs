//! Response selection.

use folio_core::{ChatMessage, ChatReply, Intent, KnowledgeBase};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one of the intent's responses uniformly at random.
///
/// The intent's navigation target is carried over when present.
pub fn generate_response<R: Rng + ?Sized>(intent: &Intent, rng: &mut R) -> ChatReply {
    let content = intent.responses.choose(rng).cloned().unwrap_or_default();
    ChatMessage::assistant(content).with_navigation(intent.navigate_to.clone())
}

/// Pick one of the fallback responses uniformly at random. Never navigates.
pub fn generate_fallback_response<R: Rng + ?Sized>(kb: &KnowledgeBase, rng: &mut R) -> ChatReply {
    let content = kb.fallback_responses.choose(rng).cloned().unwrap_or_default();
    ChatMessage::assistant(content)
}
