//! ChatbotService: the per-turn entry point.
//!
//! Routing for each message:
//! 1. Build the pattern index if needed.
//! 2. Blank input → fixed "ask me something" reply.
//! 3. Keyword match (short inputs) → response from that intent.
//! 4. Semantic match above the threshold → response from that intent.
//! 5. Otherwise → fallback response.
//!
//! Any error in steps 1–4 becomes a fixed apology reply; callers never see it.

use std::path::Path;
use std::sync::{Arc, Mutex};

use folio_core::config::MatcherConfig;
use folio_core::constants::{EMPTY_INPUT_REPLY, ERROR_REPLY};
use folio_core::errors::FolioResult;
use folio_core::models::{ChatOutcome, IntentSummary, MatchSource};
use folio_core::traits::IEmbeddingProvider;
use folio_core::{ChatMessage, ChatReply, ChatRequest, FolioConfig, Intent, KnowledgeBase};
use folio_embeddings::{create_provider, QueryEmbeddingCache};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info_span, Instrument};

use crate::knowledge::{load_knowledge, validate_knowledge};
use crate::matcher::IntentMatcher;
use crate::response::{generate_fallback_response, generate_response};

/// Answers chat messages from a static knowledge base.
pub struct ChatbotService {
    matcher: IntentMatcher,
    rng: Mutex<StdRng>,
}

impl ChatbotService {
    /// Create a service over a validated knowledge base.
    ///
    /// Nothing is embedded until `initialize` or the first message.
    pub fn new(
        knowledge: KnowledgeBase,
        provider: Box<dyn IEmbeddingProvider>,
        config: MatcherConfig,
    ) -> FolioResult<Self> {
        validate_knowledge(&knowledge)?;
        let rng = match config.response_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            matcher: IntentMatcher::new(Arc::new(knowledge), provider, &config),
            rng: Mutex::new(rng),
        })
    }

    /// Load the knowledge file and select the embedding provider from `config`.
    pub async fn from_config(config: &FolioConfig) -> FolioResult<Self> {
        let knowledge = load_knowledge(Path::new(&config.knowledge.path))?;
        let provider = create_provider(&config.embedding).await;
        let service = Self::new(knowledge, provider, config.matcher.clone())?
            .with_query_cache(QueryEmbeddingCache::new(config.embedding.query_cache_size));
        Ok(service)
    }

    /// Cache query embeddings for repeated questions.
    pub fn with_query_cache(mut self, cache: QueryEmbeddingCache) -> Self {
        self.matcher = self.matcher.with_query_cache(cache);
        self
    }

    /// Embed every pattern. Idempotent; provider errors propagate.
    pub async fn initialize(&self) -> FolioResult<()> {
        self.matcher.initialize().await.map(|_| ())
    }

    /// Answer one message. Never fails.
    pub async fn process_message(&self, input: &str) -> ChatReply {
        self.process_message_detailed(input).await.reply
    }

    /// Answer one message and report how the reply was produced.
    pub async fn process_message_detailed(&self, input: &str) -> ChatOutcome {
        let span = info_span!("folio.message", input_len = input.len());
        async {
            match self.route(input).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(error = %e, "error processing message");
                    ChatOutcome::new(ChatMessage::assistant(ERROR_REPLY), MatchSource::Error)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Answer the most recent user message of a conversation.
    pub async fn respond(&self, request: &ChatRequest) -> ChatReply {
        let input = request
            .last_user_message()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        self.process_message(input).await
    }

    /// Each intent's tag and up to three example patterns.
    pub fn available_intents(&self) -> Vec<IntentSummary> {
        self.matcher
            .knowledge()
            .intents
            .iter()
            .map(IntentSummary::from)
            .collect()
    }

    pub fn is_initialized(&self) -> bool {
        self.matcher.is_initialized()
    }

    /// Unique patterns in the index; 0 until initialized.
    pub fn pattern_count(&self) -> usize {
        self.matcher.index().map_or(0, |index| index.len())
    }

    pub fn provider_name(&self) -> &str {
        self.matcher.provider_name()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        self.matcher.knowledge()
    }

    async fn route(&self, input: &str) -> FolioResult<ChatOutcome> {
        self.matcher.initialize().await?;

        let sanitized = input.trim();
        if sanitized.is_empty() {
            return Ok(ChatOutcome::new(
                ChatMessage::assistant(EMPTY_INPUT_REPLY),
                MatchSource::EmptyInput,
            ));
        }

        if let Some(intent) = self.matcher.keyword_match(sanitized) {
            debug!(tag = %intent.tag, "matched via keywords");
            return Ok(
                ChatOutcome::new(self.reply_for(intent), MatchSource::Keyword).with_intent(&intent.tag),
            );
        }

        if let Some(m) = self.matcher.match_intent(sanitized).await? {
            debug!(
                tag = %m.intent.tag,
                confidence = %format!("{:.3}", m.confidence),
                "matched intent"
            );
            return Ok(ChatOutcome::new(self.reply_for(m.intent), MatchSource::Semantic)
                .with_intent(&m.intent.tag)
                .with_confidence(m.confidence));
        }

        debug!("no intent matched, using fallback");
        let reply = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            generate_fallback_response(self.matcher.knowledge(), &mut *rng)
        };
        Ok(ChatOutcome::new(reply, MatchSource::Fallback))
    }

    fn reply_for(&self, intent: &Intent) -> ChatReply {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        generate_response(intent, &mut *rng)
    }
}
