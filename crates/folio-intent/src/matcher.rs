//! Semantic intent matching over the pattern index.
//!
//! # Scaling
//! Every semantic lookup is a linear scan over all cached pattern vectors.
//! That is fine for a hand-written knowledge base of a few hundred patterns;
//! a large knowledge base would need an approximate nearest-neighbour index
//! in place of `PatternIndex::best_match`.

use std::sync::Arc;

use folio_core::config::MatcherConfig;
use folio_core::errors::{EmbeddingError, FolioError, FolioResult};
use folio_core::traits::IEmbeddingProvider;
use folio_core::{Intent, KnowledgeBase};
use folio_embeddings::QueryEmbeddingCache;
use tokio::sync::OnceCell;
use tracing::{debug, info, info_span, Instrument};

use crate::keyword;
use crate::pattern_index::PatternIndex;

/// A semantic match and its cosine similarity.
#[derive(Debug, Clone, Copy)]
pub struct IntentMatch<'a> {
    pub intent: &'a Intent,
    pub confidence: f32,
}

/// Owns the knowledge base, the embedding provider and the pattern index.
pub struct IntentMatcher {
    knowledge: Arc<KnowledgeBase>,
    provider: Box<dyn IEmbeddingProvider>,
    index: OnceCell<PatternIndex>,
    query_cache: QueryEmbeddingCache,
    threshold: f32,
    keyword_max_tokens: usize,
}

impl IntentMatcher {
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        provider: Box<dyn IEmbeddingProvider>,
        config: &MatcherConfig,
    ) -> Self {
        Self {
            knowledge,
            provider,
            index: OnceCell::new(),
            query_cache: QueryEmbeddingCache::disabled(),
            threshold: config.threshold,
            keyword_max_tokens: config.keyword_max_tokens,
        }
    }

    /// Cache query embeddings for repeated questions.
    pub fn with_query_cache(mut self, cache: QueryEmbeddingCache) -> Self {
        self.query_cache = cache;
        self
    }

    /// Build the pattern index once.
    ///
    /// Concurrent callers share a single build. A failed build leaves the
    /// matcher uninitialized, so the next call retries.
    pub async fn initialize(&self) -> FolioResult<&PatternIndex> {
        self.index
            .get_or_try_init(|| {
                let span = info_span!("folio.initialize", provider = %self.provider.name());
                async {
                    info!(
                        intents = self.knowledge.intents.len(),
                        patterns = self.knowledge.pattern_count(),
                        "building pattern index"
                    );
                    let index = PatternIndex::build(&self.knowledge, self.provider.as_ref()).await?;
                    info!(
                        unique_patterns = index.len(),
                        dims = index.dimensions(),
                        "chatbot initialized"
                    );
                    Ok::<_, FolioError>(index)
                }
                .instrument(span)
            })
            .await
    }

    pub fn is_initialized(&self) -> bool {
        self.index.initialized()
    }

    /// The pattern index, if built.
    pub fn index(&self) -> Option<&PatternIndex> {
        self.index.get()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Keyword match for inputs of at most `keyword_max_tokens` tokens.
    pub fn keyword_match(&self, input: &str) -> Option<&Intent> {
        keyword::keyword_match(input, &self.knowledge.intents, self.keyword_max_tokens)
    }

    /// Best semantic match strictly above the configured threshold.
    pub async fn match_intent(&self, input: &str) -> FolioResult<Option<IntentMatch<'_>>> {
        self.match_intent_with_threshold(input, self.threshold).await
    }

    /// Best semantic match strictly above `threshold`.
    ///
    /// Builds the index first if needed.
    pub async fn match_intent_with_threshold(
        &self,
        input: &str,
        threshold: f32,
    ) -> FolioResult<Option<IntentMatch<'_>>> {
        let index = self.initialize().await?;
        if index.is_empty() {
            return Ok(None);
        }

        let normalized = input.trim().to_lowercase();
        let query = self.embed_query(&normalized).await?;
        if query.len() != index.dimensions() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: index.dimensions(),
                actual: query.len(),
            }
            .into());
        }

        Ok(index.best_match(&query, threshold).and_then(|(entry, score)| {
            self.knowledge
                .intents
                .get(entry.intent)
                .map(|intent| IntentMatch {
                    intent,
                    confidence: score,
                })
        }))
    }

    async fn embed_query(&self, normalized: &str) -> FolioResult<Vec<f32>> {
        if let Some(hit) = self.query_cache.get(normalized) {
            debug!("query embedding cache hit");
            return Ok(hit);
        }
        let embedding = self.provider.embed(normalized).await?;
        self.query_cache.insert(normalized, embedding.clone());
        Ok(embedding)
    }
}
