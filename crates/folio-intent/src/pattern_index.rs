//! Pattern index: one embedding per unique lower-cased pattern.

use std::collections::HashMap;

use folio_core::errors::{EmbeddingError, FolioResult};
use folio_core::traits::IEmbeddingProvider;
use folio_core::KnowledgeBase;
use tracing::debug;

use crate::similarity::cosine_similarity;

/// A cached pattern vector and the intent that owns it.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    /// Lower-cased pattern text.
    pub pattern: String,
    pub embedding: Vec<f32>,
    /// Position of the owning intent in the knowledge base.
    pub intent: usize,
}

/// Precomputed pattern embeddings, in first-seen knowledge-base order.
///
/// A pattern shared by several intents is stored once and owned by the first
/// of them. Immutable after `build`.
#[derive(Debug, Clone)]
pub struct PatternIndex {
    entries: Vec<PatternEntry>,
    lookup: HashMap<String, usize>,
    dimensions: usize,
    provider: String,
}

impl PatternIndex {
    /// Embed every unique pattern of `kb` in a single batch.
    ///
    /// A knowledge base without patterns yields an empty index without
    /// calling the provider.
    pub async fn build(kb: &KnowledgeBase, provider: &dyn IEmbeddingProvider) -> FolioResult<Self> {
        let mut patterns: Vec<String> = Vec::new();
        let mut owners: Vec<usize> = Vec::new();
        let mut lookup: HashMap<String, usize> = HashMap::new();

        for (intent_idx, intent) in kb.intents.iter().enumerate() {
            for pattern in &intent.patterns {
                let normalized = pattern.to_lowercase();
                if lookup.contains_key(&normalized) {
                    continue;
                }
                lookup.insert(normalized.clone(), patterns.len());
                patterns.push(normalized);
                owners.push(intent_idx);
            }
        }

        let dimensions = provider.dimensions();
        if patterns.is_empty() {
            return Ok(Self {
                entries: Vec::new(),
                lookup,
                dimensions,
                provider: provider.name().to_string(),
            });
        }

        let vectors = provider.embed_batch(&patterns).await?;
        if vectors.len() != patterns.len() {
            return Err(EmbeddingError::BatchSizeMismatch {
                expected: patterns.len(),
                actual: vectors.len(),
            }
            .into());
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dimensions,
                actual: bad.len(),
            }
            .into());
        }

        let entries: Vec<PatternEntry> = patterns
            .into_iter()
            .zip(vectors)
            .zip(owners)
            .map(|((pattern, embedding), intent)| PatternEntry {
                pattern,
                embedding,
                intent,
            })
            .collect();

        debug!(
            unique_patterns = entries.len(),
            total_patterns = kb.pattern_count(),
            dims = dimensions,
            "pattern index built"
        );

        Ok(Self {
            entries,
            lookup,
            dimensions,
            provider: provider.name().to_string(),
        })
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Name of the provider that produced the vectors.
    pub fn provider_name(&self) -> &str {
        &self.provider
    }

    /// Look up a pattern, case-insensitively.
    pub fn get(&self, pattern: &str) -> Option<&PatternEntry> {
        self.lookup
            .get(&pattern.to_lowercase())
            .and_then(|&i| self.entries.get(i))
    }

    /// The entry with the highest similarity strictly above `threshold`.
    ///
    /// Ties keep the earlier entry. Linear in the number of patterns.
    pub fn best_match(&self, query: &[f32], threshold: f32) -> Option<(&PatternEntry, f32)> {
        let mut best: Option<(&PatternEntry, f32)> = None;
        let mut best_score = threshold;
        for entry in &self.entries {
            let score = cosine_similarity(query, &entry.embedding);
            if score > best_score {
                best_score = score;
                best = Some((entry, score));
            }
        }
        best
    }
}
