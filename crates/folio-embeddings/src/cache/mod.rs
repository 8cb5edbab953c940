//! In-memory cache of query embeddings using moka.
//!
//! Keys are blake3 hashes of the normalized query. Pattern vectors are not
//! stored here; they live in the pattern index for the life of the process.

use std::time::Duration;

use moka::sync::Cache;

/// Bounded cache for repeated questions.
///
/// A capacity of 0 disables caching: `get` always misses and `insert` is a no-op.
pub struct QueryEmbeddingCache {
    cache: Option<Cache<String, Vec<f32>>>,
}

impl QueryEmbeddingCache {
    /// Create a cache holding at most `max_entries` query embeddings.
    pub fn new(max_entries: u64) -> Self {
        let cache = (max_entries > 0).then(|| {
            Cache::builder()
                .max_capacity(max_entries)
                .time_to_idle(Duration::from_secs(3600)) // 1 hour idle TTL
                .build()
        });
        Self { cache }
    }

    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self { cache: None }
    }

    /// Hash a normalized query into a cache key.
    pub fn key_for(normalized_query: &str) -> String {
        blake3::hash(normalized_query.as_bytes()).to_hex().to_string()
    }

    /// Get the embedding for a normalized query.
    pub fn get(&self, normalized_query: &str) -> Option<Vec<f32>> {
        self.cache
            .as_ref()
            .and_then(|c| c.get(&Self::key_for(normalized_query)))
    }

    /// Store the embedding for a normalized query.
    pub fn insert(&self, normalized_query: &str, embedding: Vec<f32>) {
        if let Some(c) = &self.cache {
            c.insert(Self::key_for(normalized_query), embedding);
        }
    }

    /// Whether caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        if let Some(c) = &self.cache {
            c.invalidate_all();
        }
    }
}
