//! Deterministic embedding providers for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_core::errors::{EmbeddingError, FolioResult};
use folio_core::traits::IEmbeddingProvider;

/// Returns scripted vectors per text; unscripted text embeds to the zero vector.
pub struct FixedEmbeddingProvider {
    dimensions: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl FixedEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            vectors: HashMap::new(),
        }
    }

    /// Script the vector returned for `text`.
    ///
    /// Vectors shorter than `dimensions` are zero-padded.
    pub fn with(mut self, text: &str, mut vector: Vec<f32>) -> Self {
        vector.resize(self.dimensions, 0.0);
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

#[async_trait]
impl IEmbeddingProvider for FixedEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> FolioResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| {
                self.vectors
                    .get(t)
                    .cloned()
                    .unwrap_or_else(|| vec![0.0; self.dimensions])
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Fails every call with `InferenceFailed`.
pub struct FailingProvider {
    dimensions: usize,
}

impl FailingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

#[async_trait]
impl IEmbeddingProvider for FailingProvider {
    async fn embed_batch(&self, _texts: &[String]) -> FolioResult<Vec<Vec<f32>>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "scripted failure".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Wraps another provider and counts calls.
///
/// Yields to the runtime before delegating so concurrent callers interleave.
pub struct CountingProvider<P> {
    inner: P,
    batch_calls: AtomicUsize,
    texts_embedded: AtomicUsize,
}

impl<P: IEmbeddingProvider> CountingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            batch_calls: AtomicUsize::new(0),
            texts_embedded: AtomicUsize::new(0),
        }
    }

    /// Number of `embed_batch` calls so far.
    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    /// Total number of texts passed to `embed_batch` so far.
    pub fn texts_embedded(&self) -> usize {
        self.texts_embedded.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<P: IEmbeddingProvider> IEmbeddingProvider for CountingProvider<P> {
    async fn embed_batch(&self, texts: &[String]) -> FolioResult<Vec<Vec<f32>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.texts_embedded.fetch_add(texts.len(), Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
