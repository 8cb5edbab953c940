use async_trait::async_trait;

use crate::errors::{EmbeddingError, FolioResult};

/// Embedding generation provider.
///
/// The only asynchronous seam of the engine: model loading and inference may
/// suspend, everything downstream of the returned vectors is synchronous.
#[async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per input in the same order.
    async fn embed_batch(&self, texts: &[String]) -> FolioResult<Vec<Vec<f32>>>;

    /// Embed a single text.
    async fn embed(&self, text: &str) -> FolioResult<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()]).await?;
        if vectors.len() != 1 {
            return Err(EmbeddingError::BatchSizeMismatch {
                expected: 1,
                actual: vectors.len(),
            }
            .into());
        }
        Ok(vectors.remove(0))
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}

/// Lets a caller keep a handle on a provider it has handed to the engine.
#[async_trait]
impl<T: IEmbeddingProvider + ?Sized> IEmbeddingProvider for std::sync::Arc<T> {
    async fn embed_batch(&self, texts: &[String]) -> FolioResult<Vec<Vec<f32>>> {
        (**self).embed_batch(texts).await
    }

    async fn embed(&self, text: &str) -> FolioResult<Vec<f32>> {
        (**self).embed(text).await
    }

    fn dimensions(&self) -> usize {
        (**self).dimensions()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
