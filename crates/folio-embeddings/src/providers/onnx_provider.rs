//! ONNX Runtime sentence-embedding provider.
//!
//! Loads a sentence encoder (e.g. all-MiniLM-L6-v2 exported to ONNX) via the
//! `ort` crate and its HuggingFace `tokenizer.json` via `tokenizers`.
//! Output token embeddings are mean-pooled over the attention mask.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use folio_core::errors::{EmbeddingError, FolioResult};
use folio_core::traits::IEmbeddingProvider;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

/// ONNX-based embedding provider.
pub struct OnnxProvider {
    /// `run` needs `&mut Session`; the trait hands out `&self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    dimensions: usize,
    model_name: String,
}

impl OnnxProvider {
    /// Load an ONNX model and its tokenizer.
    ///
    /// # Errors
    /// Returns `EmbeddingError::ModelLoadFailed` if either file cannot be loaded.
    pub fn load(model_path: &str, tokenizer_path: &str, dimensions: usize) -> FolioResult<Self> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let load_failed = |reason: String| EmbeddingError::ModelLoadFailed {
            path: model_path.to_string(),
            reason,
        };

        let session = Session::builder()
            .map_err(|e| load_failed(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_failed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(e.to_string()))?;

        let tokenizer =
            Tokenizer::from_file(tokenizer_path).map_err(|e| EmbeddingError::ModelLoadFailed {
                path: tokenizer_path.to_string(),
                reason: e.to_string(),
            })?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, dims = dimensions, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            dimensions,
            model_name,
        })
    }

    /// Run inference on a single text, returning the pooled embedding.
    fn infer(&self, text: &str) -> FolioResult<Vec<f32>> {
        let encoding =
            self.tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tokenization failed: {e}"),
                })?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let seq_len = input_ids.len();

        let ids_tensor =
            Tensor::from_array((vec![1i64, seq_len as i64], input_ids)).map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("tensor creation error: {e}"),
                }
            })?;
        let mask_tensor =
            Tensor::from_array((vec![1i64, seq_len as i64], mask.clone())).map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("tensor creation error: {e}"),
                }
            })?;

        let mut session = self.session.lock().map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| EmbeddingError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        let mut pooled = if shape.len() == 3 {
            // [batch=1, seq, dims]: mean over unmasked tokens.
            let seq = shape[1] as usize;
            let dims = shape[2] as usize;
            let mut pooled = vec![0.0f32; dims];
            let mut kept = 0.0f32;
            for s in 0..seq {
                if mask.get(s).copied().unwrap_or(0) == 0 {
                    continue;
                }
                kept += 1.0;
                for d in 0..dims {
                    pooled[d] += data[s * dims + d];
                }
            }
            if kept > 0.0 {
                for v in &mut pooled {
                    *v /= kept;
                }
            }
            pooled
        } else if shape.len() == 2 {
            // [batch=1, dims]: already pooled.
            let dims = shape[1] as usize;
            data[..dims].to_vec()
        } else {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("unexpected output shape: {shape:?}"),
            }
            .into());
        };

        let norm: f32 = pooled.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut pooled {
                *v /= norm;
            }
        }

        if pooled.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: pooled.len(),
            }
            .into());
        }
        Ok(pooled)
    }
}

#[async_trait]
impl IEmbeddingProvider for OnnxProvider {
    async fn embed_batch(&self, texts: &[String]) -> FolioResult<Vec<Vec<f32>>> {
        // Sequential inference; batch padding is not worth it for a few hundred patterns.
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
