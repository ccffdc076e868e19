//! Embedding provider trait for turning text into fixed-dimension vectors.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that generates fixed-dimension vector embeddings from text.
///
/// All vectors produced by one provider instance share the dimensionality
/// reported by [`dimensions`](EmbeddingProvider::dimensions). An index must
/// only ever contain vectors from a single provider and model; mixing models
/// silently corrupts distance semantics and is avoided by convention.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text. Used at query time.
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::EmbeddingService`](crate::RagbotError::EmbeddingService)
    /// when the backing service fails or times out.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of texts, one vector per input, order-preserving.
    ///
    /// The output length always equals the input length; batching internals
    /// must never reorder or drop inputs. The default implementation embeds
    /// sequentially; backends with native batch endpoints should override it.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }

    /// The dimensionality of every vector this provider produces.
    fn dimensions(&self) -> usize;

    /// A short provider name for logs and error messages.
    fn name(&self) -> &str {
        "custom"
    }
}
