//! Configuration for index building and retrieval.

use serde::{Deserialize, Serialize};

use crate::error::{RagbotError, Result};

/// Configuration parameters shared by the index pipeline and the retriever.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagConfig {
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Number of overlapping characters between consecutive chunks.
    /// Must be smaller than `chunk_size`.
    pub chunk_overlap: usize,
    /// Number of nearest chunks to retrieve per query.
    pub top_k: usize,
    /// Maximum number of texts sent to the embedding service per request.
    pub embed_batch_size: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self { chunk_size: 700, chunk_overlap: 100, top_k: 3, embed_batch_size: 100 }
    }
}

impl RagConfig {
    /// Create a new builder for constructing a [`RagConfig`].
    pub fn builder() -> RagConfigBuilder {
        RagConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RagConfig`].
#[derive(Debug, Clone, Default)]
pub struct RagConfigBuilder {
    config: RagConfig,
}

impl RagConfigBuilder {
    /// Set the maximum chunk size in characters.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the overlap between consecutive chunks in characters.
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Set the number of nearest chunks to retrieve per query.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the embedding request batch size.
    pub fn embed_batch_size(mut self, size: usize) -> Self {
        self.config.embed_batch_size = size;
        self
    }

    /// Build the [`RagConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::ChunkConfig`] if:
    /// - `chunk_size == 0`
    /// - `chunk_overlap >= chunk_size` (the window step would be non-positive)
    /// - `embed_batch_size == 0`
    pub fn build(self) -> Result<RagConfig> {
        if self.config.chunk_size == 0 {
            return Err(RagbotError::ChunkConfig("chunk_size must be greater than zero".into()));
        }
        if self.config.chunk_overlap >= self.config.chunk_size {
            return Err(RagbotError::ChunkConfig(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.config.chunk_overlap, self.config.chunk_size
            )));
        }
        if self.config.embed_batch_size == 0 {
            return Err(RagbotError::ChunkConfig(
                "embed_batch_size must be greater than zero".into(),
            ));
        }
        Ok(self.config)
    }
}
