//! Offline index build pipeline.
//!
//! The [`IndexPipeline`] runs the full batch workflow: load documents,
//! chunk, embed, index, persist. A build is all-or-nothing — any embedding
//! failure aborts before anything is written, and a successful build fully
//! replaces the previous artifacts.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::chunking::FixedSizeChunker;
use crate::config::RagConfig;
use crate::document::ChunkRecord;
use crate::embedding::EmbeddingProvider;
use crate::error::{RagbotError, Result};
use crate::index::VectorIndex;
use crate::{loader, store};

/// Summary of a completed index build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of source documents loaded (including empty ones).
    pub documents: usize,
    /// Number of chunks embedded and persisted.
    pub chunks: usize,
}

/// The offline index builder. Construct one via [`IndexPipeline::builder()`].
pub struct IndexPipeline {
    config: RagConfig,
    chunker: FixedSizeChunker,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl IndexPipeline {
    /// Create a new [`IndexPipelineBuilder`].
    pub fn builder() -> IndexPipelineBuilder {
        IndexPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Build the index from every recognized document under `docs_dir` and
    /// persist the paired artifacts under `artifact_dir`.
    ///
    /// Documents that produce zero chunks (empty files, failed extractions)
    /// contribute nothing and are not an error. Chunks that trim to an empty
    /// string are dropped before embedding. Chunk texts are embedded in
    /// order, at most `embed_batch_size` per provider call.
    ///
    /// # Errors
    ///
    /// - [`RagbotError::DocumentRead`] if `docs_dir` cannot be read.
    /// - [`RagbotError::EmbeddingService`] if any embedding call fails; the
    ///   build aborts with no partial persistence.
    /// - [`RagbotError::Persist`] if the artifacts cannot be written.
    pub async fn build(&self, docs_dir: &Path, artifact_dir: &Path) -> Result<BuildReport> {
        let documents = loader::load_documents(docs_dir)?;

        let mut records = Vec::new();
        let mut dropped = 0usize;
        for document in &documents {
            let chunks = self.chunker.chunk(&document.text);
            if chunks.is_empty() && !document.text.is_empty() {
                warn!(
                    source_id = %document.source_id,
                    chars = document.text.chars().count(),
                    "document shorter than the chunk overlap produced no chunks"
                );
            }
            for text in chunks {
                if text.is_empty() {
                    dropped += 1;
                    continue;
                }
                records.push(ChunkRecord { text, source_id: document.source_id.clone() });
            }
        }
        if dropped > 0 {
            debug!(dropped, "dropped whitespace-only chunks");
        }
        info!(documents = documents.len(), chunks = records.len(), "chunked corpus");

        let mut index = VectorIndex::new(self.embedder.dimensions());
        if !records.is_empty() {
            let texts: Vec<&str> = records.iter().map(|record| record.text.as_str()).collect();
            let mut embeddings = Vec::with_capacity(texts.len());
            for batch in texts.chunks(self.config.embed_batch_size) {
                let batch_embeddings = self.embedder.embed_batch(batch).await.map_err(|e| {
                    error!(error = %e, "embedding failed, aborting build");
                    e
                })?;
                if batch_embeddings.len() != batch.len() {
                    return Err(RagbotError::EmbeddingService {
                        provider: self.embedder.name().into(),
                        message: format!(
                            "provider returned {} vectors for {} inputs",
                            batch_embeddings.len(),
                            batch.len()
                        ),
                    });
                }
                embeddings.extend(batch_embeddings);
            }
            for embedding in &embeddings {
                index.add(embedding)?;
            }
        }

        store::save(artifact_dir, &index, &records)?;

        let report = BuildReport { documents: documents.len(), chunks: records.len() };
        info!(
            documents = report.documents,
            chunks = report.chunks,
            artifact_dir = %artifact_dir.display(),
            "index build complete"
        );
        Ok(report)
    }
}

/// Builder for constructing an [`IndexPipeline`].
#[derive(Default)]
pub struct IndexPipelineBuilder {
    config: Option<RagConfig>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
}

impl IndexPipelineBuilder {
    /// Set the pipeline configuration. Defaults to [`RagConfig::default()`].
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider. Required.
    pub fn embedding_provider(mut self, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Build the [`IndexPipeline`].
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::ChunkConfig`] if the embedding provider is
    /// missing or the chunking parameters are invalid. Validation happens
    /// here, before any document is read or embedding call made.
    pub fn build(self) -> Result<IndexPipeline> {
        let config = self.config.unwrap_or_default();
        let embedder = self.embedder.ok_or_else(|| {
            RagbotError::ChunkConfig("embedding_provider is required".to_string())
        })?;
        let chunker = FixedSizeChunker::from_config(&config)?;
        Ok(IndexPipeline { config, chunker, embedder })
    }
}
