//! Query-time retrieval over the persisted index.
//!
//! The [`Retriever`] loads the paired artifacts once at construction and is
//! immutable afterwards, so any number of concurrent tasks can share it
//! behind an `Arc` without synchronization. Reloading happens only through
//! an explicit [`reload`](Retriever::reload) call after a rebuild.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::document::{ChunkRecord, RetrievedChunk};
use crate::embedding::EmbeddingProvider;
use crate::error::Result;
use crate::index::VectorIndex;
use crate::store;

/// Separator placed between chunks in a formatted context block.
const CONTEXT_DELIMITER: &str = "\n---\n";

/// Nearest-neighbor retriever over a persisted knowledge base.
pub struct Retriever {
    index: VectorIndex,
    records: Vec<ChunkRecord>,
    embedder: Arc<dyn EmbeddingProvider>,
    artifact_dir: PathBuf,
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever")
            .field("index", &self.index)
            .field("records", &self.records)
            .field("artifact_dir", &self.artifact_dir)
            .finish_non_exhaustive()
    }
}

impl Retriever {
    /// Load the paired artifacts from `artifact_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::IndexLoad`](crate::RagbotError::IndexLoad) if
    /// either artifact is missing or the vector/metadata counts disagree.
    /// Callers should treat this as fatal for grounded serving and fall back
    /// to ungrounded mode until the artifacts are rebuilt.
    pub fn open(artifact_dir: &Path, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let (index, records) = store::load(artifact_dir)?;
        info!(
            artifact_dir = %artifact_dir.display(),
            chunks = records.len(),
            "retriever ready"
        );
        Ok(Self { index, records, embedder, artifact_dir: artifact_dir.to_path_buf() })
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the knowledge base holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Re-read the artifacts from disk, replacing the in-memory index.
    ///
    /// Intended to be called after an explicit rebuild signal; the previous
    /// state is kept if the reload fails.
    pub fn reload(&mut self) -> Result<()> {
        let (index, records) = store::load(&self.artifact_dir)?;
        info!(chunks = records.len(), "retriever reloaded");
        self.index = index;
        self.records = records;
        Ok(())
    }

    /// Retrieve up to `k` chunks nearest to `query`, nearest first.
    ///
    /// An empty index yields zero matches without calling the embedding
    /// service, and `k` larger than the index simply returns fewer matches.
    /// Any search position outside the metadata range is discarded; the
    /// index never produces one, but a match is never worth a panic here.
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::EmbeddingService`](crate::RagbotError::EmbeddingService)
    /// if the query embedding fails. Callers serving end users should degrade
    /// to an ungrounded completion rather than surface this.
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<RetrievedChunk>> {
        if self.index.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query).await?;
        let hits = self.index.search(&query_embedding, k)?;

        let matches: Vec<RetrievedChunk> = hits
            .into_iter()
            .filter_map(|(position, distance)| {
                self.records.get(position).map(|record| RetrievedChunk {
                    text: record.text.clone(),
                    source_id: record.source_id.clone(),
                    distance,
                })
            })
            .collect();

        debug!(query_chars = query.chars().count(), matches = matches.len(), "retrieval done");
        Ok(matches)
    }

    /// Join matches into one grounding context block, nearest first.
    ///
    /// Each chunk is prefixed with its source attribution and chunks are
    /// separated by a `---` delimiter line. Returns an empty string for
    /// zero matches.
    pub fn format_context(matches: &[RetrievedChunk]) -> String {
        matches
            .iter()
            .map(|m| format!("[source: {}] {}", m.source_id, m.text))
            .collect::<Vec<_>>()
            .join(CONTEXT_DELIMITER)
    }
}
