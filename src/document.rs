//! Data types for source documents, indexed chunks, and retrieval matches.

use serde::{Deserialize, Serialize};

/// A source document: a named blob of extracted text.
///
/// Documents exist only during an index build. They are chunked and then
/// discarded; only chunk-level records are persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Stable name of the originating file, e.g. `guide.pdf`.
    pub source_id: String,
    /// The full extracted text. Empty when extraction failed (the loader
    /// recovers per-file failures by yielding an empty document).
    pub text: String,
}

/// A chunk of a document's text, persisted alongside its vector.
///
/// The record's position in the metadata list is the sole join key to the
/// vector at the same position in the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// The chunk text (whitespace-trimmed).
    pub text: String,
    /// The `source_id` of the originating [`Document`].
    pub source_id: String,
}

/// A retrieved chunk paired with its distance to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    /// The matched chunk text.
    pub text: String,
    /// Source attribution for the chunk.
    pub source_id: String,
    /// Squared L2 distance between the query and chunk embeddings
    /// (smaller is closer).
    pub distance: f32,
}
