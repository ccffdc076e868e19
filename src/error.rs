//! Error types for the `ragbot` crate.

use thiserror::Error;

/// Errors that can occur while building or querying a knowledge base.
#[derive(Debug, Error)]
pub enum RagbotError {
    /// A source document could not be read or extracted.
    ///
    /// Per-file read failures are recovered locally by the loader (the
    /// document contributes an empty text); this variant is fatal only for
    /// an unreadable source directory.
    #[error("Document read error ({source_id}): {message}")]
    DocumentRead {
        /// The file or directory that failed.
        source_id: String,
        /// A description of the failure.
        message: String,
    },

    /// A chunking configuration error, such as an overlap that is not
    /// smaller than the chunk size (which would make the window step
    /// non-positive).
    #[error("Chunk configuration error: {0}")]
    ChunkConfig(String),

    /// The external embedding service errored, timed out, or returned a
    /// malformed response.
    #[error("Embedding service error ({provider}): {message}")]
    EmbeddingService {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// A structural error in the vector index, such as adding or searching
    /// with a vector of the wrong dimensionality.
    #[error("Vector index error: {0}")]
    Index(String),

    /// The persisted index artifacts are missing, unparseable, or violate
    /// the vector/metadata length invariant.
    #[error("Index load error: {0}")]
    IndexLoad(String),

    /// The index artifacts could not be written to durable storage.
    #[error("Index persist error: {0}")]
    Persist(String),

    /// The external completion service failed to produce a reply.
    #[error("Completion service error ({provider}): {message}")]
    Completion {
        /// The completion provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for knowledge-base operations.
pub type Result<T> = std::result::Result<T, RagbotError>;
