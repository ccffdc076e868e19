//! Persistence for the paired index artifacts.
//!
//! An artifact directory always holds two companion files that are written
//! and loaded together:
//!
//! - `vectors.json` — the serialized [`VectorIndex`]
//! - `chunks.json` — the ordered chunk metadata records
//!
//! The nth metadata record corresponds to the nth vector; a length mismatch
//! at load time is a fatal inconsistency. Both files are written to
//! temporary paths first and renamed into place so a crash mid-write cannot
//! leave one artifact updated and the other stale.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::document::ChunkRecord;
use crate::error::{RagbotError, Result};
use crate::index::VectorIndex;

/// File name of the serialized vector index inside an artifact directory.
pub const VECTORS_FILE: &str = "vectors.json";

/// File name of the chunk metadata list inside an artifact directory.
pub const CHUNKS_FILE: &str = "chunks.json";

/// Current on-disk schema version for both artifacts.
const ARTIFACT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct VectorsArtifact {
    version: u32,
    index: VectorIndex,
}

#[derive(Serialize, Deserialize)]
struct ChunksArtifact {
    version: u32,
    chunks: Vec<ChunkRecord>,
}

/// Persist the index and its parallel chunk metadata under `dir`.
///
/// # Errors
///
/// Returns [`RagbotError::Persist`] if the index and record counts disagree
/// or any filesystem operation fails. On failure no artifact is replaced.
pub fn save(dir: &Path, index: &VectorIndex, records: &[ChunkRecord]) -> Result<()> {
    if index.len() != records.len() {
        return Err(RagbotError::Persist(format!(
            "refusing to persist {} vectors with {} metadata records",
            index.len(),
            records.len()
        )));
    }

    fs::create_dir_all(dir).map_err(|e| {
        RagbotError::Persist(format!("cannot create artifact directory '{}': {e}", dir.display()))
    })?;

    let vectors = VectorsArtifact { version: ARTIFACT_VERSION, index: index.clone() };
    let chunks = ChunksArtifact { version: ARTIFACT_VERSION, chunks: records.to_vec() };

    // Stage both files completely before renaming either into place.
    let vectors_tmp = dir.join(format!("{VECTORS_FILE}.tmp"));
    let chunks_tmp = dir.join(format!("{CHUNKS_FILE}.tmp"));
    write_json(&vectors_tmp, &vectors)?;
    write_json(&chunks_tmp, &chunks)?;

    fs::rename(&vectors_tmp, dir.join(VECTORS_FILE)).map_err(|e| {
        RagbotError::Persist(format!("cannot install '{VECTORS_FILE}': {e}"))
    })?;
    fs::rename(&chunks_tmp, dir.join(CHUNKS_FILE)).map_err(|e| {
        RagbotError::Persist(format!("cannot install '{CHUNKS_FILE}': {e}"))
    })?;

    info!(dir = %dir.display(), vectors = index.len(), "persisted index artifacts");
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| RagbotError::Persist(format!("serialization failed: {e}")))?;
    fs::write(path, bytes).map_err(|e| {
        RagbotError::Persist(format!("cannot write '{}': {e}", path.display()))
    })
}

/// Load the paired artifacts from `dir`.
///
/// # Errors
///
/// Returns [`RagbotError::IndexLoad`] if either artifact is missing or
/// unparseable, carries an unsupported schema version, or the metadata
/// count does not match the vector count.
pub fn load(dir: &Path) -> Result<(VectorIndex, Vec<ChunkRecord>)> {
    let vectors: VectorsArtifact = read_json(&dir.join(VECTORS_FILE))?;
    let chunks: ChunksArtifact = read_json(&dir.join(CHUNKS_FILE))?;

    for version in [vectors.version, chunks.version] {
        if version != ARTIFACT_VERSION {
            return Err(RagbotError::IndexLoad(format!(
                "unsupported artifact schema version {version} (expected {ARTIFACT_VERSION})"
            )));
        }
    }

    if vectors.index.len() != chunks.chunks.len() {
        return Err(RagbotError::IndexLoad(format!(
            "artifact mismatch: {} vectors but {} metadata records",
            vectors.index.len(),
            chunks.chunks.len()
        )));
    }

    info!(dir = %dir.display(), vectors = vectors.index.len(), "loaded index artifacts");
    Ok((vectors.index, chunks.chunks))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|e| {
        RagbotError::IndexLoad(format!("cannot read artifact '{}': {e}", path.display()))
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        RagbotError::IndexLoad(format!("cannot parse artifact '{}': {e}", path.display()))
    })
}
