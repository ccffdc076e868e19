//! Fixed-size document chunking with overlap.
//!
//! Windows are measured in characters, not bytes, so a chunk boundary can
//! never split a multi-byte UTF-8 sequence.

use crate::config::RagConfig;
use crate::error::{RagbotError, Result};

/// Splits text into fixed-size overlapping windows by character count.
///
/// Successive windows start `chunk_size - overlap` characters apart. A
/// window that would start inside the previous window's overlap tail is not
/// emitted, since it would contain only already-covered text. For a text of
/// `n > 0` characters this yields exactly
/// `ceil(max(n - overlap, 0) / (chunk_size - overlap))` chunks, and an empty
/// text yields none.
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    chunk_size: usize,
    overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new `FixedSizeChunker`.
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::ChunkConfig`] if `chunk_size` is zero or
    /// `overlap >= chunk_size`, either of which would make the window step
    /// non-positive and the chunking loop endless.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RagbotError::ChunkConfig("chunk_size must be greater than zero".into()));
        }
        if overlap >= chunk_size {
            return Err(RagbotError::ChunkConfig(format!(
                "overlap ({overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }
        Ok(Self { chunk_size, overlap })
    }

    /// Create a chunker from a [`RagConfig`]'s chunking parameters.
    pub fn from_config(config: &RagConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Split `text` into whitespace-trimmed overlapping windows.
    ///
    /// Returns an empty `Vec` for empty text. A chunk may be empty after
    /// trimming if its window covered only whitespace; callers that feed
    /// chunks to an embedding service should drop those.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        let step = self.chunk_size - self.overlap;

        let mut chunks = Vec::new();
        let mut start = 0;
        while start + self.overlap < n {
            let end = (start + self.chunk_size).min(n);
            let window: String = chars[start..end].iter().collect();
            chunks.push(window.trim().to_string());
            start += step;
        }
        chunks
    }
}
