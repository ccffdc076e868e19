//! Flat exact nearest-neighbor index over fixed-dimension vectors.

use serde::{Deserialize, Serialize};

use crate::error::{RagbotError, Result};

/// An exact nearest-neighbor index using squared L2 distance.
///
/// Vectors are stored row-major in one flat buffer. Search scans every row,
/// which is exact and entirely adequate for corpora of thousands of chunks.
/// The index is append-only during a build and immutable afterwards; there
/// is no delete or compaction, a rebuild is always a full replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorIndex {
    dimensions: usize,
    data: Vec<f32>,
}

impl VectorIndex {
    /// Create an empty index for vectors of the given dimensionality.
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions, data: Vec::new() }
    }

    /// The dimensionality every stored vector must have.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of vectors stored.
    pub fn len(&self) -> usize {
        if self.dimensions == 0 { 0 } else { self.data.len() / self.dimensions }
    }

    /// Whether the index holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a vector to the index.
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::Index`] if the vector's length does not match
    /// the index dimensionality.
    pub fn add(&mut self, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dimensions {
            return Err(RagbotError::Index(format!(
                "cannot add vector of dimension {} to index of dimension {}",
                vector.len(),
                self.dimensions
            )));
        }
        self.data.extend_from_slice(vector);
        Ok(())
    }

    /// Find the `k` nearest vectors to `query` by squared L2 distance.
    ///
    /// Returns up to `k` `(position, distance)` pairs ordered nearest-first;
    /// fewer than `k` when the index is smaller, and none when it is empty.
    /// Positions are always within `[0, len())` — no sentinel padding.
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::Index`] if the query's length does not match
    /// the index dimensionality.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dimensions {
            return Err(RagbotError::Index(format!(
                "cannot search with query of dimension {} in index of dimension {}",
                query.len(),
                self.dimensions
            )));
        }
        if self.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, f32)> = self
            .data
            .chunks_exact(self.dimensions)
            .enumerate()
            .map(|(position, row)| {
                let distance: f32 =
                    row.iter().zip(query.iter()).map(|(a, b)| (a - b) * (a - b)).sum();
                (position, distance)
            })
            .collect();

        scored.sort_by(|a, b| {
            a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0))
        });
        scored.truncate(k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_vector_index() -> VectorIndex {
        let mut index = VectorIndex::new(3);
        index.add(&[1.0, 0.0, 0.0]).unwrap();
        index.add(&[0.0, 1.0, 0.0]).unwrap();
        index.add(&[0.0, 0.0, 1.0]).unwrap();
        index
    }

    #[test]
    fn len_tracks_added_vectors() {
        let index = three_vector_index();
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn add_rejects_wrong_dimension() {
        let mut index = VectorIndex::new(3);
        assert!(matches!(index.add(&[1.0, 2.0]).unwrap_err(), RagbotError::Index(_)));
    }

    #[test]
    fn search_returns_nearest_first() {
        let index = three_vector_index();
        let hits = index.search(&[0.1, 0.9, 0.0], 3).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].0, 1);
        assert!(hits[0].1 <= hits[1].1 && hits[1].1 <= hits[2].1);
    }

    #[test]
    fn search_with_k_larger_than_index_returns_all() {
        let index = three_vector_index();
        let hits = index.search(&[1.0, 0.0, 0.0], 10).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0], (0, 0.0));
    }

    #[test]
    fn empty_index_returns_no_hits() {
        let index = VectorIndex::new(3);
        assert!(index.search(&[0.0, 0.0, 0.0], 5).unwrap().is_empty());
    }

    #[test]
    fn search_rejects_wrong_query_dimension() {
        let index = three_vector_index();
        assert!(matches!(index.search(&[0.0], 1).unwrap_err(), RagbotError::Index(_)));
    }
}
