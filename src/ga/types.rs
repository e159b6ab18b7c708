//! The [`Candidate`] data entity.
//!
//! A candidate is a partial placement: one column per solved row. During
//! stage `k` every candidate holds exactly `k` distinct columns drawn from
//! the universe `0..board_size`.

use crate::board::{self, Geometry};
use std::fmt;

/// A partial or complete queen placement under evaluation.
///
/// `placements[r]` is the column of the queen in row `r`. The conflict
/// count is derived, never stored here; the [`Population`](super::Population)
/// caches it per generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    placements: Vec<usize>,
}

impl Candidate {
    /// Wraps a placement vector.
    ///
    /// The caller is responsible for the no-duplicate-columns invariant;
    /// operators in this crate always uphold it.
    pub fn new(placements: Vec<usize>) -> Self {
        Self { placements }
    }

    /// Column indices, one per placed row.
    pub fn placements(&self) -> &[usize] {
        &self.placements
    }

    /// Number of placed rows (the candidate's current size `k`).
    pub fn size(&self) -> usize {
        self.placements.len()
    }

    /// Whether no row has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of attacking row pairs under `geometry`.
    pub fn conflicts(&self, board_size: usize, geometry: Geometry) -> usize {
        board::conflict_count(&self.placements, board_size, geometry)
    }

    /// Whether this candidate is conflict-free at its current size.
    pub fn is_solved(&self, board_size: usize, geometry: Geometry) -> bool {
        self.conflicts(board_size, geometry) == 0
    }

    /// Whether any column is used twice.
    pub fn has_duplicates(&self) -> bool {
        board::has_duplicate_columns(&self.placements)
    }

    /// Consumes the candidate, returning its placements.
    pub fn into_placements(self) -> Vec<usize> {
        self.placements
    }

    pub(crate) fn placements_mut(&mut self) -> &mut Vec<usize> {
        &mut self.placements
    }
}

impl From<Vec<usize>> for Candidate {
    fn from(placements: Vec<usize>) -> Self {
        Self::new(placements)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.placements)
    }
}
