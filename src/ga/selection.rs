//! Parent selection strategies.
//!
//! Selection works on the cached conflict counts of a population: lower is
//! better, zero is a solved candidate.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use crate::error::{QueensError, Result};
use rand::seq::index;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_nqueens::ga::Selection;
///
/// // Three distinct contestants, fewest conflicts wins
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Tournament(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: draw `k` distinct candidates uniformly without
    /// replacement and return the one with the fewest conflicts. Ties go to
    /// the first drawn.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Linear rank selection.
    ///
    /// Candidates are ranked by conflict count (stable, best first) and
    /// drawn with weight `n - rank`.
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Smallest population this strategy can select from.
    pub fn min_population(&self) -> usize {
        match self {
            Selection::Tournament(k) => *k,
            Selection::Rank => 1,
        }
    }

    /// Checks the strategy's own parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            Selection::Tournament(0) => Err(QueensError::EmptyTournament),
            _ => Ok(()),
        }
    }

    /// Selects a parent index given each candidate's conflict count.
    ///
    /// # Errors
    /// [`QueensError::PopulationTooSmall`] if `conflicts` has fewer entries
    /// than [`min_population`](Self::min_population), and
    /// [`QueensError::EmptyTournament`] for `Tournament(0)`.
    pub fn select<R: Rng>(&self, conflicts: &[usize], rng: &mut R) -> Result<usize> {
        self.validate()?;
        let min = self.min_population();
        if conflicts.len() < min {
            return Err(QueensError::PopulationTooSmall {
                min,
                got: conflicts.len(),
            });
        }

        Ok(match self {
            Selection::Tournament(k) => tournament(conflicts, *k, rng),
            Selection::Rank => rank(conflicts, rng),
        })
    }
}

/// Tournament without replacement: `k` distinct indices, first minimum wins.
fn tournament<R: Rng>(conflicts: &[usize], k: usize, rng: &mut R) -> usize {
    let contestants = index::sample(rng, conflicts.len(), k);
    let mut best_idx = contestants.index(0);
    for idx in contestants.iter().skip(1) {
        if conflicts[idx] < conflicts[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Linear rank selection: rank 0 (fewest conflicts) gets weight `n`.
fn rank<R: Rng>(conflicts: &[usize], rng: &mut R) -> usize {
    let n = conflicts.len();
    if n == 1 {
        return 0;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| conflicts[i]);

    let total = n * (n + 1) / 2;
    let mut threshold = rng.random_range(0..total);
    for (rank, &idx) in order.iter().enumerate() {
        let weight = n - rank;
        if threshold < weight {
            return idx;
        }
        threshold -= weight;
    }

    order[n - 1]
}
