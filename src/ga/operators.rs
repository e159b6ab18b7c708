//! Genetic operators on partial placements.
//!
//! These operate on column vectors (`&[usize]`) and keep every result a
//! partial permutation: no column ever appears twice.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX1): Davis (1985), preserves parent2's relative
//!   order outside a segment copied verbatim from parent1
//! - [`order_crossover_at`]: the same operator with fixed cut points
//!
//! # Mutation
//!
//! - [`swap_mutation`]: with a given probability, exchange two distinct rows
//!
//! # Growth
//!
//! - [`extend_min_conflict`]: append the least-conflicting unused column
//!
//! # Column universe
//!
//! OX1 can only be duplicate-free if both parents draw their columns from
//! the same universe `0..board_size`. Seeding truncates permutations of
//! that universe and [`extend_min_conflict`] only ever picks unused columns
//! from it, so every candidate of a stage satisfies the precondition.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::board::{first_duplicate_column, row_conflicts, Geometry};
use crate::error::{QueensError, Result};
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;

// ============================================================================
// Crossover
// ============================================================================

/// Order crossover (OX1) producing a single child.
///
/// Picks `start` uniformly in `0..len` and `end` uniformly in `start..len`,
/// then delegates to [`order_crossover_at`].
///
/// # Errors
/// [`QueensError::ParentLengthMismatch`] if the parents differ in length,
/// [`QueensError::DuplicateColumn`] if either parent repeats a column.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Result<Vec<usize>> {
    check_lengths(parent1, parent2)?;
    let n = parent1.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let start = rng.random_range(0..n);
    let end = rng.random_range(start..n);
    order_crossover_at(parent1, parent2, start, end)
}

/// Order crossover (OX1) with fixed cut points.
///
/// 1. Copy `parent1[start..=end]` into the child at the same positions
/// 2. Fill the remaining positions left to right with parent2's columns
///    that are not in the copied segment, in parent2's order
///
/// A pure function of its inputs.
///
/// # Complexity
/// O(n) expected time, O(n) space
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Result<Vec<usize>> {
    check_lengths(parent1, parent2)?;
    let n = parent1.len();
    if start > end || end >= n {
        return Err(QueensError::InvalidSegment { start, end, len: n });
    }
    for parent in [parent1, parent2] {
        if let Some(column) = first_duplicate_column(parent) {
            return Err(QueensError::DuplicateColumn(column));
        }
    }

    let segment: HashSet<usize> = parent1[start..=end].iter().copied().collect();

    // parent2 is duplicate-free, so at most `end - start + 1` of its columns
    // are filtered out and the donor covers every free slot
    let mut donor = parent2.iter().copied().filter(|col| !segment.contains(col));
    let mut child = Vec::with_capacity(n);
    for i in 0..n {
        let col = if (start..=end).contains(&i) {
            parent1[i]
        } else {
            match donor.next() {
                Some(col) => col,
                None => unreachable!("donor exhausted with duplicate-free parents"),
            }
        };
        child.push(col);
    }

    Ok(child)
}

fn check_lengths(parent1: &[usize], parent2: &[usize]) -> Result<()> {
    if parent1.len() != parent2.len() {
        return Err(QueensError::ParentLengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: with probability `rate`, exchange the columns of two
/// distinct rows chosen uniformly at random.
///
/// One Bernoulli draw per call. Placements shorter than two rows are left
/// unchanged. Returns whether a swap happened.
///
/// # Errors
/// [`QueensError::MutationRateOutOfRange`] if `rate` is outside `[0, 1]`.
pub fn swap_mutation<R: Rng>(placements: &mut [usize], rate: f64, rng: &mut R) -> Result<bool> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(QueensError::MutationRateOutOfRange(rate));
    }
    if rng.random_range(0.0..1.0) >= rate {
        return Ok(false);
    }

    let n = placements.len();
    if n < 2 {
        return Ok(false);
    }
    let picks = index::sample(rng, n, 2);
    placements.swap(picks.index(0), picks.index(1));
    Ok(true)
}

// ============================================================================
// Growth
// ============================================================================

/// Appends the unused column that creates the fewest conflicts with the
/// existing rows. Ties go to the lowest column index.
///
/// Returns the appended column, or `None` when every column of the board is
/// already used.
///
/// # Errors
/// [`QueensError::ColumnOutOfRange`] if an existing placement lies outside
/// `0..board_size`.
pub fn extend_min_conflict(
    placements: &mut Vec<usize>,
    board_size: usize,
    geometry: Geometry,
) -> Result<Option<usize>> {
    let mut used = vec![false; board_size];
    for &column in placements.iter() {
        if column >= board_size {
            return Err(QueensError::ColumnOutOfRange { column, board_size });
        }
        used[column] = true;
    }

    let mut best: Option<(usize, usize)> = None;
    for column in (0..board_size).filter(|&c| !used[c]) {
        let conflicts = row_conflicts(placements, column, board_size, geometry);
        match best {
            Some((_, fewest)) if conflicts >= fewest => {}
            _ => best = Some((column, conflicts)),
        }
    }

    Ok(best.map(|(column, _)| {
        placements.push(column);
        column
    }))
}

// ============================================================================
// Tests
// ============================================================================
