//! Pairwise conflict detection.
//!
//! Column clashes are not diagonal attacks: a valid placement never
//! repeats a column, so they are checked separately by
//! [`has_duplicate_columns`] and [`is_solution`].

use super::Geometry;
use std::collections::HashSet;

/// Returns `true` if queens at `a = (row, col)` and `b = (row, col)` attack
/// each other diagonally.
///
/// - [`Geometry::Flat`]: `|Δrow| == |Δcol|`
/// - [`Geometry::Wraparound`]: `|Δrow| == |Δcol|` or `|Δrow| == n - |Δcol|`
///
/// Symmetric in `a` and `b`.
#[inline]
pub fn attacks(a: (usize, usize), b: (usize, usize), board_size: usize, geometry: Geometry) -> bool {
    let dr = a.0.abs_diff(b.0);
    let dc = a.1.abs_diff(b.1);
    match geometry {
        Geometry::Flat => dr == dc,
        Geometry::Wraparound => dr == dc || dr + dc == board_size,
    }
}

/// Number of unordered row pairs that attack each other.
///
/// O(k²) in the number of placed rows.
pub fn conflict_count(placements: &[usize], board_size: usize, geometry: Geometry) -> usize {
    let mut conflicts = 0;
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            if attacks((i, placements[i]), (j, placements[j]), board_size, geometry) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Conflicts a queen at `column` in the next free row (`placements.len()`)
/// would create against every existing row.
pub fn row_conflicts(
    placements: &[usize],
    column: usize,
    board_size: usize,
    geometry: Geometry,
) -> usize {
    let row = placements.len();
    placements
        .iter()
        .enumerate()
        .filter(|&(r, &c)| attacks((r, c), (row, column), board_size, geometry))
        .count()
}

/// The first column that appears a second time, if any.
pub fn first_duplicate_column(placements: &[usize]) -> Option<usize> {
    let mut seen = HashSet::with_capacity(placements.len());
    placements.iter().copied().find(|&c| !seen.insert(c))
}

/// Returns `true` if any column appears more than once.
pub fn has_duplicate_columns(placements: &[usize]) -> bool {
    first_duplicate_column(placements).is_some()
}

/// Full check of a complete placement: `board_size` rows, every column in
/// range and distinct, and no diagonal conflicts.
pub fn is_solution(placements: &[usize], board_size: usize, geometry: Geometry) -> bool {
    placements.len() == board_size
        && placements.iter().all(|&c| c < board_size)
        && !has_duplicate_columns(placements)
        && conflict_count(placements, board_size, geometry) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_flat_diagonal() {
        assert!(attacks((0, 0), (3, 3), 8, Geometry::Flat));
        assert!(attacks((0, 3), (3, 0), 8, Geometry::Flat));
        assert!(!attacks((0, 0), (1, 2), 8, Geometry::Flat));
    }

    #[test]
    fn test_wraparound_diagonal() {
        // (0,0) and (1,3) on a 4x4 torus: 1 == 4 - 3
        assert!(!attacks((0, 0), (1, 3), 4, Geometry::Flat));
        assert!(attacks((0, 0), (1, 3), 4, Geometry::Wraparound));
        assert!(!attacks((0, 0), (1, 2), 4, Geometry::Wraparound));
    }

    #[test]
    fn test_conflict_count_known_solutions() {
        assert_eq!(conflict_count(&[1, 3, 0, 2], 4, Geometry::Flat), 0);
        assert_eq!(conflict_count(&[2, 0, 3, 1], 4, Geometry::Flat), 0);
        // main diagonal: every pair attacks
        assert_eq!(conflict_count(&[0, 1, 2, 3], 4, Geometry::Flat), 6);
    }

    #[test]
    fn test_conflict_count_wraparound() {
        // valid on a flat 4x4 board, but no 4x4 torus solution exists
        assert!(conflict_count(&[1, 3, 0, 2], 4, Geometry::Wraparound) > 0);
        // 5x5 torus: knight-step pattern is a solution
        assert_eq!(conflict_count(&[0, 2, 4, 1, 3], 5, Geometry::Wraparound), 0);
    }

    #[test]
    fn test_row_conflicts() {
        // next row is 2
        assert_eq!(row_conflicts(&[1, 3], 0, 4, Geometry::Flat), 0);
        assert_eq!(row_conflicts(&[1, 3], 2, 4, Geometry::Flat), 1);
        assert_eq!(row_conflicts(&[], 0, 4, Geometry::Flat), 0);
    }

    #[test]
    fn test_is_solution() {
        assert!(is_solution(&[1, 3, 0, 2], 4, Geometry::Flat));
        assert!(!is_solution(&[1, 3, 0], 4, Geometry::Flat));
        assert!(!is_solution(&[1, 1, 3, 0], 4, Geometry::Flat));
        assert!(!is_solution(&[1, 3, 0, 4], 4, Geometry::Flat));
        assert!(is_solution(&[0], 1, Geometry::Flat));
        assert!(is_solution(&[0], 1, Geometry::Wraparound));
    }

    #[test]
    fn test_duplicate_columns() {
        assert!(!has_duplicate_columns(&[]));
        assert!(!has_duplicate_columns(&[2, 0, 1]));
        assert!(has_duplicate_columns(&[2, 0, 2]));
    }

    #[test]
    fn test_first_duplicate_column() {
        assert_eq!(first_duplicate_column(&[3, 1, 4]), None);
        assert_eq!(first_duplicate_column(&[3, 1, 1, 3]), Some(1));
        assert_eq!(first_duplicate_column(&[usize::MAX, usize::MAX]), Some(usize::MAX));
    }

    fn permutation(n: usize) -> impl Strategy<Value = Vec<usize>> {
        Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn prop_attacks_symmetric(
            n in 1usize..16,
            r1 in 0usize..16, c1 in 0usize..16,
            r2 in 0usize..16, c2 in 0usize..16,
        ) {
            let a = (r1 % n, c1 % n);
            let b = (r2 % n, c2 % n);
            for geometry in [Geometry::Flat, Geometry::Wraparound] {
                prop_assert_eq!(attacks(a, b, n, geometry), attacks(b, a, n, geometry));
            }
        }

        #[test]
        fn prop_wraparound_dominates_flat(perm in (3usize..12).prop_flat_map(permutation)) {
            let n = perm.len();
            prop_assert!(
                conflict_count(&perm, n, Geometry::Wraparound)
                    >= conflict_count(&perm, n, Geometry::Flat)
            );
        }

        #[test]
        fn prop_row_conflicts_sum_to_total(perm in (1usize..12).prop_flat_map(permutation)) {
            let n = perm.len();
            for geometry in [Geometry::Flat, Geometry::Wraparound] {
                let incremental: usize = (0..n)
                    .map(|r| row_conflicts(&perm[..r], perm[r], n, geometry))
                    .sum();
                prop_assert_eq!(incremental, conflict_count(&perm, n, geometry));
            }
        }
    }
}
