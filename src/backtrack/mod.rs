//! Exhaustive backtracking oracle.
//!
//! A textbook row-by-row recursive search. It is the ground truth used to
//! validate and benchmark the genetic search, and is never called by it.
//!
//! Solutions are produced in lexicographic order of their placements.

use crate::board::{attacks, Geometry};
use crate::error::{QueensError, Result};

/// Returns `true` if a queen at `column` in the next free row
/// (`placements.len()`) shares no column and no diagonal with the queens
/// already placed.
pub fn is_safe(placements: &[usize], column: usize, board_size: usize, geometry: Geometry) -> bool {
    let row = placements.len();
    placements.iter().enumerate().all(|(r, &c)| {
        c != column && !attacks((r, c), (row, column), board_size, geometry)
    })
}

/// Finds up to `max_solutions` complete placements.
///
/// # Errors
/// [`QueensError::EmptyBoard`] for `board_size == 0`.
///
/// # Examples
///
/// ```
/// use u_nqueens::backtrack::solve_exhaustive;
/// use u_nqueens::board::Geometry;
///
/// let solutions = solve_exhaustive(4, 10, Geometry::Flat).unwrap();
/// assert_eq!(solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
/// ```
pub fn solve_exhaustive(
    board_size: usize,
    max_solutions: usize,
    geometry: Geometry,
) -> Result<Vec<Vec<usize>>> {
    if board_size == 0 {
        return Err(QueensError::EmptyBoard);
    }

    let mut search = Search {
        board_size,
        geometry,
        limit: max_solutions,
        placements: Vec::with_capacity(board_size),
        solutions: Vec::new(),
        count: 0,
        keep: true,
    };
    search.place();

    tracing::debug!(
        board_size,
        %geometry,
        found = search.solutions.len(),
        "exhaustive search finished"
    );
    Ok(search.solutions)
}

/// Counts every complete placement.
///
/// # Errors
/// [`QueensError::EmptyBoard`] for `board_size == 0`.
pub fn count_solutions(board_size: usize, geometry: Geometry) -> Result<usize> {
    if board_size == 0 {
        return Err(QueensError::EmptyBoard);
    }

    let mut search = Search {
        board_size,
        geometry,
        limit: usize::MAX,
        placements: Vec::with_capacity(board_size),
        solutions: Vec::new(),
        count: 0,
        keep: false,
    };
    search.place();
    Ok(search.count)
}

struct Search {
    board_size: usize,
    geometry: Geometry,
    limit: usize,
    placements: Vec<usize>,
    solutions: Vec<Vec<usize>>,
    count: usize,
    keep: bool,
}

impl Search {
    fn done(&self) -> bool {
        self.count >= self.limit
    }

    fn place(&mut self) {
        if self.done() {
            return;
        }
        if self.placements.len() == self.board_size {
            self.count += 1;
            if self.keep {
                self.solutions.push(self.placements.clone());
            }
            return;
        }

        for column in 0..self.board_size {
            if is_safe(&self.placements, column, self.board_size, self.geometry) {
                self.placements.push(column);
                self.place();
                self.placements.pop();
                if self.done() {
                    return;
                }
            }
        }
    }
}
