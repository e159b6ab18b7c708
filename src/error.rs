//! Error taxonomy.
//!
//! Every variant of [`QueensError`] is a caller-input error: the core
//! validates its arguments and rejects bad ones instead of clamping them.
//! Running out of generations is *not* an error; it is reported through
//! [`SearchOutcome::succeeded`](crate::ga::SearchOutcome::succeeded).

use thiserror::Error;

/// Invalid argument passed to the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueensError {
    /// The board must have at least one row.
    #[error("board_size must be at least 1")]
    EmptyBoard,

    /// A candidate cannot hold more rows than the board has.
    #[error("candidate size {size} exceeds board size {board_size}")]
    SizeExceedsBoard { size: usize, board_size: usize },

    /// Candidates of one population must all have the same size.
    #[error("candidate has size {got}, population size is {expected}")]
    MixedSizes { expected: usize, got: usize },

    /// The population is too small for the selection strategy.
    #[error("population_size must be at least {min}, got {got}")]
    PopulationTooSmall { min: usize, got: usize },

    /// Tournament selection needs at least one contestant.
    #[error("tournament size must be at least 1")]
    EmptyTournament,

    /// At least one generation per stage is required.
    #[error("max_generations_per_step must be at least 1")]
    NoGenerations,

    /// Mutation rate outside `[0, 1]` (or NaN).
    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    /// Crossover parents of different sizes.
    #[error("parents must have equal length, got {left} and {right}")]
    ParentLengthMismatch { left: usize, right: usize },

    /// Crossover points violate `start <= end < len`.
    #[error("invalid crossover segment [{start}, {end}] for length {len}")]
    InvalidSegment { start: usize, end: usize, len: usize },

    /// A parent placement repeats a column.
    #[error("placement repeats column {0}")]
    DuplicateColumn(usize),

    /// A placement refers to a column outside the board.
    #[error("column {column} is outside a board of size {board_size}")]
    ColumnOutOfRange { column: usize, board_size: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QueensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = QueensError::PopulationTooSmall { min: 3, got: 2 };
        assert_eq!(err.to_string(), "population_size must be at least 3, got 2");

        let err = QueensError::MutationRateOutOfRange(1.5);
        assert_eq!(err.to_string(), "mutation_rate must be within [0, 1], got 1.5");
    }
}
