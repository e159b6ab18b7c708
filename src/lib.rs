//! N-Queens by incremental genetic search, with an exhaustive oracle.
//!
//! Provides two independent strategies for placing `N` non-attacking
//! queens on an `N×N` board:
//!
//! - **Incremental Genetic Algorithm** ([`ga`]): solves for `k` queens,
//!   extends every candidate to `k + 1` with the least-conflicting free
//!   column, and evolves again until the board is full or a stage runs out
//!   of generations.
//! - **Backtracking** ([`backtrack`]): exhaustive row-by-row search used as
//!   ground truth and as a performance baseline.
//!
//! Both support a flat board and a wraparound (toroidal) board, see
//! [`board::Geometry`].
//!
//! # Example
//!
//! ```
//! use u_nqueens::board::{is_solution, Geometry};
//! use u_nqueens::ga::{IncrementalSearch, SearchConfig};
//!
//! let config = SearchConfig::new(6).with_seed(42);
//! let outcome = IncrementalSearch::new(&config).unwrap().run().unwrap();
//! if let Some(solution) = &outcome.solution {
//!     assert!(is_solution(solution.placements(), 6, Geometry::Flat));
//! }
//! ```

pub mod backtrack;
pub mod board;
pub mod error;
pub mod ga;
pub mod random;

pub use error::{QueensError, Result};
