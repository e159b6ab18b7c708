//! Incremental genetic algorithm for N-Queens.
//!
//! Instead of evolving full-size permutations directly, the search solves
//! for `k` queens, extends every candidate to `k + 1` with the
//! least-conflicting free column, and evolves again, until `N` queens are
//! placed or a stage runs out of generations.
//!
//! # Key Types
//!
//! - [`Candidate`]: a partial placement (one column per solved row)
//! - [`Population`]: homogeneous candidates with cached conflict counts
//! - [`SearchConfig`]: algorithm parameters (population, budget, mutation)
//! - [`IncrementalSearch`]: the stage state machine
//! - [`SearchOutcome`]: solution, timing, validity and statistics
//!
//! # Submodules
//!
//! - [`operators`]: OX1 crossover, swap mutation and min-conflict extension
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::{SearchConfig, MIN_POPULATION};
pub use population::{crossover, extend, mutate, Population};
pub use runner::{
    run_incremental_search, IncrementalSearch, SearchOutcome, SearchState, StageStats,
};
pub use selection::Selection;
pub use types::Candidate;
