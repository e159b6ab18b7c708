//! Incremental evolution driver.
//!
//! [`IncrementalSearch`] grows the number of placed queens from 1 to `N`:
//! it evolves the population until some candidate of size `k` is
//! conflict-free, extends *every* candidate by one row, and repeats. A
//! stage that uses up its generation budget ends the run unsuccessfully.
//!
//! ```text
//! Seeded(1) → Evolving(k, 0) → … → Evolving(k, g) ─┬→ Solved(k) ─┬→ Extended(k) → Evolving(k+1, 0)
//!                                                   │             └→ Done            (k == N)
//!                                                   └→ Exhausted                    (g == budget)
//! ```
//!
//! Each `Evolving` step checks the budget before looking for a
//! conflict-free candidate: once a stage has bred its last permitted
//! generation it is exhausted, and that final population is not inspected.

use super::config::SearchConfig;
use super::population::Population;
use super::types::Candidate;
use crate::board::{is_solution, Geometry};
use crate::error::Result;
use crate::random::rng_from;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// State of an incremental search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Fresh random population of `k`-row candidates.
    Seeded(usize),

    /// Evolving candidates of `size` rows; `generation` generations bred so
    /// far in this stage.
    Evolving { size: usize, generation: usize },

    /// A conflict-free candidate of this size exists.
    Solved(usize),

    /// Every candidate was extended from this size to the next.
    Extended(usize),

    /// Generation budget used up at this size. Terminal.
    Exhausted(usize),

    /// Stopped by the cancellation flag at this size. Terminal.
    Cancelled(usize),

    /// A conflict-free candidate fills the board. Terminal.
    Done,
}

impl SearchState {
    /// Whether no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SearchState::Exhausted(_) | SearchState::Cancelled(_) | SearchState::Done
        )
    }
}

/// Summary of one finished stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageStats {
    /// Number of queens the stage was solving for.
    pub size: usize,

    /// Generations bred during the stage.
    pub generations: usize,

    /// Fewest conflicts in the population when the stage ended.
    pub best_conflicts: usize,

    /// Whether the stage found a conflict-free candidate.
    pub solved: bool,
}

/// Result of an incremental search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The first conflict-free candidate of size `N`, if the run succeeded.
    pub solution: Option<Candidate>,

    /// The solution on success, otherwise the candidate with the fewest
    /// conflicts at the size the run stopped at.
    pub best: Candidate,

    /// Conflict count of `best`.
    pub best_conflicts: usize,

    /// Candidate size when the run stopped.
    pub reached_size: usize,

    /// Wall-clock time from the first state transition to termination.
    pub elapsed: Duration,

    /// Whether the run reached [`SearchState::Done`].
    pub succeeded: bool,

    /// Independent re-check of `solution`: `N` rows, distinct columns, no
    /// conflicts. `false` when there is no solution.
    pub valid: bool,

    /// Whether the run was stopped by the cancellation flag.
    pub cancelled: bool,

    /// Generations bred across all stages.
    pub generations: usize,

    /// Per-stage statistics, in stage order.
    pub stages: Vec<StageStats>,
}

/// Incremental genetic search for one board.
///
/// # Usage
///
/// ```
/// use u_nqueens::ga::{IncrementalSearch, SearchConfig};
///
/// let config = SearchConfig::new(1).with_seed(42);
/// let outcome = IncrementalSearch::new(&config).unwrap().run().unwrap();
/// assert!(outcome.succeeded);
/// assert_eq!(outcome.solution.unwrap().placements(), &[0]);
/// ```
pub struct IncrementalSearch<R: Rng = StdRng> {
    config: SearchConfig,
    population: Population,
    state: SearchState,
    rng: R,
    solved: Option<Candidate>,
    stages: Vec<StageStats>,
    generations: usize,
    started: Option<Instant>,
}

impl IncrementalSearch<StdRng> {
    /// Validates `config` and seeds the initial population.
    ///
    /// The generator comes from `config.seed`, or OS entropy when unset.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Self::with_rng(config, rng_from(config.seed))
    }
}

impl<R: Rng> IncrementalSearch<R> {
    /// Like [`new`](IncrementalSearch::new) with an explicit generator;
    /// `config.seed` is ignored.
    pub fn with_rng(config: &SearchConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let population = Population::seed(
            1,
            config.population_size,
            config.board_size,
            config.geometry,
            &mut rng,
        )?;

        tracing::debug!(
            board_size = config.board_size,
            population = config.population_size,
            geometry = %config.geometry,
            "seeded incremental search"
        );

        Ok(Self {
            config: config.clone(),
            population,
            state: SearchState::Seeded(1),
            rng,
            solved: None,
            stages: Vec::new(),
            generations: 0,
            started: None,
        })
    }

    /// Current state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Configuration of this search.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Performs one state transition and returns the new state.
    ///
    /// A breeding step (one generation) is the unit of work; terminal states
    /// are returned unchanged. The first call starts the clock reported as
    /// [`SearchOutcome::elapsed`].
    pub fn step(&mut self) -> Result<SearchState> {
        let board_size = self.config.board_size;
        self.started.get_or_insert_with(Instant::now);

        let state = self.state;
        self.state = match state {
            SearchState::Seeded(size) => SearchState::Evolving {
                size,
                generation: 0,
            },

            SearchState::Evolving { size, generation } => {
                if generation >= self.config.max_generations_per_step {
                    self.close_stage(size, generation, false);
                    tracing::info!(size, generation, "generation budget exhausted");
                    SearchState::Exhausted(size)
                } else if let Some(solved) = self.population.first_solved().cloned() {
                    self.close_stage(size, generation, true);
                    tracing::debug!(size, generation, placements = %solved, "stage solved");
                    self.solved = Some(solved);
                    SearchState::Solved(size)
                } else {
                    self.population = self.population.breed(
                        self.config.selection,
                        self.config.mutation_rate,
                        &mut self.rng,
                    )?;
                    self.generations += 1;
                    tracing::trace!(
                        size,
                        generation = generation + 1,
                        best_conflicts = self.best_conflicts(),
                        "bred generation"
                    );
                    SearchState::Evolving {
                        size,
                        generation: generation + 1,
                    }
                }
            }

            SearchState::Solved(size) if size >= board_size => SearchState::Done,

            SearchState::Solved(size) => {
                self.population.extend_all()?;
                tracing::debug!(from = size, to = size + 1, "extended population");
                SearchState::Extended(size)
            }

            SearchState::Extended(size) => SearchState::Evolving {
                size: size + 1,
                generation: 0,
            },

            terminal => terminal,
        };

        Ok(self.state)
    }

    /// Runs to a terminal state.
    pub fn run(self) -> Result<SearchOutcome> {
        self.run_with_cancel(None)
    }

    /// Runs to a terminal state with an optional cancellation flag.
    ///
    /// The flag is checked between generations only; once set, the search
    /// stops in [`SearchState::Cancelled`] and reports like an exhausted run.
    pub fn run_with_cancel(mut self, cancel: Option<Arc<AtomicBool>>) -> Result<SearchOutcome> {
        while !self.state.is_terminal() {
            if let (Some(flag), SearchState::Evolving { size, generation }) = (&cancel, self.state)
            {
                if flag.load(Ordering::Relaxed) {
                    self.close_stage(size, generation, false);
                    self.state = SearchState::Cancelled(size);
                    tracing::info!(size, generation, "search cancelled");
                    break;
                }
            }
            self.step()?;
        }
        Ok(self.finish())
    }

    fn best_conflicts(&self) -> usize {
        self.population.best().map_or(0, |(_, c)| c)
    }

    fn close_stage(&mut self, size: usize, generations: usize, solved: bool) {
        let best_conflicts = self.best_conflicts();
        self.stages.push(StageStats {
            size,
            generations,
            best_conflicts,
            solved,
        });
    }

    fn finish(self) -> SearchOutcome {
        let elapsed = self.started.map_or(Duration::ZERO, |started| started.elapsed());
        let succeeded = self.state == SearchState::Done;
        let (board_size, geometry) = (self.config.board_size, self.config.geometry);

        let solution = if succeeded { self.solved } else { None };
        let (best, best_conflicts) = match &solution {
            Some(solved) => (solved.clone(), 0),
            None => {
                let (best, conflicts) = self
                    .population
                    .best()
                    .expect("validated population is never empty");
                (best.clone(), conflicts)
            }
        };
        let valid = solution
            .as_ref()
            .is_some_and(|s| is_solution(s.placements(), board_size, geometry));

        if succeeded {
            tracing::info!(
                board_size,
                generations = self.generations,
                ?elapsed,
                valid,
                "found solution"
            );
        }

        SearchOutcome {
            solution,
            best,
            best_conflicts,
            reached_size: self.population.candidate_size(),
            elapsed,
            succeeded,
            valid,
            cancelled: matches!(self.state, SearchState::Cancelled(_)),
            generations: self.generations,
            stages: self.stages,
        }
    }
}

/// Runs one incremental search with the default tournament selection and
/// an entropy-seeded generator.
///
/// # Errors
/// [`QueensError`](crate::QueensError) for invalid arguments. An
/// unsuccessful search is not an error: see [`SearchOutcome::succeeded`].
pub fn run_incremental_search(
    board_size: usize,
    population_size: usize,
    max_generations_per_step: usize,
    mutation_rate: f64,
    geometry: Geometry,
) -> Result<SearchOutcome> {
    let config = SearchConfig::new(board_size)
        .with_population_size(population_size)
        .with_max_generations_per_step(max_generations_per_step)
        .with_mutation_rate(mutation_rate)
        .with_geometry(geometry);
    IncrementalSearch::new(&config)?.run()
}

// ============================================================================
// Tests
// ============================================================================
