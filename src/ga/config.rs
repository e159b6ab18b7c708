//! Search configuration.
//!
//! [`SearchConfig`] holds every parameter of an incremental search. Values
//! are stored exactly as given; [`SearchConfig::validate`] rejects invalid
//! ones instead of clamping them.

use super::selection::Selection;
use crate::board::Geometry;
use crate::error::{QueensError, Result};

/// Smallest population the core accepts.
pub const MIN_POPULATION: usize = 3;

/// Configuration for the incremental genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_nqueens::board::Geometry;
/// use u_nqueens::ga::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations_per_step, 500);
/// assert_eq!(config.geometry, Geometry::Flat);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nqueens::board::Geometry;
/// use u_nqueens::ga::SearchConfig;
///
/// let config = SearchConfig::new(10)
///     .with_population_size(200)
///     .with_mutation_rate(0.2)
///     .with_geometry(Geometry::Wraparound)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Board dimension `N`; the search stops once `N` queens are placed.
    pub board_size: usize,

    /// Number of candidates per generation. At least 3.
    pub population_size: usize,

    /// Generation budget for each stage before the run is declared
    /// exhausted.
    pub max_generations_per_step: usize,

    /// Probability that a child gets a swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Diagonal geometry shared by every candidate of the run.
    pub geometry: Geometry,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 100,
            max_generations_per_step: 500,
            mutation_rate: 0.15,
            geometry: Geometry::Flat,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Default parameters for a board of size `board_size`.
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-stage generation budget.
    pub fn with_max_generations_per_step(mut self, n: usize) -> Self {
        self.max_generations_per_step = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the board geometry.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for `Selection::Tournament(k)`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: population 50, 200 generations per stage.
    pub fn fast(board_size: usize) -> Self {
        Self {
            board_size,
            population_size: 50,
            max_generations_per_step: 200,
            ..Self::default()
        }
    }

    /// Preset for larger boards: population 200, 2000 generations per stage.
    pub fn thorough(board_size: usize) -> Self {
        Self {
            board_size,
            population_size: 200,
            max_generations_per_step: 2000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// The first [`QueensError`] found, checked in field order.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(QueensError::EmptyBoard);
        }
        self.selection.validate()?;
        let min = MIN_POPULATION.max(self.selection.min_population());
        if self.population_size < min {
            return Err(QueensError::PopulationTooSmall {
                min,
                got: self.population_size,
            });
        }
        if self.max_generations_per_step == 0 {
            return Err(QueensError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(QueensError::MutationRateOutOfRange(self.mutation_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations_per_step, 500);
        assert!((config.mutation_rate - 0.15).abs() < 1e-10);
        assert_eq!(config.geometry, Geometry::Flat);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::new(12)
            .with_population_size(60)
            .with_max_generations_per_step(1000)
            .with_mutation_rate(0.3)
            .with_geometry(Geometry::Wraparound)
            .with_selection(Selection::Rank)
            .with_seed(7);

        assert_eq!(config.board_size, 12);
        assert_eq!(config.population_size, 60);
        assert_eq!(config.max_generations_per_step, 1000);
        assert!((config.mutation_rate - 0.3).abs() < 1e-10);
        assert_eq!(config.geometry, Geometry::Wraparound);
        assert_eq!(config.selection, Selection::Rank);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_builders_do_not_clamp() {
        let config = SearchConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.5).abs() < 1e-10);
        assert_eq!(
            config.validate(),
            Err(QueensError::MutationRateOutOfRange(1.5))
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchConfig::new(1).validate().is_ok());
        assert!(SearchConfig::fast(4).validate().is_ok());
        assert!(SearchConfig::thorough(20).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_board() {
        assert_eq!(SearchConfig::new(0).validate(), Err(QueensError::EmptyBoard));
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = SearchConfig::default().with_population_size(2);
        assert_eq!(
            config.validate(),
            Err(QueensError::PopulationTooSmall { min: 3, got: 2 })
        );
        // rank selection still needs three
        let config = config.with_selection(Selection::Rank);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_large_tournament() {
        let config = SearchConfig::default()
            .with_population_size(4)
            .with_tournament_size(5);
        assert_eq!(
            config.validate(),
            Err(QueensError::PopulationTooSmall { min: 5, got: 4 })
        );
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = SearchConfig::default().with_tournament_size(0);
        assert_eq!(config.validate(), Err(QueensError::EmptyTournament));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = SearchConfig::default().with_max_generations_per_step(0);
        assert_eq!(config.validate(), Err(QueensError::NoGenerations));
    }

    #[test]
    fn test_validate_mutation_rate() {
        assert!(SearchConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(SearchConfig::default().with_mutation_rate(1.0).validate().is_ok());
        assert!(SearchConfig::default().with_mutation_rate(-0.01).validate().is_err());
        assert!(SearchConfig::default().with_mutation_rate(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_presets() {
        let config = SearchConfig::fast(6);
        assert_eq!(config.board_size, 6);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations_per_step, 200);

        let config = SearchConfig::thorough(16).with_seed(1);
        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations_per_step, 2000);
        assert_eq!(config.seed, Some(1));
    }
}
