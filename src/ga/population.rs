//! Population management.
//!
//! A [`Population`] is a fixed-cardinality collection of [`Candidate`]s that
//! share one size `k`, one board size and one [`Geometry`]. It caches each
//! candidate's conflict count for the current generation.
//!
//! The candidate-level operators [`crossover`], [`mutate`] and [`extend`]
//! take board size and geometry explicitly where they need them.

use super::operators::{extend_min_conflict, order_crossover, swap_mutation};
use super::selection::Selection;
use super::types::Candidate;
use crate::board::Geometry;
use crate::error::{QueensError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// A homogeneous collection of candidates with cached fitness.
#[derive(Debug, Clone)]
pub struct Population {
    candidates: Vec<Candidate>,
    conflicts: Vec<usize>,
    candidate_size: usize,
    board_size: usize,
    geometry: Geometry,
}

impl Population {
    /// Creates `count` random candidates of `size` rows.
    ///
    /// Each candidate is an independently shuffled permutation of
    /// `0..board_size` truncated to `size`.
    ///
    /// # Errors
    /// [`QueensError::EmptyBoard`] for `board_size == 0` and
    /// [`QueensError::SizeExceedsBoard`] for `size > board_size`.
    pub fn seed<R: Rng>(
        size: usize,
        count: usize,
        board_size: usize,
        geometry: Geometry,
        rng: &mut R,
    ) -> Result<Self> {
        if board_size == 0 {
            return Err(QueensError::EmptyBoard);
        }
        if size > board_size {
            return Err(QueensError::SizeExceedsBoard { size, board_size });
        }

        let candidates = (0..count)
            .map(|_| {
                let mut columns: Vec<usize> = (0..board_size).collect();
                columns.shuffle(rng);
                columns.truncate(size);
                Candidate::new(columns)
            })
            .collect();

        Ok(Self::evaluated(candidates, size, board_size, geometry))
    }

    /// Builds a population from existing candidates.
    ///
    /// # Errors
    /// Fails if the candidates differ in size, exceed the board, repeat a
    /// column, or use a column outside `0..board_size`.
    pub fn from_candidates(
        candidates: Vec<Candidate>,
        board_size: usize,
        geometry: Geometry,
    ) -> Result<Self> {
        if board_size == 0 {
            return Err(QueensError::EmptyBoard);
        }
        let size = candidates.first().map_or(0, Candidate::size);
        if size > board_size {
            return Err(QueensError::SizeExceedsBoard { size, board_size });
        }
        for candidate in &candidates {
            check_candidate(candidate, size, board_size)?;
        }
        Ok(Self::evaluated(candidates, size, board_size, geometry))
    }

    fn evaluated(
        candidates: Vec<Candidate>,
        candidate_size: usize,
        board_size: usize,
        geometry: Geometry,
    ) -> Self {
        let mut population = Self {
            candidates,
            conflicts: Vec::new(),
            candidate_size,
            board_size,
            geometry,
        };
        population.evaluate();
        population
    }

    /// Recomputes the cached conflict count of every candidate.
    pub fn evaluate(&mut self) {
        let (board_size, geometry) = (self.board_size, self.geometry);
        self.conflicts = self
            .candidates
            .iter()
            .map(|c| c.conflicts(board_size, geometry))
            .collect();
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the population holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Rows placed by every candidate (the current stage `k`).
    pub fn candidate_size(&self) -> usize {
        self.candidate_size
    }

    /// Board dimension `N`.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Geometry shared by every candidate.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// All candidates, in population order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Cached conflict counts, parallel to [`candidates`](Self::candidates).
    pub fn conflicts(&self) -> &[usize] {
        &self.conflicts
    }

    /// The first candidate (in population order) with zero conflicts.
    pub fn first_solved(&self) -> Option<&Candidate> {
        self.conflicts
            .iter()
            .position(|&c| c == 0)
            .map(|i| &self.candidates[i])
    }

    /// The candidate with the fewest conflicts, first-encountered on ties,
    /// together with its conflict count.
    pub fn best(&self) -> Option<(&Candidate, usize)> {
        let mut best: Option<(usize, usize)> = None;
        for (i, &c) in self.conflicts.iter().enumerate() {
            match best {
                Some((_, fewest)) if c >= fewest => {}
                _ => best = Some((i, c)),
            }
        }
        best.map(|(i, c)| (&self.candidates[i], c))
    }

    /// Selects one parent with `selection`.
    ///
    /// # Errors
    /// [`QueensError::PopulationTooSmall`] when the population cannot hold a
    /// tournament (fewer than 3 candidates for the default strategy).
    pub fn select<R: Rng>(&self, selection: Selection, rng: &mut R) -> Result<&Candidate> {
        let idx = selection.select(&self.conflicts, rng)?;
        Ok(&self.candidates[idx])
    }

    /// Produces the next generation of the same cardinality.
    ///
    /// Each child comes from two parents selected independently (the same
    /// candidate may be chosen twice), an OX1 crossover and a swap mutation
    /// with probability `mutation_rate`.
    pub fn breed<R: Rng>(
        &self,
        selection: Selection,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let mut next = Vec::with_capacity(self.len());
        for _ in 0..self.len() {
            let parent1 = self.select(selection, rng)?;
            let parent2 = self.select(selection, rng)?;
            let mut child = crossover(parent1, parent2, rng)?;
            mutate(&mut child, mutation_rate, rng)?;
            next.push(child);
        }
        Ok(Self::evaluated(
            next,
            self.candidate_size,
            self.board_size,
            self.geometry,
        ))
    }

    /// Extends every candidate by one row and re-evaluates.
    ///
    /// No-op once candidates already fill the board.
    pub fn extend_all(&mut self) -> Result<()> {
        if self.candidate_size >= self.board_size {
            return Ok(());
        }
        for candidate in &mut self.candidates {
            extend(candidate, self.board_size, self.geometry)?;
        }
        self.candidate_size += 1;
        self.evaluate();
        Ok(())
    }
}

fn check_candidate(candidate: &Candidate, size: usize, board_size: usize) -> Result<()> {
    if candidate.size() != size {
        return Err(QueensError::MixedSizes {
            expected: size,
            got: candidate.size(),
        });
    }
    let mut seen = vec![false; board_size];
    for &column in candidate.placements() {
        if column >= board_size {
            return Err(QueensError::ColumnOutOfRange { column, board_size });
        }
        if seen[column] {
            return Err(QueensError::DuplicateColumn(column));
        }
        seen[column] = true;
    }
    Ok(())
}

/// Order crossover (OX1) of two equal-size candidates.
///
/// # Errors
/// [`QueensError::ParentLengthMismatch`] if the sizes differ.
pub fn crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut R,
) -> Result<Candidate> {
    order_crossover(parent1.placements(), parent2.placements(), rng).map(Candidate::new)
}

/// Swap mutation with probability `mutation_rate`. Returns whether the
/// candidate changed.
pub fn mutate<R: Rng>(candidate: &mut Candidate, mutation_rate: f64, rng: &mut R) -> Result<bool> {
    swap_mutation(candidate.placements_mut(), mutation_rate, rng)
}

/// Appends the least-conflicting unused column of `0..board_size`.
///
/// Returns the chosen column, or `None` if the candidate already fills the
/// board.
pub fn extend(candidate: &mut Candidate, board_size: usize, geometry: Geometry) -> Result<Option<usize>> {
    extend_min_conflict(candidate.placements_mut(), board_size, geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn assert_valid(population: &Population) {
        for c in population.candidates() {
            assert_eq!(c.size(), population.candidate_size());
            assert!(!c.has_duplicates(), "duplicate columns in {c}");
            assert!(c.placements().iter().all(|&col| col < population.board_size()));
        }
        assert_eq!(population.conflicts().len(), population.len());
    }

    #[test]
    fn test_seed_shapes() {
        let mut rng = create_rng(42);
        let population = Population::seed(3, 20, 8, Geometry::Flat, &mut rng).unwrap();
        assert_eq!(population.len(), 20);
        assert_eq!(population.candidate_size(), 3);
        assert_valid(&population);
    }

    #[test]
    fn test_seed_single_queen_always_solved() {
        let mut rng = create_rng(42);
        let population = Population::seed(1, 10, 8, Geometry::Wraparound, &mut rng).unwrap();
        assert!(population.conflicts().iter().all(|&c| c == 0));
        assert!(population.first_solved().is_some());
    }

    #[test]
    fn test_seed_rejects_bad_sizes() {
        let mut rng = create_rng(42);
        assert_eq!(
            Population::seed(1, 10, 0, Geometry::Flat, &mut rng).unwrap_err(),
            QueensError::EmptyBoard
        );
        assert_eq!(
            Population::seed(5, 10, 4, Geometry::Flat, &mut rng).unwrap_err(),
            QueensError::SizeExceedsBoard { size: 5, board_size: 4 }
        );
    }

    #[test]
    fn test_from_candidates_validation() {
        let ok = Population::from_candidates(
            vec![vec![0, 2].into(), vec![3, 1].into()],
            4,
            Geometry::Flat,
        );
        assert!(ok.is_ok());

        let mixed = Population::from_candidates(
            vec![vec![0, 2].into(), vec![3].into()],
            4,
            Geometry::Flat,
        );
        assert_eq!(mixed.unwrap_err(), QueensError::MixedSizes { expected: 2, got: 1 });

        let dup = Population::from_candidates(vec![vec![1, 1].into()], 4, Geometry::Flat);
        assert_eq!(dup.unwrap_err(), QueensError::DuplicateColumn(1));

        let out = Population::from_candidates(vec![vec![0, 4].into()], 4, Geometry::Flat);
        assert!(matches!(out, Err(QueensError::ColumnOutOfRange { column: 4, .. })));
    }

    #[test]
    fn test_best_and_first_solved() {
        let population = Population::from_candidates(
            vec![
                vec![0, 1, 2].into(), // 3 conflicts
                vec![0, 2, 1].into(), // 1 conflict
                vec![2, 0, 1].into(), // 1 conflict
            ],
            5,
            Geometry::Flat,
        )
        .unwrap();
        assert_eq!(population.conflicts(), &[3, 1, 1]);
        let (best, conflicts) = population.best().unwrap();
        assert_eq!(best.placements(), &[0, 2, 1]);
        assert_eq!(conflicts, 1);
        assert!(population.first_solved().is_none());
    }

    #[test]
    fn test_select_needs_three() {
        let mut rng = create_rng(42);
        let population = Population::seed(2, 2, 4, Geometry::Flat, &mut rng).unwrap();
        assert!(matches!(
            population.select(Selection::Tournament(3), &mut rng),
            Err(QueensError::PopulationTooSmall { min: 3, got: 2 })
        ));
    }

    #[test]
    fn test_breed_keeps_invariants() {
        let mut rng = create_rng(42);
        let mut population = Population::seed(5, 30, 8, Geometry::Flat, &mut rng).unwrap();
        for _ in 0..20 {
            population = population.breed(Selection::Tournament(3), 0.5, &mut rng).unwrap();
            assert_eq!(population.len(), 30);
            assert_eq!(population.candidate_size(), 5);
            assert_valid(&population);
        }
    }

    #[test]
    fn test_extend_all_grows_every_candidate() {
        let mut rng = create_rng(42);
        let mut population = Population::seed(2, 25, 6, Geometry::Wraparound, &mut rng).unwrap();
        population.extend_all().unwrap();
        assert_eq!(population.candidate_size(), 3);
        assert_valid(&population);
    }

    #[test]
    fn test_extend_all_at_full_size_is_noop() {
        let mut rng = create_rng(42);
        let mut population = Population::seed(4, 5, 4, Geometry::Flat, &mut rng).unwrap();
        let before = population.candidates().to_vec();
        population.extend_all().unwrap();
        assert_eq!(population.candidate_size(), 4);
        assert_eq!(population.candidates(), before.as_slice());
    }

    #[test]
    fn test_candidate_extend_example() {
        let mut candidate = Candidate::new(vec![1, 3]);
        assert_eq!(extend(&mut candidate, 4, Geometry::Flat).unwrap(), Some(0));
        assert_eq!(candidate.placements(), &[1, 3, 0]);
    }

    #[test]
    fn test_candidate_crossover_mismatch() {
        let mut rng = create_rng(42);
        let a = Candidate::new(vec![0, 1]);
        let b = Candidate::new(vec![2]);
        assert!(matches!(
            crossover(&a, &b, &mut rng),
            Err(QueensError::ParentLengthMismatch { left: 2, right: 1 })
        ));
    }
}
