//! Board geometry and the queen conflict model.
//!
//! A placement is a slice of column indices, one per row: `placements[r]`
//! is the column of the queen in row `r`. Every function here takes the
//! board size and [`Geometry`] explicitly.
//!
//! # Key Items
//!
//! - [`Geometry`]: flat board or wraparound (toroidal) diagonals
//! - [`attacks`]: whether two queens attack each other diagonally
//! - [`conflict_count`]: number of attacking row pairs (the GA fitness)
//! - [`is_solution`]: full validity check of a complete placement

mod conflict;
mod geometry;

pub use conflict::{
    attacks, conflict_count, first_duplicate_column, has_duplicate_columns, is_solution,
    row_conflicts,
};
pub use geometry::Geometry;
