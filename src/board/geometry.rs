//! Board geometry.

use std::fmt;

/// Whether diagonals wrap around the board edges.
///
/// The geometry is fixed for a run; every candidate in a population is
/// evaluated under the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// Standard chessboard: diagonals stop at the edges.
    #[default]
    Flat,

    /// Toroidal board: a diagonal leaving one edge re-enters on the
    /// opposite edge.
    Wraparound,
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Flat => f.write_str("flat"),
            Geometry::Wraparound => f.write_str("wraparound"),
        }
    }
}
