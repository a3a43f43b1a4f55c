use thiserror::Error;

/// Failures reported when wiring up a simulation.
///
/// Every error here is an input-validation failure at construction time;
/// once a `Grid` exists, all of its operations are total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    /// Grid dimensions must both be at least 1.
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The supplied seed pattern does not match the declared grid shape.
    /// Ragged seeds report the width of the first offending row.
    #[error("seed pattern is {seed_rows}x{seed_cols} but the grid is {rows}x{cols}")]
    SeedDimensionMismatch {
        rows: usize,
        cols: usize,
        seed_rows: usize,
        seed_cols: usize,
    },

    /// Named-seed lookup miss. Recoverable: the caller picks a fallback,
    /// the catalog never substitutes one silently.
    #[error("unknown seed name {0:?} (expected blinker, toad or star)")]
    UnknownSeedName(String),

    /// The alive and dead display glyphs must be distinguishable.
    #[error("alive and dead glyphs must be distinct")]
    IndistinctGlyphs,
}
