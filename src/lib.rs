// Domain layer - grid engine and seed catalog
pub mod domain;

// Infrastructure layer - text frame formatting for the terminal
pub mod render;

// Re-exports for convenience
pub use domain::{Cell, Generation, Glyphs, Grid, LifeError, Seed, SeedName};
