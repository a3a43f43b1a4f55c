mod cell;
mod error;
mod grid;
mod seeds;

pub use cell::{Cell, Glyphs};
pub use error::LifeError;
pub use grid::{Generation, Grid};
pub use seeds::{Seed, SeedName, random};
