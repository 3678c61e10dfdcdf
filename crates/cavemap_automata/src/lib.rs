//! Cellular-automaton cave generation engine for cavemap.
//!
//! The primary entry point is [`generate_cave`], which seeds a
//! [`TileGrid`](cavemap_core::TileGrid) from a [`CaveConfig`] using a
//! caller-supplied random number generator and then runs every
//! [`GenerationRule`] of the config's [`RuleSet`] over it.
//!
//! Randomness only enters through [`seed_grid`]. The smoothing passes
//! ([`smooth`], [`apply_rule_set`]) are pure functions of the grid and rules.

mod apply;
mod seed;
mod types;

pub use apply::{apply_rule_set, count_r1, count_r2, generate_cave, smooth};
pub use seed::seed_grid;
pub use types::{CaveConfig, FillProbability, GenerationRule, RuleSet};

use thiserror::Error;

/// Number of cells in the radius-2 neighborhood: the 5×5 square minus its four corners.
pub const R2_NEIGHBORHOOD_SIZE: usize = 21;

/// Errors that can occur when building a generation config
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AutomataError {
    #[error("fill probability must be within 0..=100, got {0}")]
    FillOutOfRange(i64),
}
