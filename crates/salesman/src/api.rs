//! Curated surface for callers (CLI, benches, integration tests).
//!
//! Prefer these re-exports over reaching into submodules.

// Distance model
pub use crate::distance::{CostMatrix, MIN_LOCATIONS};
// Engines
pub use crate::brute::{cross_check, solve_brute_force, CrossCheck};
pub use crate::exact::{solve, solve_tour, solve_with_stats, Route, Solution, SolveStats};
// Input producers / result consumers
pub use crate::input::{extract_locations, format_elapsed, BoundsError, LocationBounds};
// Random instances
pub use crate::rand::{random_coords, random_matrix, RandomCfg, ReplayToken};
// Errors
pub use crate::error::{Error, Result};
