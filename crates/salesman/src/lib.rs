//! Exact fixed-endpoint travelling salesman paths.
//!
//! Layout
//! - `distance`: cost matrix construction from coordinates or a caller-supplied table.
//! - `exact`: memoized backward decomposition (Held–Karp equivalent), the primary engine.
//! - `brute`: permutation oracle used to cross-check `exact` on small instances.
//! - `input`: pure helpers for input producers (text extraction, location bounds, timing).
//! - `rand`: seeded random instances for tests, benches and the CLI.
//!
//! Both engines share the same validation and the same tie-break: among equally
//! short candidates the first one in ascending index order wins.

pub mod api;
pub mod brute;
pub mod distance;
mod error;
pub mod exact;
pub mod input;
pub mod rand;
mod validate;

pub use brute::{cross_check, solve_brute_force, CrossCheck};
pub use distance::{CostMatrix, MIN_LOCATIONS};
pub use error::{Error, Result};
pub use exact::{solve, solve_tour, solve_with_stats, Route, Solution, SolveStats};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
