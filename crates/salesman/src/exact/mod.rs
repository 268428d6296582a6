//! Exact solver: memoized backward decomposition (Held–Karp equivalent).
//!
//! Recurrence
//! - Base: `remaining = {m}` gives the only path `start → m → end`.
//! - Step: the best path for `(start, end, R)` reaches `end` from some last
//!   stop `x ∈ R`, so it is `min_x solve(start, x, R∖{x}) + cost[x][end]`.
//!
//! Every route is computed once per call and cached by `(start, end, set(R))`.
//! Distinct routes are bounded by `N·2^(N−2)`, each doing O(N) work. Recursion
//! depth equals `|R|`.
//!
//! The cache lives inside one call and is never shared across matrices.

mod memo;
mod types;

pub use memo::{solve, solve_tour, solve_with_stats};
pub use types::{Route, Solution, SolveStats};
