//! Brute-force oracle: score every ordering of the intermediates.
//!
//! Only meant for cross-validating `exact` on small instances (≤ ~10
//! intermediates). Orderings are enumerated in lexicographic order of the
//! ascending intermediate set and only a strictly shorter path replaces the
//! incumbent, so the result is reproducible and independent of input order.

mod perm;

use crate::distance::CostMatrix;
use crate::error::Result;
use crate::exact::{solve, Solution};
use crate::validate::canonical_remaining;

pub use perm::LexPermutations;

/// Exhaustive optimum for `(start, end, remaining)`; same errors as `exact::solve`.
pub fn solve_brute_force(
    cost: &CostMatrix,
    start: usize,
    end: usize,
    remaining: &[usize],
) -> Result<Solution> {
    let remaining = canonical_remaining(cost, start, end, remaining)?;
    let mut path = Vec::with_capacity(remaining.len() + 2);
    path.push(start);
    path.extend_from_slice(&remaining);
    path.push(end);
    // The ascending order is the first lexicographic ordering.
    let mut best = Solution {
        length: cost.path_length(&path),
        path: path.clone(),
    };
    let mut perms = LexPermutations::new(remaining);
    perms.next_order();
    while let Some(order) = perms.next_order() {
        path[1..=order.len()].copy_from_slice(order);
        let length = cost.path_length(&path);
        if length < best.length {
            best = Solution {
                path: path.clone(),
                length,
            };
        }
    }
    Ok(best)
}

/// Outcome of running both engines on one instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossCheck {
    pub exact: Solution,
    pub oracle: Solution,
    /// Lengths agree within the requested tolerance.
    pub agree: bool,
}

/// Solve with both engines and compare lengths within `tol`.
pub fn cross_check(
    cost: &CostMatrix,
    start: usize,
    end: usize,
    remaining: &[usize],
    tol: f64,
) -> Result<CrossCheck> {
    let exact = solve(cost, start, end, remaining)?;
    let oracle = solve_brute_force(cost, start, end, remaining)?;
    let agree = (exact.length - oracle.length).abs() <= tol;
    if !agree {
        tracing::warn!(
            exact = exact.length,
            oracle = oracle.length,
            ?remaining,
            "exact solver disagrees with brute force"
        );
    }
    Ok(CrossCheck {
        exact,
        oracle,
        agree,
    })
}

#[cfg(test)]
mod tests;
