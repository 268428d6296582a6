//! Entry checks shared by the exact solver and the oracle.

use crate::distance::CostMatrix;
use crate::error::{Error, Result};

/// Validate `(start, end, remaining)` against `cost` and return `remaining`
/// in canonical (ascending) order.
///
/// `start == end` is allowed (closed tour). Everything else must be distinct.
pub(crate) fn canonical_remaining(
    cost: &CostMatrix,
    start: usize,
    end: usize,
    remaining: &[usize],
) -> Result<Vec<usize>> {
    let n = cost.len();
    for (name, idx) in [("start", start), ("end", end)] {
        if idx >= n {
            return Err(Error::invalid_input(format!(
                "{name} index {idx} out of bounds for {n} locations"
            )));
        }
    }
    if remaining.is_empty() {
        return Err(Error::DegenerateInstance);
    }
    let mut seen = vec![false; n];
    for &x in remaining {
        if x >= n {
            return Err(Error::invalid_input(format!(
                "remaining index {x} out of bounds for {n} locations"
            )));
        }
        if x == start || x == end {
            return Err(Error::invalid_input(format!(
                "location {x} is an endpoint and cannot also be visited in between"
            )));
        }
        if seen[x] {
            return Err(Error::invalid_input(format!("location {x} listed twice")));
        }
        seen[x] = true;
    }
    Ok((0..n).filter(|&i| seen[i]).collect())
}
