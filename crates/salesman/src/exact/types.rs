//! Route keys, solutions and per-solve counters.

use serde::{Deserialize, Serialize};

/// One node of the decomposition: reach `end` from `start` through every
/// location in `remaining`, in any order.
///
/// `remaining` is stored sorted, so two routes over the same set compare and
/// hash equal regardless of the order they were built from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    start: usize,
    end: usize,
    remaining: Vec<usize>,
}

impl Route {
    pub fn new(start: usize, end: usize, remaining: impl IntoIterator<Item = usize>) -> Self {
        let mut remaining: Vec<usize> = remaining.into_iter().collect();
        remaining.sort_unstable();
        remaining.dedup();
        Self {
            start,
            end,
            remaining,
        }
    }

    /// Caller guarantees `remaining` is strictly ascending.
    #[inline]
    pub(crate) fn from_sorted(start: usize, end: usize, remaining: Vec<usize>) -> Self {
        debug_assert!(remaining.windows(2).all(|w| w[0] < w[1]));
        Self {
            start,
            end,
            remaining,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }
    #[inline]
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// The subroute ending at `remaining[i]`, which leaves the set.
    pub(crate) fn without(&self, i: usize) -> Route {
        let mut rest = Vec::with_capacity(self.remaining.len() - 1);
        rest.extend_from_slice(&self.remaining[..i]);
        rest.extend_from_slice(&self.remaining[i + 1..]);
        Route::from_sorted(self.start, self.remaining[i], rest)
    }
}

/// Optimal ordering for a route: `path` runs from start through every
/// intermediate to end, `length` is the sum of its edge costs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub path: Vec<usize>,
    pub length: f64,
}

/// Counters from one exact solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Distinct routes computed (cache misses).
    pub routes_solved: usize,
    pub cache_hits: usize,
}
