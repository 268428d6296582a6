//! Memoized backward decomposition.

use std::collections::HashMap;

use crate::distance::CostMatrix;
use crate::error::Result;
use crate::validate::canonical_remaining;

use super::types::{Route, Solution, SolveStats};

/// Optimal path from `start` to `end` visiting every index in `remaining` once.
///
/// The order of `remaining` does not matter: candidates are always tried in
/// ascending index order and only a strictly shorter one replaces the best,
/// so ties resolve to the smallest last-intermediate at every level.
pub fn solve(cost: &CostMatrix, start: usize, end: usize, remaining: &[usize]) -> Result<Solution> {
    solve_with_stats(cost, start, end, remaining).map(|(sol, _)| sol)
}

/// Closed tour through every location, starting and ending at `depot`.
pub fn solve_tour(cost: &CostMatrix, depot: usize) -> Result<Solution> {
    let remaining: Vec<usize> = (0..cost.len()).filter(|&i| i != depot).collect();
    solve(cost, depot, depot, &remaining)
}

/// `solve` plus cache counters.
pub fn solve_with_stats(
    cost: &CostMatrix,
    start: usize,
    end: usize,
    remaining: &[usize],
) -> Result<(Solution, SolveStats)> {
    let remaining = canonical_remaining(cost, start, end, remaining)?;
    let k = remaining.len();
    let mut runner = MemoRunner::new(cost);
    let sol = runner.resolve(Route::from_sorted(start, end, remaining));
    let stats = runner.stats();
    tracing::debug!(
        start,
        end,
        remaining = k,
        routes_solved = stats.routes_solved,
        cache_hits = stats.cache_hits,
        length = sol.length,
        "exact solve"
    );
    Ok((sol, stats))
}

/// Solve cache scoped to a single top-level call; dropped with the runner.
struct MemoRunner<'a> {
    cost: &'a CostMatrix,
    cache: HashMap<Route, Solution>,
    hits: usize,
}

impl<'a> MemoRunner<'a> {
    fn new(cost: &'a CostMatrix) -> Self {
        Self {
            cost,
            cache: HashMap::new(),
            hits: 0,
        }
    }

    fn stats(&self) -> SolveStats {
        SolveStats {
            routes_solved: self.cache.len(),
            cache_hits: self.hits,
        }
    }

    fn resolve(&mut self, route: Route) -> Solution {
        if let Some(sol) = self.cache.get(&route) {
            self.hits += 1;
            return sol.clone();
        }
        let sol = if let &[m] = route.remaining() {
            let (s, e) = (route.start(), route.end());
            Solution {
                path: vec![s, m, e],
                length: self.cost.get(s, m) + self.cost.get(m, e),
            }
        } else {
            let mut best = self.extend(&route, 0);
            for i in 1..route.remaining().len() {
                let cand = self.extend(&route, i);
                if cand.length < best.length {
                    best = cand;
                }
            }
            best
        };
        self.cache.insert(route, sol.clone());
        sol
    }

    /// Best path that reaches `route.end` via `route.remaining[i]` as the last stop.
    fn extend(&mut self, route: &Route, i: usize) -> Solution {
        let x = route.remaining()[i];
        let sub = self.resolve(route.without(i));
        let mut path = sub.path;
        path.push(route.end());
        Solution {
            path,
            length: sub.length + self.cost.get(x, route.end()),
        }
    }
}
