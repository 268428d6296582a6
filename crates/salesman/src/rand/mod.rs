//! Seeded random instances (coordinates and general cost matrices).
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//! draw `index` of a batch can be reproduced without replaying the others.
//!
//! Code cross-refs: `CostMatrix::from_coords`, `CostMatrix::from_matrix`.

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::CostMatrix;
use crate::error::Result;

/// Instance shape.
#[derive(Clone, Copy, Debug)]
pub struct RandomCfg {
    /// Number of locations.
    pub n: usize,
    /// Coordinates and matrix entries are drawn from `[0, side)`.
    pub side: f64,
    /// Draw `cost[i][j]` and `cost[j][i]` independently.
    pub asymmetric: bool,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            n: 8,
            side: 100.0,
            asymmetric: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `cfg.n` points uniform in the square `[0, side)²`.
pub fn random_coords(cfg: RandomCfg, tok: ReplayToken) -> Vec<[f64; 2]> {
    let mut rng = tok.to_std_rng();
    let side = cfg.side.max(f64::MIN_POSITIVE);
    (0..cfg.n)
        .map(|_| [rng.gen::<f64>() * side, rng.gen::<f64>() * side])
        .collect()
}

/// General `n×n` matrix with zero diagonal; symmetric unless `cfg.asymmetric`.
///
/// Fails like `CostMatrix::from_matrix` when `cfg.n < 3`.
pub fn random_matrix(cfg: RandomCfg, tok: ReplayToken) -> Result<CostMatrix> {
    let mut rng = tok.to_std_rng();
    let side = cfg.side.max(f64::MIN_POSITIVE);
    let n = cfg.n;
    let mut m = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let c = rng.gen::<f64>() * side;
            m[(i, j)] = c;
            m[(j, i)] = if cfg.asymmetric {
                rng.gen::<f64>() * side
            } else {
                c
            };
        }
    }
    CostMatrix::from_matrix(m)
}

#[cfg(test)]
mod tests;
