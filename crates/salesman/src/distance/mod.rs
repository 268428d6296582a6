//! Distance model: the N×N cost table both engines read.
//!
//! Purpose
//! - Build a symmetric Euclidean matrix from coordinates, or accept a caller
//!   supplied matrix as-is (asymmetric and negative entries allowed).
//! - Reject malformed shapes eagerly so the engines only ever index in bounds.
//!
//! Code cross-refs: `exact::solve`, `brute::solve_brute_force`, `validate`.

mod matrix;

pub use matrix::{CostMatrix, MIN_LOCATIONS};

#[cfg(test)]
mod tests;
