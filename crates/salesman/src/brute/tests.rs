use super::*;
use crate::{CostMatrix, Error};
use nalgebra::dmatrix;

fn collect_orders(items: Vec<usize>) -> Vec<Vec<usize>> {
    let mut perms = LexPermutations::new(items);
    let mut out = Vec::new();
    while let Some(o) = perms.next_order() {
        out.push(o.to_vec());
    }
    out
}

#[test]
fn permutations_are_lexicographic_and_complete() {
    let orders = collect_orders(vec![3, 1, 2]);
    assert_eq!(
        orders,
        vec![
            vec![1, 2, 3],
            vec![1, 3, 2],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ]
    );
    assert_eq!(collect_orders(vec![7]), vec![vec![7]]);
    assert_eq!(collect_orders((0..6).collect()).len(), 720);
}

#[test]
fn exhausted_enumerator_stays_exhausted() {
    let mut perms = LexPermutations::new(vec![1, 2]);
    assert!(perms.next_order().is_some());
    assert!(perms.next_order().is_some());
    assert!(perms.next_order().is_none());
    assert!(perms.next_order().is_none());
}

#[test]
fn oracle_matches_known_tour() {
    let coords = [[-1.0, 0.0], [-1.0, 1.0], [0.0, 1.0], [2.0, 0.0], [-2.0, -1.0]];
    let cm = CostMatrix::from_coords(&coords).unwrap();
    let sol = solve_brute_force(&cm, 0, 0, &[1, 2, 3, 4]).unwrap();
    let expected = 2.0 + 2f64.sqrt() + 5f64.sqrt() + 17f64.sqrt();
    assert!((sol.length - expected).abs() < 1e-9);
    assert_eq!(sol.length, cm.path_length(&sol.path));
}

#[test]
fn ties_keep_lexicographically_first_ordering() {
    let cm = CostMatrix::from_matrix(dmatrix![
        0.0, 1.0, 1.0, 1.0;
        1.0, 0.0, 1.0, 1.0;
        1.0, 1.0, 0.0, 1.0;
        1.0, 1.0, 1.0, 0.0
    ])
    .unwrap();
    let sol = solve_brute_force(&cm, 0, 0, &[3, 2, 1]).unwrap();
    assert_eq!(sol.path, vec![0, 1, 2, 3, 0]);
    assert_eq!(sol.length, 4.0);
}

#[test]
fn single_intermediate_scores_its_only_ordering() {
    let cm = CostMatrix::from_coords(&[[0.0, 0.0], [3.0, 4.0], [6.0, 0.0]]).unwrap();
    let sol = solve_brute_force(&cm, 0, 2, &[1]).unwrap();
    assert_eq!(sol.path, vec![0, 1, 2]);
    assert_eq!(sol.length, 10.0);
}

#[test]
fn last_lexicographic_ordering_can_win() {
    // Only 0 -> 3 -> 2 -> 1 -> 0 is cheap.
    let cm = CostMatrix::from_matrix(dmatrix![
        0.0, 9.0, 9.0, 1.0;
        1.0, 0.0, 9.0, 9.0;
        9.0, 1.0, 0.0, 9.0;
        9.0, 9.0, 1.0, 0.0
    ])
    .unwrap();
    let sol = solve_brute_force(&cm, 0, 0, &[1, 2, 3]).unwrap();
    assert_eq!(sol.path, vec![0, 3, 2, 1, 0]);
    assert_eq!(sol.length, 4.0);
}

#[test]
fn unique_optimum_agrees_with_exact_path() {
    let cm = CostMatrix::from_matrix(dmatrix![
        0.0, 1.0, 10.0, 10.0, 10.0;
        10.0, 0.0, 2.0, 10.0, 10.0;
        10.0, 10.0, 0.0, 3.0, 10.0;
        10.0, 10.0, 10.0, 0.0, 4.0;
        5.0, 10.0, 10.0, 10.0, 0.0
    ])
    .unwrap();
    let cc = cross_check(&cm, 0, 0, &[1, 2, 3, 4], 1e-9).unwrap();
    assert!(cc.agree);
    assert_eq!(cc.exact, cc.oracle);
    assert_eq!(cc.exact.path, vec![0, 1, 2, 3, 4, 0]);
    assert_eq!(cc.exact.length, 15.0);
}

#[test]
fn oracle_rejects_the_same_inputs_as_exact() {
    let cm = CostMatrix::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
    assert_eq!(solve_brute_force(&cm, 0, 2, &[]), Err(Error::DegenerateInstance));
    assert!(matches!(
        solve_brute_force(&cm, 0, 2, &[5]),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        solve_brute_force(&cm, 0, 2, &[2]),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        cross_check(&cm, 0, 0, &[1, 1], 1e-6),
        Err(Error::InvalidInput(_))
    ));
}
