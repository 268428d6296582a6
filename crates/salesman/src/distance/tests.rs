use super::*;
use crate::Error;
use nalgebra::dmatrix;

#[test]
fn euclidean_matrix_is_symmetric_with_zero_diagonal() {
    let coords = [[0.0, 0.0], [3.0, 4.0], [0.0, 8.0]];
    let cm = CostMatrix::from_coords(&coords).unwrap();
    assert_eq!(cm.len(), 3);
    assert!((cm.get(0, 1) - 5.0).abs() < 1e-12);
    assert!((cm.get(0, 2) - 8.0).abs() < 1e-12);
    assert!((cm.get(1, 2) - 5.0).abs() < 1e-12);
    for i in 0..3 {
        assert_eq!(cm.get(i, i), 0.0);
        for j in 0..3 {
            assert_eq!(cm.get(i, j), cm.get(j, i));
        }
    }
    assert!(cm.is_symmetric(0.0));
}

#[test]
fn coords_of_any_equal_dimension_are_accepted() {
    let coords = vec![vec![0.0, 0.0, 0.0], vec![1.0, 2.0, 2.0], vec![0.0, 0.0, 1.0]];
    let cm = CostMatrix::from_coords(&coords).unwrap();
    assert!((cm.get(0, 1) - 3.0).abs() < 1e-12);
}

#[test]
fn ragged_coords_are_invalid() {
    let coords = vec![vec![0.0, 0.0], vec![1.0], vec![2.0, 2.0]];
    assert!(matches!(
        CostMatrix::from_coords(&coords),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn non_finite_coords_are_invalid() {
    let coords = [[0.0, 0.0], [f64::NAN, 1.0], [2.0, 2.0]];
    assert!(matches!(
        CostMatrix::from_coords(&coords),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn fewer_than_three_coords_is_insufficient() {
    let two = [[0.0, 0.0], [1.0, 1.0]];
    assert_eq!(
        CostMatrix::from_coords(&two),
        Err(Error::InsufficientLocations {
            found: 2,
            required: 3
        })
    );
    let none: [[f64; 2]; 0] = [];
    assert_eq!(
        CostMatrix::from_coords(&none),
        Err(Error::InsufficientLocations {
            found: 0,
            required: 3
        })
    );
}

#[test]
fn supplied_matrix_is_used_as_is() {
    let m = dmatrix![0.0, 1.0, 7.0; 2.0, 0.0, -1.0; 3.0, 4.0, 0.0];
    let cm = CostMatrix::from_matrix(m.clone()).unwrap();
    assert_eq!(cm.as_matrix(), &m);
    assert_eq!(cm.get(0, 2), 7.0);
    assert_eq!(cm.get(2, 0), 3.0);
    assert!(!cm.is_symmetric(1e-9));
}

#[test]
fn non_square_matrix_is_invalid() {
    let m = dmatrix![0.0, 1.0, 2.0; 1.0, 0.0, 3.0];
    assert!(matches!(
        CostMatrix::from_matrix(m),
        Err(Error::InvalidInput(_))
    ));
    let rows = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0], vec![2.0, 3.0, 0.0]];
    assert!(matches!(
        CostMatrix::from_rows(&rows),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn infinite_entry_is_reported_by_position() {
    let m = dmatrix![0.0, 1.0, 2.0; 1.0, 0.0, f64::INFINITY; 2.0, 3.0, 0.0];
    match CostMatrix::from_matrix(m) {
        Err(Error::InvalidInput(msg)) => assert!(msg.contains("cost[1][2]"), "{msg}"),
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn small_matrix_is_insufficient() {
    let m = dmatrix![0.0, 1.0; 1.0, 0.0];
    assert_eq!(
        CostMatrix::from_matrix(m),
        Err(Error::InsufficientLocations {
            found: 2,
            required: 3
        })
    );
}

#[test]
fn rows_round_trip_and_path_length() {
    let rows = vec![
        vec![0.0, 1.0, 5.0],
        vec![2.0, 0.0, 3.0],
        vec![4.0, 6.0, 0.0],
    ];
    let cm = CostMatrix::from_rows(&rows).unwrap();
    assert_eq!(cm.to_rows(), rows);
    assert_eq!(cm.path_length(&[0, 1, 2, 0]), 1.0 + 3.0 + 4.0);
    assert_eq!(cm.path_length(&[2]), 0.0);
    assert_eq!(cm.path_length(&[]), 0.0);
}
