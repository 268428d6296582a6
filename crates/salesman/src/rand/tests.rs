use super::*;

#[test]
fn replay_token_is_deterministic_and_indexed() {
    let cfg = RandomCfg::default();
    let a = random_coords(cfg, ReplayToken::new(7, 0));
    let b = random_coords(cfg, ReplayToken::new(7, 0));
    let c = random_coords(cfg, ReplayToken::new(7, 1));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), cfg.n);
    assert!(a
        .iter()
        .flatten()
        .all(|&x| (0.0..cfg.side).contains(&x)));
}

#[test]
fn symmetric_and_asymmetric_matrices() {
    let sym = random_matrix(
        RandomCfg {
            n: 6,
            ..Default::default()
        },
        ReplayToken::new(1, 2),
    )
    .unwrap();
    assert!(sym.is_symmetric(0.0));
    let asym = random_matrix(
        RandomCfg {
            n: 6,
            asymmetric: true,
            ..Default::default()
        },
        ReplayToken::new(1, 2),
    )
    .unwrap();
    assert!(!asym.is_symmetric(1e-12));
    for i in 0..6 {
        assert_eq!(asym.get(i, i), 0.0);
    }
}

#[test]
fn too_small_matrix_fails() {
    let res = random_matrix(
        RandomCfg {
            n: 2,
            ..Default::default()
        },
        ReplayToken::new(0, 0),
    );
    assert!(matches!(
        res,
        Err(crate::Error::InsufficientLocations { found: 2, .. })
    ));
}
