//! Integration tests for matrix configuration parsing and the matrix factory.

use std::str::FromStr;

use linrat::config::{MatrixConfig, MatrixKind};
use linrat::factory::build_matrix;
use linrat::math::{Matrix, Vector};
use linrat::LinAlgError;

// ---------------------------------------------------------------------------
// MatrixKind / MatrixConfig
// ---------------------------------------------------------------------------

#[test]
fn matrix_kind_from_str() {
    assert_eq!(MatrixKind::from_str("Dense").unwrap(), MatrixKind::Dense);
    assert_eq!(
        MatrixKind::from_str("sparse").unwrap(),
        MatrixKind::Sparse {
            default_value: 0.0,
            bounded: true
        }
    );
    assert_eq!(
        MatrixKind::from_str("sparse-unbounded").unwrap(),
        MatrixKind::Sparse {
            default_value: 0.0,
            bounded: false
        }
    );
    assert!(matches!(
        MatrixKind::from_str("banded"),
        Err(LinAlgError::Config(_))
    ));
}

#[test]
fn matrix_config_default_values() {
    let cfg = MatrixConfig::default();
    assert_eq!((cfg.rows, cfg.cols), (3, 3));
    assert_eq!(cfg.kind, MatrixKind::Dense);
    assert!(cfg.validate().is_ok());
}

#[test]
fn matrix_config_from_json_dense() {
    let cfg = MatrixConfig::from_json(r#"{"rows": 2, "cols": 4, "kind": "dense"}"#).unwrap();
    assert_eq!(cfg, MatrixConfig::new(2, 4, MatrixKind::Dense));
}

#[test]
fn matrix_config_from_json_sparse_defaults() {
    let cfg = MatrixConfig::from_json(r#"{"rows": 5, "cols": 5, "kind": "sparse"}"#).unwrap();
    assert_eq!(
        cfg.kind,
        MatrixKind::Sparse {
            default_value: 0.0,
            bounded: true
        }
    );
}

#[test]
fn matrix_config_json_round_trip() {
    let cfg = MatrixConfig::new(
        0,
        0,
        MatrixKind::Sparse {
            default_value: 1.5,
            bounded: false,
        },
    );
    let json = cfg.to_json().unwrap();
    assert_eq!(MatrixConfig::from_json(&json).unwrap(), cfg);
}

#[test]
fn matrix_config_rejects_bad_input() {
    assert!(matches!(
        MatrixConfig::from_json(r#"{"rows": 2, "cols": 2, "kind": "banded"}"#),
        Err(LinAlgError::Config(_))
    ));
    assert!(matches!(
        MatrixConfig::from_json("not json"),
        Err(LinAlgError::Config(_))
    ));
    assert!(matches!(
        MatrixConfig::from_json(r#"{"rows": 0, "cols": 2, "kind": "dense"}"#),
        Err(LinAlgError::Config(_))
    ));
}

// ---------------------------------------------------------------------------
// build_matrix
// ---------------------------------------------------------------------------

#[test]
fn factory_builds_dense() {
    let mut m = build_matrix(&MatrixConfig::new(2, 2, MatrixKind::Dense)).unwrap();
    assert_eq!(m.name(), "dense");
    assert_eq!(m.shape(), (2, 2));
    m.set(0, 0, 1.0).unwrap();
    m.set(0, 1, 2.0).unwrap();
    m.set(1, 0, 3.0).unwrap();
    m.set(1, 1, 4.0).unwrap();
    let product = m.multiply(&Vector::from_vec(vec![1.0, 1.0])).unwrap();
    assert_eq!(product.to_vec(), vec![3.0, 7.0]);
}

#[test]
fn factory_builds_bounded_sparse() {
    let kind = MatrixKind::Sparse {
        default_value: 0.0,
        bounded: true,
    };
    let mut m = build_matrix(&MatrixConfig::new(3, 3, kind)).unwrap();
    assert_eq!(m.name(), "sparse-bounded");
    assert!(m.set(3, 0, 1.0).is_err());
    m.set(2, 2, 1.0).unwrap();
    let mut stored = 0;
    m.for_each(&mut |_, _, _| stored += 1);
    assert_eq!(stored, 1);
}

#[test]
fn factory_builds_unbounded_sparse() {
    let kind = MatrixKind::Sparse {
        default_value: -1.0,
        bounded: false,
    };
    let mut m = build_matrix(&MatrixConfig::new(0, 0, kind)).unwrap();
    assert_eq!(m.name(), "sparse");
    assert_eq!(m.get(40, 40).unwrap(), -1.0);
    m.set(40, 40, 2.0).unwrap();
    assert_eq!(m.shape(), (41, 41));
}

#[test]
fn factory_validates_config() {
    let result = build_matrix(&MatrixConfig::new(0, 3, MatrixKind::Dense));
    assert!(matches!(result, Err(LinAlgError::Config(_))));
}
