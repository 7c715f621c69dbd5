//! Property tests for fractions, row operations and permutations.

use linrat::math::{gcd, DenseMatrix, Fraction, Matrix, SparseMatrix, Vector};
use linrat::permutation::{Permutation, Transposition};
use proptest::prelude::*;

fn fraction() -> impl Strategy<Value = Fraction> {
    (-1_000_000i64..1_000_000, 1i64..1_000_000, any::<bool>()).prop_map(|(n, d, flip)| {
        let d = if flip { -d } else { d };
        Fraction::new(n, d).unwrap()
    })
}

fn dense_with_vector() -> impl Strategy<Value = (DenseMatrix<f64>, Vector<f64>)> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(-100.0f64..100.0, rows * cols),
            prop::collection::vec(-100.0f64..100.0, cols),
        )
            .prop_map(move |(data, v)| {
                (
                    DenseMatrix::from_shape_vec((rows, cols), data).unwrap(),
                    Vector::from_vec(v),
                )
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fraction_is_canonical(n in any::<i32>(), d in any::<i32>().prop_filter("non-zero", |d| *d != 0)) {
        let f = Fraction::new(n as i64, d as i64).unwrap();
        prop_assert!(f.denominator() > 0);
        if f.numerator() == 0 {
            prop_assert_eq!(f.denominator(), 1);
        } else {
            prop_assert_eq!(gcd(f.numerator(), f.denominator()), 1);
        }
    }

    #[test]
    fn fraction_plus_negation_is_zero(x in fraction()) {
        let sum = x + x.negate();
        prop_assert_eq!((sum.numerator(), sum.denominator()), (0, 1));
    }

    #[test]
    fn double_reciprocal_is_identity(x in fraction().prop_filter("non-zero", |x| x.numerator() != 0)) {
        prop_assert_eq!(x.reciprocate().unwrap().reciprocate().unwrap(), x);
    }

    #[test]
    fn parse_inverts_format(x in fraction()) {
        let parsed: Fraction = x.to_string().parse().unwrap();
        prop_assert_eq!(parsed, x);
    }

    #[test]
    fn ordering_matches_difference_sign(x in fraction(), y in fraction()) {
        let diff = x - y;
        prop_assert_eq!(x.cmp(&y), diff.numerator().cmp(&0));
    }

    #[test]
    fn dense_multiply_is_row_dot((m, v) in dense_with_vector()) {
        let product = m.multiply(&v).unwrap();
        prop_assert_eq!(product.dimension(), m.rows());
        for row in 0..m.rows() {
            let expected = m.row(row).unwrap().dot(&v).unwrap();
            prop_assert_eq!(product[row], expected);
        }
    }

    #[test]
    fn dense_swap_rows_is_involution((m, _v) in dense_with_vector(), a in 0usize..6, b in 0usize..6) {
        let (a, b) = (a % m.rows(), b % m.rows());
        let mut swapped = m.clone();
        swapped.swap_rows(a, b).unwrap();
        swapped.swap_rows(a, b).unwrap();
        prop_assert_eq!(swapped, m);
    }

    #[test]
    fn sparse_swap_rows_is_involution(
        entries in prop::collection::vec((0usize..8, 0usize..8, -10.0f64..10.0), 0..20),
        a in 0usize..8,
        b in 0usize..8,
    ) {
        let mut m = SparseMatrix::with_bounds(8, 8, 0.0);
        for (r, c, v) in entries {
            m.set(r, c, v).unwrap();
        }
        let original = m.clone();
        m.swap_rows(a, b).unwrap();
        m.swap_rows(a, b).unwrap();
        prop_assert_eq!(m, original);
    }

    #[test]
    fn exact_add_row_is_reversible(
        row0 in prop::collection::vec(fraction(), 3),
        row1 in prop::collection::vec(fraction(), 3),
        k in fraction(),
    ) {
        let mut m = DenseMatrix::from_rows(vec![row0, row1.clone()]).unwrap();
        m.add_row(0, 1, &k).unwrap();
        m.add_row(0, 1, &-k).unwrap();
        prop_assert_eq!(m.row_slice(1), row1.as_slice());
    }

    #[test]
    fn permutation_inverse_undoes_apply(
        swaps in prop::collection::vec((0usize..16, 0usize..16), 0..12),
        v in 0usize..20,
    ) {
        let p: Permutation = swaps.into_iter().map(|(i, j)| Transposition::new(i, j)).collect();
        prop_assert_eq!(p.inverse().apply(p.apply(v)), v);
    }
}
