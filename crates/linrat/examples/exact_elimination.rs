//! Reduce a small rational system with row operations and record the pivoting.
//!
//! Run with `LINRAT_LOG=debug cargo run --example exact_elimination`.

use anyhow::{bail, Result};
use log::LevelFilter;

use linrat::config::MatrixConfig;
use linrat::factory::build_matrix;
use linrat::math::{DenseMatrix, Fraction, Matrix, Vector};
use linrat::permutation::{Permutation, Transposition};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINRAT_LOG", "error,linrat=info"))
        .init();

    // Augmented matrix [A | b] for
    //   0x + 2y +  z = 5
    //   1x + 1y + 1z = 6
    //   2x + 1y + 3z = 13
    let q = |s: &str| s.parse::<Fraction>();
    let rows = vec![
        vec![q("0 / 1")?, q("2 / 1")?, q("1 / 1")?, q("5 / 1")?],
        vec![q("1 / 1")?, q("1 / 1")?, q("1 / 1")?, q("6 / 1")?],
        vec![q("2 / 1")?, q("1 / 1")?, q("3 / 1")?, q("13 / 1")?],
    ];
    let mut m = DenseMatrix::from_rows(rows)?;
    let mut pivots = Permutation::new();
    let n = m.rows();

    for col in 0..n {
        let pivot_row = match (col..n).find(|&row| m[(row, col)] != Fraction::ZERO) {
            Some(row) => row,
            None => bail!("matrix is singular in column {}", col),
        };
        if pivot_row != col {
            m.swap_rows(col, pivot_row)?;
            pivots.chain(Transposition::new(col, pivot_row));
        }
        let inv = m.get(col, col)?.reciprocate()?;
        m.scale_row(col, &inv)?;
        for row in 0..n {
            if row != col {
                let factor = m.get(row, col)?;
                m.add_row(col, row, &-factor)?;
            }
        }
    }

    let solution: Vector<Fraction> = m.column(n)?;
    println!("reduced system:\n{}", m);
    println!("solution: {}", solution);
    println!("row exchanges: {}", pivots);

    // Check the solution against the original coefficients in floating point.
    let mut check = build_matrix(&MatrixConfig::new(3, 3, "dense".parse()?))?;
    let coefficients = [[0.0, 2.0, 1.0], [1.0, 1.0, 1.0], [2.0, 1.0, 3.0]];
    for (r, row) in coefficients.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            check.set(r, c, *value)?;
        }
    }
    let x: Vector = solution.iter().map(Fraction::to_f64).collect();
    println!("A * x = {}", check.multiply(&x)?);

    Ok(())
}
