//! Exact rational numbers in canonical form.
//!
//! A [`Fraction`] always holds a positive denominator and coprime terms, with zero stored as
//! `0 / 1`. Two fractions are equal exactly when their canonical terms are equal.
//!
//! Terms are 64-bit. Intermediate products are formed in 128 bits and reduced before being
//! narrowed back, so only results that are genuinely unrepresentable overflow. The operator
//! forms (`+`, `-`, `*`, unary `-`) panic on overflow the same way primitive integers do; the
//! `checked_*` methods report [`LinAlgError::Overflow`] instead.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{LinAlgError, Result};

/// Greatest common divisor of `|a|` and `|b|` (iterative Euclid).
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_wide(a.unsigned_abs() as u128, b.unsigned_abs() as u128) as u64
}

fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let h = a % b;
        a = b;
        b = h;
    }
    a
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Build `numerator / denominator` in lowest terms.
    ///
    /// Fails with `DivisionByZero` for a zero denominator, and with `Overflow` in the single
    /// unrepresentable case of a coprime `i64::MIN` denominator.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::reduce(numerator as i128, denominator as i128)
    }

    pub fn from_integer(value: i64) -> Self {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    fn reduce(numerator: i128, denominator: i128) -> Result<Self> {
        if denominator == 0 {
            return Err(LinAlgError::DivisionByZero);
        }
        if numerator == 0 {
            return Ok(Self::ZERO);
        }
        let divisor = gcd_wide(numerator.unsigned_abs(), denominator.unsigned_abs()) as i128;
        let mut numerator = numerator / divisor;
        let mut denominator = denominator / divisor;
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        match (i64::try_from(numerator), i64::try_from(denominator)) {
            (Ok(numerator), Ok(denominator)) => Ok(Fraction {
                numerator,
                denominator,
            }),
            _ => Err(LinAlgError::Overflow),
        }
    }

    #[inline]
    fn wide(&self) -> (i128, i128) {
        (self.numerator as i128, self.denominator as i128)
    }

    pub fn checked_add(&self, rhs: &Fraction) -> Result<Fraction> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::reduce(a * d + c * b, b * d)
    }

    pub fn checked_sub(&self, rhs: &Fraction) -> Result<Fraction> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::reduce(a * d - c * b, b * d)
    }

    pub fn checked_mul(&self, rhs: &Fraction) -> Result<Fraction> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::reduce(a * c, b * d)
    }

    /// `self / rhs`; `DivisionByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Fraction) -> Result<Fraction> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::reduce(a * d, b * c)
    }

    pub fn checked_scale(&self, scalar: i64) -> Result<Fraction> {
        let (a, b) = self.wide();
        Self::reduce(a * scalar as i128, b)
    }

    pub fn checked_neg(&self) -> Result<Fraction> {
        let (a, b) = self.wide();
        Self::reduce(-a, b)
    }

    /// `self / rhs`. Division is the one fallible arithmetic operation, so it has no operator.
    pub fn divide(&self, rhs: &Fraction) -> Result<Fraction> {
        self.checked_div(rhs)
    }

    /// `1 / self`; `DivisionByZero` when `self` is zero.
    pub fn reciprocate(&self) -> Result<Fraction> {
        Self::reduce(self.denominator as i128, self.numerator as i128)
    }

    /// Multiply by an integer.
    ///
    /// # Panics
    /// When the reduced product does not fit in 64-bit terms.
    pub fn scale(&self, scalar: i64) -> Fraction {
        expect_fits(self.checked_scale(scalar), "scale")
    }

    pub fn negate(&self) -> Fraction {
        -*self
    }

    pub fn signum(&self) -> i64 {
        self.numerator.signum()
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn to_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    /// Integer part, truncated toward zero.
    pub fn to_i64(&self) -> i64 {
        self.numerator / self.denominator
    }
}

fn expect_fits(result: Result<Fraction>, op: &str) -> Fraction {
    match result {
        Ok(value) => value,
        Err(err) => panic!("fraction {}: {}", op, err),
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        expect_fits(self.checked_add(&rhs), "addition")
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        expect_fits(self.checked_sub(&rhs), "subtraction")
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        expect_fits(self.checked_mul(&rhs), "multiplication")
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        expect_fits(self.checked_neg(), "negation")
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::ONE
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::from_integer(value)
    }
}

// Sign of a*d - c*b; both denominators are positive so no flip is needed.
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.wide();
        let (c, d) = other.wide();
        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = LinAlgError;

    /// Parse `"<numerator> / <denominator>"`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(LinAlgError::MalformedInput(format!(
                "splitting {:?} along \"/\" gave {} parts instead of 2",
                s,
                parts.len()
            )));
        }
        let numerator = parse_term(parts[0], s)?;
        let denominator = parse_term(parts[1], s)?;
        Fraction::new(numerator, denominator)
    }
}

fn parse_term(term: &str, input: &str) -> Result<i64> {
    let term = term.trim();
    term.parse::<i64>().map_err(|e| {
        LinAlgError::MalformedInput(format!("{:?} in {:?} is not an integer: {}", term, input, e))
    })
}

impl TryFrom<String> for Fraction {
    type Error = LinAlgError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Fraction> for String {
    fn from(value: Fraction) -> Self {
        value.to_string()
    }
}
