use std::error::Error;
use std::fmt;

/// Errors raised by vector, matrix, fraction and configuration operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinAlgError {
    /// Operand shapes disagree, e.g. a vector of the wrong dimension.
    DimensionMismatch { expected: usize, actual: usize },
    /// Coordinate outside the declared bounds.
    IndexOutOfRange { index: usize, bound: usize },
    /// Zero denominator or reciprocal of zero.
    DivisionByZero,
    /// Text that could not be parsed.
    MalformedInput(String),
    /// Operation needs at least one element.
    EmptyVector,
    /// Flat buffer does not match the requested shape.
    InvalidShape { rows: usize, cols: usize, len: usize },
    /// Fraction result does not fit in 64-bit terms.
    Overflow,
    /// Invalid matrix configuration.
    Config(String),
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinAlgError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, actual)
            }
            LinAlgError::IndexOutOfRange { index, bound } => {
                write!(f, "index {} out of range for bound {}", index, bound)
            }
            LinAlgError::DivisionByZero => write!(f, "division by zero"),
            LinAlgError::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
            LinAlgError::EmptyVector => write!(f, "operation requires a non-empty vector"),
            LinAlgError::InvalidShape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            LinAlgError::Overflow => write!(f, "fraction arithmetic overflowed 64-bit terms"),
            LinAlgError::Config(msg) => write!(f, "invalid matrix configuration: {}", msg),
        }
    }
}

impl Error for LinAlgError {}

pub type Result<T> = std::result::Result<T, LinAlgError>;

/// Bounds check shared by vectors and matrices.
#[inline]
pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(LinAlgError::IndexOutOfRange { index, bound })
    }
}

/// Dimension check shared by binary vector operations.
#[inline]
pub(crate) fn check_dimension(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(LinAlgError::DimensionMismatch { expected, actual })
    }
}
