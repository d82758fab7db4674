//! Error types.

use crate::Word;
use core::fmt;

/// Curve errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Curve coefficients or modulus violate a precondition.
    InvalidCurveParameters(&'static str),

    /// Operands belong to different curves.
    CurveMismatch,

    /// Coordinates do not satisfy the curve equation.
    NotOnCurve {
        /// x-coordinate
        x: Word,
        /// y-coordinate
        y: Word,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCurveParameters(reason) => {
                write!(f, "invalid curve parameters: {reason}")
            }
            Error::CurveMismatch => write!(f, "points belong to different curves"),
            Error::NotOnCurve { x, y } => write!(f, "({x}, {y}) is not on the curve"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
