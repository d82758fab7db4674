//! Error types.

use crate::Word;
use core::fmt;

/// Modular arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// A field modulus was required to be prime but is not.
    NotPrime(Word),

    /// The modulus is too small to define a field (less than 2).
    ModulusTooSmall(Word),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotPrime(n) => write!(f, "modulus {n} is not prime"),
            Error::ModulusTooSmall(n) => write!(f, "modulus {n} is too small"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
