//! Error types.

use core::fmt;

/// Signature errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Content to be signed already contains the signature marker.
    AlreadySigned,

    /// Signed artifact has no marker, or its signature length does not match
    /// its content.
    MalformedSignature,

    /// No safe prime was found within the attempt budget.
    PrimeSearchExhausted {
        /// Number of candidates tried.
        attempts: usize,
    },

    /// Key material is malformed or inconsistent.
    InvalidKey,

    /// Safe prime search parameters are out of range.
    InvalidParameters,

    /// The signer's response does not confirm the signature.
    Rejected,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadySigned => write!(f, "content is already signed"),
            Error::MalformedSignature => write!(f, "malformed signed artifact"),
            Error::PrimeSearchExhausted { attempts } => {
                write!(f, "no safe prime found after {attempts} attempts")
            }
            Error::InvalidKey => write!(f, "invalid signature key"),
            Error::InvalidParameters => write!(f, "invalid safe prime parameters"),
            Error::Rejected => write!(f, "signature verification failed"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
