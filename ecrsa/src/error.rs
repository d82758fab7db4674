//! Error types.

use core::fmt;
use modfield::Word;

/// Cipher errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The curve group has fewer points than there are byte values.
    GroupTooSmall {
        /// Number of points in the group.
        order: Word,
    },

    /// A scalar multiple could not be decoded back to a byte.
    EncodingNotFound,

    /// `e * d != 1` modulo the group order, or the key was made for a group
    /// of a different order.
    KeyMismatch,

    /// No usable public exponent was found.
    KeyGeneration,

    /// Key material is malformed or out of range.
    InvalidKey,

    /// Pixel buffer length is not a multiple of the channel count.
    PixelBufferLength {
        /// Buffer length in bytes.
        len: usize,
        /// Channels per pixel.
        channels: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::GroupTooSmall { order } => {
                write!(f, "curve group has {order} points, at least 256 are required")
            }
            Error::EncodingNotFound => write!(f, "point has no byte encoding"),
            Error::KeyMismatch => write!(f, "key does not match the group order"),
            Error::KeyGeneration => write!(f, "failed to generate a key pair"),
            Error::InvalidKey => write!(f, "invalid key"),
            Error::PixelBufferLength { len, channels } => write!(
                f,
                "pixel buffer of {len} bytes is not a whole number of {channels}-channel pixels"
            ),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
