//! Safe prime generation.

use crate::{Error, Result};
use modfield::{Word, is_prime, random_prime};
use rand_core::RngCore;

/// Parameters of the safe prime search.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SafePrimeParams {
    /// Bit length of `q`. Must be in `3..=7` so that `p = 2q + 1 < 256`.
    pub bits: u32,

    /// Number of candidate `q` values drawn before giving up.
    pub max_attempts: usize,
}

impl SafePrimeParams {
    /// Smallest supported bit length of `q`.
    pub const MIN_BITS: u32 = 3;

    /// Largest supported bit length of `q`.
    pub const MAX_BITS: u32 = 7;

    fn validate(&self) -> Result<()> {
        if (Self::MIN_BITS..=Self::MAX_BITS).contains(&self.bits) && self.max_attempts > 0 {
            Ok(())
        } else {
            Err(Error::InvalidParameters)
        }
    }
}

impl Default for SafePrimeParams {
    fn default() -> Self {
        Self {
            bits: 7,
            max_attempts: 64,
        }
    }
}

/// A safe prime `p = 2q + 1` with `q` prime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SafePrime {
    p: Word,
    q: Word,
}

impl SafePrime {
    /// Check that `p` is a safe prime.
    pub fn new(p: Word) -> Result<Self> {
        let q = p / 2;
        if p % 2 == 1 && is_prime(p) && is_prime(q) {
            Ok(Self { p, q })
        } else {
            Err(Error::InvalidKey)
        }
    }

    /// The safe prime `p`.
    pub fn p(&self) -> Word {
        self.p
    }

    /// The Sophie Germain prime `q = (p - 1) / 2`.
    pub fn q(&self) -> Word {
        self.q
    }
}

/// Search for a safe prime whose `q` has `params.bits` bits.
///
/// Each attempt draws a random prime `q` and tests `2q + 1`.
pub fn generate_safe_prime<R: RngCore + ?Sized>(
    rng: &mut R,
    params: &SafePrimeParams,
) -> Result<SafePrime> {
    params.validate()?;
    let range = (1 << (params.bits - 1))..(1 << params.bits);

    for _ in 0..params.max_attempts {
        let Some(q) = random_prime(rng, range.clone()) else {
            break;
        };
        let p = 2 * q + 1;
        if is_prime(p) {
            return Ok(SafePrime { p, q });
        }
    }

    Err(Error::PrimeSearchExhausted {
        attempts: params.max_attempts,
    })
}
