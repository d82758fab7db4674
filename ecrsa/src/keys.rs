//! Cipher key pairs.

use crate::{Error, Result};
use core::fmt;
use modfield::{Word, gcd, mod_inverse, mod_mul, random_prime};
use rand_core::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of exponents tried by [`KeyPair::generate`] before giving up.
const MAX_KEYGEN_ATTEMPTS: usize = 64;

/// Exponent pair `(e, d)` with `e * d ≡ 1 (mod n)` for a group of order `n`.
///
/// The private exponent `d` is zeroized on drop.
#[derive(Clone, Eq, PartialEq)]
pub struct KeyPair {
    e: Word,
    d: Word,
    order: Word,
}

impl KeyPair {
    /// Generate a key pair for a group of order `order`.
    ///
    /// `e` is a random prime below `order` that does not divide it, and
    /// `d = e⁻¹ mod order`.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R, order: Word) -> Result<Self> {
        if order < 3 {
            return Err(Error::InvalidKey);
        }

        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            let e = random_prime(rng, 2..order).ok_or(Error::KeyGeneration)?;
            if gcd(e, order) == 1 {
                return Self::from_public_exponent(e, order);
            }
        }

        Err(Error::KeyGeneration)
    }

    /// Derive `d` from the public exponent `e`.
    ///
    /// Returns [`Error::InvalidKey`] if `e` is not invertible modulo `order`.
    pub fn from_public_exponent(e: Word, order: Word) -> Result<Self> {
        let d = mod_inverse(e, order).ok_or(Error::InvalidKey)?;
        Ok(Self { e, d, order })
    }

    /// Assemble a key pair from both exponents.
    ///
    /// Returns [`Error::KeyMismatch`] unless `e * d ≡ 1 (mod order)`.
    pub fn new(e: Word, d: Word, order: Word) -> Result<Self> {
        if order < 2 {
            return Err(Error::InvalidKey);
        }
        if mod_mul(e, d, order) != 1 {
            return Err(Error::KeyMismatch);
        }
        Ok(Self { e, d, order })
    }

    /// Parse the `"e d"` text form produced by [`Display`][`fmt::Display`].
    pub fn parse(s: &str, order: Word) -> Result<Self> {
        let mut fields = s.split_whitespace().map(str::parse::<Word>);
        let (Some(Ok(e)), Some(Ok(d)), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::InvalidKey);
        };
        Self::new(e, d, order)
    }

    /// Public (encryption) exponent.
    pub fn public_exponent(&self) -> Word {
        self.e
    }

    /// Private (decryption) exponent.
    pub fn private_exponent(&self) -> Word {
        self.d
    }

    /// Group order the exponents are inverse under.
    pub fn order(&self) -> Word {
        self.order
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.e, self.d)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("e", &self.e)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}

impl ZeroizeOnDrop for KeyPair {}
