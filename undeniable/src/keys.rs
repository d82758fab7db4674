//! Signature keys.

use crate::{Error, Result, SafePrime, SafePrimeParams, generate_safe_prime};
use core::{fmt, str::FromStr};
use modfield::{Word, mod_inverse, mod_pow, random_range};
use rand_core::CryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public key `(p, α, y)` with `y = α^a mod p`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PublicKey {
    prime: SafePrime,
    alpha: Word,
    y: Word,
}

impl PublicKey {
    /// Check and assemble a public key.
    ///
    /// `p` must be a safe prime below 256, `α` must lie in `[2, q - 1]` and
    /// `y` in `[1, p - 1]`.
    pub fn new(p: Word, alpha: Word, y: Word) -> Result<Self> {
        let prime = SafePrime::new(p)?;
        if p > Word::from(u8::MAX) || !(2..prime.q()).contains(&alpha) || !(1..p).contains(&y) {
            return Err(Error::InvalidKey);
        }
        Ok(Self { prime, alpha, y })
    }

    /// Safe prime modulus `p`.
    pub fn p(&self) -> Word {
        self.prime.p()
    }

    /// `q = (p - 1) / 2`.
    pub fn q(&self) -> Word {
        self.prime.q()
    }

    /// Base `α`.
    pub fn alpha(&self) -> Word {
        self.alpha
    }

    /// `y = α^a mod p`.
    pub fn y(&self) -> Word {
        self.y
    }

    /// Computes `base^exp mod p`.
    pub(crate) fn pow(&self, base: Word, exp: Word) -> Word {
        mod_pow(base, exp, self.p())
    }
}

/// Text form `"p α y"`.
impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.p(), self.alpha, self.y)
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut fields = s.split_whitespace().map(str::parse::<Word>);
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(Ok(p)), Some(Ok(alpha)), Some(Ok(y)), None) => Self::new(p, alpha, y),
            _ => Err(Error::InvalidKey),
        }
    }
}

/// Private exponent `a` together with its public key.
///
/// `a` is odd, so it is invertible modulo `p - 1 = 2q` and the signer can
/// undo exponentiation by `a` on the whole group. The exponent is zeroized
/// on drop and never leaves this type.
#[derive(Clone)]
pub struct SigningKey {
    a: Word,
    a_inv: Word,
    public: PublicKey,
}

impl SigningKey {
    /// Generate a fresh safe prime and key pair.
    pub fn generate<R: CryptoRng + ?Sized>(
        rng: &mut R,
        params: &SafePrimeParams,
    ) -> Result<Self> {
        let prime = generate_safe_prime(rng, params)?;
        let (p, q) = (prime.p(), prime.q());

        let alpha = random_range(rng, 2..q).ok_or(Error::InvalidKey)?;
        // odd values in [1, q - 1]
        let a = 2 * random_range(rng, 0..(q - 1) / 2).ok_or(Error::InvalidKey)? + 1;
        let y = mod_pow(alpha, a, p);

        Self::with_public(a, PublicKey { prime, alpha, y })
    }

    /// Pair a private exponent with its public key.
    ///
    /// `a` must be odd, lie in `[1, q - 1]` and satisfy `y = α^a mod p`.
    pub fn new(a: Word, public: PublicKey) -> Result<Self> {
        let odd_in_range = a % 2 == 1 && (1..public.q()).contains(&a);
        if !odd_in_range || public.pow(public.alpha, a) != public.y {
            return Err(Error::InvalidKey);
        }
        Self::with_public(a, public)
    }

    fn with_public(a: Word, public: PublicKey) -> Result<Self> {
        let a_inv = mod_inverse(a, public.p() - 1).ok_or(Error::InvalidKey)?;
        Ok(Self { a, a_inv, public })
    }

    /// Public half of this key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Computes `value^a mod p`.
    pub(crate) fn exponentiate(&self, value: Word) -> Word {
        self.public.pow(value, self.a)
    }

    /// Computes `value^(a⁻¹ mod 2q) mod p`.
    pub(crate) fn unblind(&self, value: Word) -> Word {
        self.public.pow(value, self.a_inv)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.a.zeroize();
        self.a_inv.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::ToString};
    use modfield::gcd;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn generated_keys_are_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let key = SigningKey::generate(&mut rng, &SafePrimeParams::default()).unwrap();
            let public = *key.public_key();
            assert!([167, 179, 227].contains(&public.p()));
            assert!((2..public.q()).contains(&public.alpha()));
            assert_eq!(key.a % 2, 1);
            assert_eq!(gcd(key.a, public.p() - 1), 1);
            assert_eq!(public.pow(public.alpha(), key.a), public.y());
            assert!(SigningKey::new(key.a, public).is_ok());
        }
    }

    #[test]
    fn inconsistent_keys_rejected() {
        // 5^7 mod 167 = 136
        let public = PublicKey::new(167, 5, 136).unwrap();
        assert!(SigningKey::new(7, public).is_ok());
        assert!(SigningKey::new(9, public).is_err());
        assert!(SigningKey::new(8, public).is_err());
        assert!(SigningKey::new(0, public).is_err());

        assert_eq!(PublicKey::new(13, 5, 1), Err(Error::InvalidKey));
        assert_eq!(PublicKey::new(167, 1, 136), Err(Error::InvalidKey));
        assert_eq!(PublicKey::new(167, 83, 136), Err(Error::InvalidKey));
        assert_eq!(PublicKey::new(167, 5, 0), Err(Error::InvalidKey));
        // 263 = 2 * 131 + 1 is safe but too large
        assert_eq!(PublicKey::new(263, 5, 1), Err(Error::InvalidKey));
    }

    #[test]
    fn unblind_inverts_exponentiate() {
        let key = SigningKey::new(7, PublicKey::new(167, 5, 136).unwrap()).unwrap();
        for m in 0..167 {
            assert_eq!(key.unblind(key.exponentiate(m)), m);
        }
    }

    #[test]
    fn text_form() {
        let public = PublicKey::new(167, 5, 136).unwrap();
        assert_eq!(public.to_string(), "167 5 136");
        assert_eq!("167 5 136".parse(), Ok(public));
        assert_eq!("167 5".parse::<PublicKey>(), Err(Error::InvalidKey));
        assert_eq!("167 5 136 0".parse::<PublicKey>(), Err(Error::InvalidKey));
        assert_eq!("168 5 136".parse::<PublicKey>(), Err(Error::InvalidKey));
    }

    #[test]
    fn debug_hides_exponent() {
        let key = SigningKey::new(7, PublicKey::new(167, 5, 136).unwrap()).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.starts_with("SigningKey { public: PublicKey"));
        assert!(debug.ends_with(", .. }"));
    }
}
