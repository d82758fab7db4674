//! Integer arithmetic modulo an arbitrary modulus.
//!
//! Unlike [`PrimeField`][`crate::PrimeField`], nothing here requires the modulus
//! to be prime. Key generation needs inverses modulo a curve group order or
//! modulo `p - 1`, neither of which is prime in general.

use crate::{WideWord, Word};

/// Greatest common divisor of `a` and `b`.
pub const fn gcd(mut a: Word, mut b: Word) -> Word {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Computes `a * b mod modulus` without overflow.
///
/// # Panics
///
/// If `modulus` is zero.
#[inline]
pub const fn mod_mul(a: Word, b: Word, modulus: Word) -> Word {
    ((a as WideWord * b as WideWord) % modulus as WideWord) as Word
}

/// Computes `base^exp mod modulus` by left-to-right square-and-multiply.
///
/// Returns `0` when `modulus == 1`.
///
/// # Panics
///
/// If `modulus` is zero.
pub const fn mod_pow(base: Word, exp: Word, modulus: Word) -> Word {
    if modulus == 1 {
        return 0;
    }

    let base = base % modulus;
    let mut acc = 1;
    let mut i = Word::BITS - exp.leading_zeros();

    while i > 0 {
        i -= 1;
        acc = mod_mul(acc, acc, modulus);
        if (exp >> i) & 1 == 1 {
            acc = mod_mul(acc, base, modulus);
        }
    }

    acc
}

/// Computes the inverse of `a` modulo `modulus` with the extended Euclidean
/// algorithm.
///
/// Returns `None` if `gcd(a, modulus) != 1` or `modulus < 2`.
pub const fn mod_inverse(a: Word, modulus: Word) -> Option<Word> {
    if modulus < 2 {
        return None;
    }

    // Bezout coefficients fit in i128 since |s| <= modulus.
    let (mut old_r, mut r) = ((a % modulus) as i128, modulus as i128);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    if old_r != 1 {
        return None;
    }

    Some(old_s.rem_euclid(modulus as i128) as Word)
}
