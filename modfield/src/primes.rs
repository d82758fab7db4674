//! Primality testing and random prime selection.

use crate::{Word, mod_mul, mod_pow, random::random_range};
use core::ops::Range;
use rand_core::RngCore;

/// Small primes used for trial division before Miller-Rabin.
const SMALL_PRIMES: [Word; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Miller-Rabin witnesses which are deterministic for all `n < 2^32`.
const WITNESSES_32: [Word; 3] = [2, 7, 61];

/// Miller-Rabin witnesses which are deterministic for all `n < 2^64`.
const WITNESSES_64: [Word; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

/// Deterministic primality test for any 64-bit integer.
pub fn is_prime(n: Word) -> bool {
    if n < 2 {
        return false;
    }

    for p in SMALL_PRIMES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }

    let d = (n - 1) >> (n - 1).trailing_zeros();
    let r = (n - 1).trailing_zeros();

    let witnesses: &[Word] = if n < 1 << 32 {
        &WITNESSES_32
    } else {
        &WITNESSES_64
    };

    witnesses
        .iter()
        .map(|&a| a % n)
        .filter(|&a| a != 0)
        .all(|a| miller_rabin_witness(n, a, d, r))
}

/// Returns `true` if `a` does not prove `n = 2^r * d + 1` composite.
fn miller_rabin_witness(n: Word, a: Word, d: Word, r: u32) -> bool {
    let mut x = mod_pow(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }

    for _ in 1..r {
        x = mod_mul(x, x, n);
        if x == n - 1 {
            return true;
        }
        if x == 1 {
            return false;
        }
    }

    false
}

/// Picks a random prime in `range`.
///
/// A uniformly random starting point is drawn from the range and the range is
/// scanned upwards from it, wrapping around once, so every prime in the range
/// can be returned. Returns `None` if the range contains no prime.
pub fn random_prime<R: RngCore + ?Sized>(rng: &mut R, range: Range<Word>) -> Option<Word> {
    let start = random_range(rng, range.clone())?;
    (start..range.end)
        .chain(range.start..start)
        .find(|&n| is_prime(n))
}
