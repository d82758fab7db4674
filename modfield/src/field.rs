//! Prime field with a modulus chosen at runtime.

use crate::{Error, Result, Word, arith, is_prime};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// The field `GF(p)` for a word-sized prime `p`.
///
/// This is a small `Copy` handle; elements created through it carry the
/// modulus along with their value so they can be combined with the usual
/// arithmetic operators.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PrimeField {
    modulus: Word,
}

impl PrimeField {
    /// Create the field of integers modulo `modulus`.
    ///
    /// Returns an error if `modulus` is not prime.
    pub fn new(modulus: Word) -> Result<Self> {
        if modulus < 2 {
            return Err(Error::ModulusTooSmall(modulus));
        }
        if !is_prime(modulus) {
            return Err(Error::NotPrime(modulus));
        }
        Ok(Self { modulus })
    }

    /// Create a field without checking that `modulus` is prime.
    ///
    /// Intended for constants whose modulus is known to be prime.
    pub const fn new_unchecked(modulus: Word) -> Self {
        Self { modulus }
    }

    /// Field modulus.
    pub const fn modulus(&self) -> Word {
        self.modulus
    }

    /// Reduce `value` into the field.
    pub const fn element(&self, value: Word) -> FieldElement {
        FieldElement {
            value: value % self.modulus,
            modulus: self.modulus,
        }
    }

    /// Additive identity.
    pub const fn zero(&self) -> FieldElement {
        self.element(0)
    }

    /// Multiplicative identity.
    pub const fn one(&self) -> FieldElement {
        self.element(1)
    }

    /// Iterate over every element of the field in ascending order.
    pub fn elements(&self) -> impl Iterator<Item = FieldElement> + '_ {
        (0..self.modulus).map(|v| self.element(v))
    }
}

/// Element of a [`PrimeField`].
///
/// Arithmetic between elements of different fields is a logic error and
/// panics in debug builds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct FieldElement {
    value: Word,
    modulus: Word,
}

impl FieldElement {
    /// Canonical representative in `[0, p)`.
    pub const fn value(&self) -> Word {
        self.value
    }

    /// Modulus of the field this element belongs to.
    pub const fn modulus(&self) -> Word {
        self.modulus
    }

    /// Is this element zero?
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Returns `self^exp`.
    pub fn pow(&self, exp: Word) -> Self {
        self.with_value(arith::mod_pow(self.value, exp, self.modulus))
    }

    /// Multiplicative inverse, or `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        arith::mod_inverse(self.value, self.modulus).map(|v| self.with_value(v))
    }

    #[inline]
    const fn with_value(&self, value: Word) -> Self {
        Self {
            value,
            modulus: self.modulus,
        }
    }

    #[inline]
    fn check_field(&self, other: &Self) {
        debug_assert_eq!(
            self.modulus, other.modulus,
            "operands belong to different fields"
        );
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<FieldElement> for Word {
    fn from(fe: FieldElement) -> Word {
        fe.value
    }
}

//
// Arithmetic trait impls
//

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.check_field(&rhs);
        // Both operands are < p <= 2^64 - 59, so the sum cannot wrap twice.
        let (sum, carry) = self.value.overflowing_add(rhs.value);
        let value = if carry || sum >= self.modulus {
            sum.wrapping_sub(self.modulus)
        } else {
            sum
        };
        self.with_value(value)
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.check_field(&rhs);
        self.with_value(arith::mod_mul(self.value, rhs.value, self.modulus))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        if self.value == 0 {
            self
        } else {
            self.with_value(self.modulus - self.value)
        }
    }
}

impl AddAssign for FieldElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for FieldElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for FieldElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
