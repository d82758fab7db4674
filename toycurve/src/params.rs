//! Curve coefficients.

use crate::{AffinePoint, Error, Result, Word};
use core::fmt;
use modfield::{FieldElement, PrimeField};

/// Largest modulus accepted by [`CurveParams::new`].
///
/// Point enumeration walks the whole field, so the modulus has to stay small.
pub const MAX_MODULUS: Word = 1 << 24;

/// Coefficients of the short Weierstrass curve `y² = x³ + ax + b (mod p)`.
///
/// Two curves are the same curve iff their `(a, b, p)` are equal; points
/// carry a copy of these parameters to identify their curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct CurveParams {
    a: Word,
    b: Word,
    field: PrimeField,
}

impl CurveParams {
    /// Validate curve coefficients.
    ///
    /// Requires `a > 0`, `b > 0`, `p` a prime in `(3, MAX_MODULUS]` and a
    /// non-singular curve (`4a³ + 27b² ≢ 0 mod p`).
    pub fn new(a: Word, b: Word, p: Word) -> Result<Self> {
        if a == 0 || b == 0 {
            return Err(Error::InvalidCurveParameters(
                "coefficients must be positive",
            ));
        }
        if p <= 3 || p > MAX_MODULUS {
            return Err(Error::InvalidCurveParameters(
                "modulus out of supported range",
            ));
        }

        let field = PrimeField::new(p)
            .map_err(|_| Error::InvalidCurveParameters("modulus must be prime"))?;

        let (fa, fb) = (field.element(a), field.element(b));
        let discriminant = field.element(4) * fa.square() * fa + field.element(27) * fb.square();
        if discriminant.is_zero() {
            return Err(Error::InvalidCurveParameters("curve is singular"));
        }

        Ok(Self { a, b, field })
    }

    /// Construct without validation. Only for known-good constants.
    pub(crate) const fn from_raw(a: Word, b: Word, p: Word) -> Self {
        Self {
            a,
            b,
            field: PrimeField::new_unchecked(p),
        }
    }

    /// Coefficient `a`.
    pub const fn a(&self) -> Word {
        self.a
    }

    /// Coefficient `b`.
    pub const fn b(&self) -> Word {
        self.b
    }

    /// Field modulus `p`.
    pub const fn p(&self) -> Word {
        self.field.modulus()
    }

    /// Base field `GF(p)`.
    pub const fn field(&self) -> PrimeField {
        self.field
    }

    /// Coefficient `a` as a field element.
    pub(crate) fn equation_a(&self) -> FieldElement {
        self.field().element(self.a)
    }

    /// Evaluates `x³ + ax + b`.
    pub(crate) fn rhs(&self, x: FieldElement) -> FieldElement {
        let field = self.field();
        x.square() * x + field.element(self.a) * x + field.element(self.b)
    }

    /// Does `(x, y)` satisfy the curve equation?
    pub fn contains(&self, x: Word, y: Word) -> bool {
        if x >= self.p() || y >= self.p() {
            return false;
        }
        let field = self.field();
        field.element(y).square() == self.rhs(field.element(x))
    }

    /// Finite point with the given coordinates.
    ///
    /// Returns an error if `(x, y)` is not on this curve.
    pub fn point(&self, x: Word, y: Word) -> Result<AffinePoint> {
        if self.contains(x, y) {
            Ok(AffinePoint::new_unchecked(*self, x, y))
        } else {
            Err(Error::NotOnCurve { x, y })
        }
    }
}

impl fmt::Display for CurveParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y² = x³ + {}x + {} (mod {})", self.a, self.b, self.p())
    }
}
