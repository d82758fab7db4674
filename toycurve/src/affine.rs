//! Affine curve points.

use crate::{CurveParams, Error, Result, Word, point_arithmetic};
use core::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Finite points carry the [`CurveParams`] of the curve they lie on, so
/// points from different curves never compare equal. The point at infinity
/// is shared by every curve.
///
/// Points are ordered by curve, then `x`, then `y`, with the point at
/// infinity last.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct AffinePoint(Repr);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
enum Repr {
    Finite {
        curve: CurveParams,
        x: Word,
        y: Word,
    },
    Identity,
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self(Repr::Identity);

    /// Finite point whose coordinates are already known to satisfy the curve
    /// equation.
    pub(crate) const fn new_unchecked(curve: CurveParams, x: Word, y: Word) -> Self {
        Self(Repr::Finite { curve, x, y })
    }

    /// Is this point the point at infinity?
    pub const fn is_identity(&self) -> bool {
        matches!(self.0, Repr::Identity)
    }

    /// Affine x-coordinate, or `None` for the point at infinity.
    pub const fn x(&self) -> Option<Word> {
        match self.0 {
            Repr::Finite { x, .. } => Some(x),
            Repr::Identity => None,
        }
    }

    /// Affine y-coordinate, or `None` for the point at infinity.
    pub const fn y(&self) -> Option<Word> {
        match self.0 {
            Repr::Finite { y, .. } => Some(y),
            Repr::Identity => None,
        }
    }

    /// Both affine coordinates, or `None` for the point at infinity.
    pub const fn coordinates(&self) -> Option<(Word, Word)> {
        match self.0 {
            Repr::Finite { x, y, .. } => Some((x, y)),
            Repr::Identity => None,
        }
    }

    /// Curve this point lies on, or `None` for the point at infinity.
    pub const fn curve(&self) -> Option<CurveParams> {
        match self.0 {
            Repr::Finite { curve, .. } => Some(curve),
            Repr::Identity => None,
        }
    }

    /// Returns `self + other`, or an error if the points lie on different
    /// curves.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        match (self.0, other.0) {
            (Repr::Identity, _) => Ok(*other),
            (_, Repr::Identity) => Ok(*self),
            (Repr::Finite { curve: c1, .. }, Repr::Finite { curve: c2, .. }) if c1 != c2 => {
                Err(Error::CurveMismatch)
            }
            (
                Repr::Finite {
                    curve,
                    x: x1,
                    y: y1,
                },
                Repr::Finite { x: x2, y: y2, .. },
            ) => Ok(point_arithmetic::add(&curve, (x1, y1), (x2, y2))),
        }
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        match self.0 {
            Repr::Finite { curve, x, y } => point_arithmetic::double(&curve, (x, y)),
            Repr::Identity => Self::IDENTITY,
        }
    }

    /// Returns `[k] self`.
    pub fn scalar_mul(&self, k: Word) -> Self {
        point_arithmetic::mul(self, k)
    }

    /// Returns `[k] self` for a signed scalar; negative scalars multiply the
    /// negated point.
    pub fn scalar_mul_signed(&self, k: i64) -> Self {
        if k < 0 {
            (-*self).scalar_mul(k.unsigned_abs())
        } else {
            self.scalar_mul(k.unsigned_abs())
        }
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Finite { x, y, .. } => write!(f, "({x}, {y})"),
            Repr::Identity => f.write_str("infinity"),
        }
    }
}

//
// Arithmetic trait impls
//

/// # Panics
///
/// If the operands lie on different curves. Use
/// [`AffinePoint::checked_add`] to handle that case.
impl Add for AffinePoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match self.checked_add(&other) {
            Ok(sum) => sum,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Add<&AffinePoint> for AffinePoint {
    type Output = Self;

    fn add(self, other: &AffinePoint) -> Self {
        self + *other
    }
}

impl AddAssign for AffinePoint {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for AffinePoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl SubAssign for AffinePoint {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for AffinePoint {
    type Output = Self;

    fn neg(self) -> Self {
        match self.0 {
            Repr::Finite { curve, x, y } => {
                let y = -curve.field().element(y);
                Self::new_unchecked(curve, x, y.value())
            }
            Repr::Identity => self,
        }
    }
}

impl Mul<Word> for AffinePoint {
    type Output = Self;

    fn mul(self, k: Word) -> Self {
        self.scalar_mul(k)
    }
}

impl MulAssign<Word> for AffinePoint {
    fn mul_assign(&mut self, k: Word) {
        *self = self.scalar_mul(k);
    }
}

impl Sum for AffinePoint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::IDENTITY, Add::add)
    }
}

impl<'a> Sum<&'a AffinePoint> for AffinePoint {
    fn sum<I: Iterator<Item = &'a AffinePoint>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ECRSA_CURVE;
    use alloc::string::ToString;

    #[test]
    fn identity_is_neutral() {
        let p = ECRSA_CURVE.point(0, 1).unwrap();
        assert_eq!(p + AffinePoint::IDENTITY, p);
        assert_eq!(AffinePoint::IDENTITY + p, p);
        assert!(AffinePoint::default().is_identity());
        assert_eq!(AffinePoint::IDENTITY.coordinates(), None);
    }

    #[test]
    fn negation() {
        let p = ECRSA_CURVE.point(0, 1).unwrap();
        assert_eq!((-p).coordinates(), Some((0, 276)));
        assert_eq!(p - p, AffinePoint::IDENTITY);
        assert_eq!(-AffinePoint::IDENTITY, AffinePoint::IDENTITY);
    }

    #[test]
    fn signed_scalars() {
        let p = ECRSA_CURVE.point(0, 1).unwrap();
        assert_eq!(p.scalar_mul_signed(-3), -(p * 3));
        assert_eq!(p.scalar_mul_signed(0), AffinePoint::IDENTITY);
        assert_eq!(p.scalar_mul_signed(i64::MIN), -(p * (1 << 63)));
    }

    #[test]
    fn different_curves_do_not_mix() {
        let other = CurveParams::new(2, 3, 97).unwrap();
        // 3^3 + 2*3 + 3 = 36 = 6^2
        let q = other.point(3, 6).unwrap();
        let p = ECRSA_CURVE.point(0, 1).unwrap();
        assert_ne!(p, q);
        assert_eq!(p.checked_add(&q), Err(Error::CurveMismatch));
        assert_eq!(q.checked_add(&AffinePoint::IDENTITY), Ok(q));
    }

    #[test]
    #[should_panic(expected = "points belong to different curves")]
    fn add_operator_panics_on_mismatch() {
        let q = CurveParams::new(2, 3, 97).unwrap().point(3, 6).unwrap();
        let p = ECRSA_CURVE.point(0, 1).unwrap();
        let _ = p + q;
    }

    #[test]
    fn sum_and_display() {
        let p = ECRSA_CURVE.point(0, 1).unwrap();
        let total: AffinePoint = [p, p, p].iter().sum();
        assert_eq!(total, p * 3);
        assert_eq!(p.to_string(), "(0, 1)");
        assert_eq!(AffinePoint::IDENTITY.to_string(), "infinity");
    }
}
