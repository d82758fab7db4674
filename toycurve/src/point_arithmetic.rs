//! Chord-and-tangent group law in affine coordinates.
//!
//! These routines take coordinates rather than [`AffinePoint`]s so that the
//! identity and curve-mismatch cases are settled by the caller.

use crate::{AffinePoint, CurveParams, Word};

/// Returns `(x1, y1) + (x2, y2)` for two finite points on `curve`.
pub(crate) fn add(
    curve: &CurveParams,
    (x1, y1): (Word, Word),
    (x2, y2): (Word, Word),
) -> AffinePoint {
    let field = curve.field();
    let (x1, y1, x2, y2) = (
        field.element(x1),
        field.element(y1),
        field.element(x2),
        field.element(y2),
    );

    let (num, den) = if x1 != x2 {
        // chord
        (y1 - y2, x1 - x2)
    } else if y1 == y2 {
        // tangent
        (field.element(3) * x1.square() + curve.equation_a(), y1.double())
    } else {
        // P + (-P)
        return AffinePoint::IDENTITY;
    };

    // A vertical tangent (y = 0) gives a point of order two.
    let Some(den_inv) = den.invert() else {
        return AffinePoint::IDENTITY;
    };
    let m = num * den_inv;

    let x3 = m.square() - x1 - x2;
    let y3 = m * (x1 - x3) - y1;
    AffinePoint::new_unchecked(*curve, x3.value(), y3.value())
}

/// Returns `(x, y) + (x, y)`.
pub(crate) fn double(curve: &CurveParams, point: (Word, Word)) -> AffinePoint {
    add(curve, point, point)
}

/// Returns `[k] point` using left-to-right double-and-add.
pub(crate) fn mul(point: &AffinePoint, k: Word) -> AffinePoint {
    let mut acc = AffinePoint::IDENTITY;
    if point.is_identity() {
        return acc;
    }

    let mut i = Word::BITS - k.leading_zeros();
    while i > 0 {
        i -= 1;
        acc = acc.double();
        if (k >> i) & 1 == 1 {
            acc += *point;
        }
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ECRSA_CURVE;

    #[test]
    fn add_small_multiples() {
        // (0, 1) on y^2 = x^3 + x + 1 over GF(277)
        let p = ECRSA_CURVE.point(0, 1).unwrap();
        let p2 = p.double();
        let p3 = p2 + p;
        assert!(ECRSA_CURVE.contains(p2.x().unwrap(), p2.y().unwrap()));
        assert!(ECRSA_CURVE.contains(p3.x().unwrap(), p3.y().unwrap()));
        assert_eq!(mul(&p, 2), p2);
        assert_eq!(mul(&p, 3), p3);
        assert_eq!(mul(&p, 1), p);
        assert_eq!(mul(&p, 0), AffinePoint::IDENTITY);
    }

    #[test]
    fn tangent_slope() {
        // m = (3*0 + 1) / 2 = 139, x3 = 139^2 = 208, y3 = 139 * (0 - 208) - 1
        let p2 = ECRSA_CURVE.point(0, 1).unwrap().double();
        assert_eq!(p2.coordinates(), Some((208, 172)));
    }

    #[test]
    fn mul_matches_repeated_add() {
        let p = ECRSA_CURVE.point(0, 1).unwrap();
        let mut acc = AffinePoint::IDENTITY;
        for k in 0..300 {
            assert_eq!(mul(&p, k), acc, "k = {k}");
            acc += p;
        }
    }
}
