//! The group of points on a small curve.

use crate::{AffinePoint, CurveParams, Result, Word};
use alloc::vec::Vec;
use modfield::SquareRootTable;

/// Every point of a curve over a small prime field, materialised once.
///
/// Points are listed by ascending `x`, then ascending `y`, with the point at
/// infinity last. The list never changes after construction, so a group can
/// be shared freely between threads.
#[derive(Clone, Debug)]
pub struct CurveGroup {
    params: CurveParams,
    roots: SquareRootTable,
    points: Vec<AffinePoint>,
}

impl CurveGroup {
    /// Enumerate the points of the curve given by `params`.
    ///
    /// Costs `O(p)` time and memory.
    pub fn new(params: CurveParams) -> Self {
        let roots = SquareRootTable::new(params.field());
        let points = enumerate_with(&params, &roots);
        Self {
            params,
            roots,
            points,
        }
    }

    /// Curve parameters.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Number of points in the group, including the point at infinity.
    pub fn order(&self) -> Word {
        self.points.len() as Word
    }

    /// All points in enumeration order.
    pub fn points(&self) -> &[AffinePoint] {
        &self.points
    }

    /// Enumerate the points again from scratch.
    ///
    /// Yields the same sequence as [`CurveGroup::points`].
    pub fn enumerate(&self) -> Vec<AffinePoint> {
        enumerate_with(&self.params, &self.roots)
    }

    /// Finite point with the given coordinates.
    pub fn point(&self, x: Word, y: Word) -> Result<AffinePoint> {
        self.params.point(x, y)
    }

    /// Is `point` an element of this group?
    pub fn contains(&self, point: &AffinePoint) -> bool {
        match point.curve() {
            Some(curve) => curve == self.params,
            None => true,
        }
    }
}

fn enumerate_with(params: &CurveParams, roots: &SquareRootTable) -> Vec<AffinePoint> {
    let field = params.field();
    let mut points = Vec::with_capacity(field.modulus() as usize + 1);

    for x in field.elements() {
        for y in roots.roots(params.rhs(x)) {
            points.push(AffinePoint::new_unchecked(*params, x.value(), y.value()));
        }
    }

    points.push(AffinePoint::IDENTITY);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ECRSA_CURVE;

    #[test]
    fn small_curve() {
        // y^2 = x^3 + x + 6 over GF(11)
        let group = CurveGroup::new(CurveParams::new(1, 6, 11).unwrap());
        assert_eq!(group.order(), 13);
        assert_eq!(group.points()[0].coordinates(), Some((2, 4)));
        assert_eq!(group.points()[1].coordinates(), Some((2, 7)));
        assert!(group.points()[12].is_identity());
    }

    #[test]
    fn contains_checks_curve() {
        let group = CurveGroup::new(ECRSA_CURVE);
        let other = CurveParams::new(2, 3, 97).unwrap().point(3, 6).unwrap();
        assert!(group.contains(&group.points()[7]));
        assert!(group.contains(&AffinePoint::IDENTITY));
        assert!(!group.contains(&other));
    }
}
