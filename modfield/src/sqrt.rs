//! Precomputed square roots for brute-force point enumeration.

use crate::{FieldElement, PrimeField, Word};
use alloc::vec::Vec;

/// Square roots of every element of a small prime field.
///
/// Built once by squaring each element of the field, so construction costs
/// `O(p)` time and memory. Only the smaller root of each quadratic residue
/// is stored; the other one is its negation.
#[derive(Clone, Debug)]
pub struct SquareRootTable {
    field: PrimeField,
    smaller_root: Vec<Option<Word>>,
}

impl SquareRootTable {
    /// Tabulate `y^2` for every `y` in the field.
    pub fn new(field: PrimeField) -> Self {
        let mut smaller_root = alloc::vec![None; field.modulus() as usize];

        for y in field.elements() {
            let slot = &mut smaller_root[y.square().value() as usize];
            // Ascending iteration: the first root found is the smaller one.
            if slot.is_none() {
                *slot = Some(y.value());
            }
        }

        Self {
            field,
            smaller_root,
        }
    }

    /// Field this table was built for.
    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// Is `value` a square (including zero)?
    pub fn is_square(&self, value: FieldElement) -> bool {
        self.smaller_root[value.value() as usize].is_some()
    }

    /// All square roots of `value`, in ascending order.
    pub fn roots(&self, value: FieldElement) -> Roots {
        debug_assert_eq!(value.modulus(), self.field.modulus());

        match self.smaller_root[value.value() as usize] {
            None => Roots::default(),
            Some(0) => Roots {
                next: [Some(self.field.zero()), None],
                pos: 0,
            },
            Some(r) => {
                let r = self.field.element(r);
                Roots {
                    next: [Some(r), Some(-r)],
                    pos: 0,
                }
            }
        }
    }
}

/// Iterator over the (at most two) square roots of a field element.
#[derive(Clone, Copy, Debug, Default)]
pub struct Roots {
    next: [Option<FieldElement>; 2],
    pos: usize,
}

impl Iterator for Roots {
    type Item = FieldElement;

    fn next(&mut self) -> Option<FieldElement> {
        let item = self.next.get(self.pos).copied().flatten()?;
        self.pos += 1;
        Some(item)
    }
}
