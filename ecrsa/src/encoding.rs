//! Bijection between byte values and curve points.

use crate::{Error, Result};
use alloc::{collections::BTreeMap, vec::Vec};
use modfield::{Word, random_range};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use toycurve::{AffinePoint, CurveGroup};

/// Number of symbols in the encoding table: one per byte value.
pub const SYMBOLS: usize = 256;

/// Seed of the encoding table used by [`default_cipher`][`crate::default_cipher`].
pub const DEFAULT_SEED: [u8; 32] = *b"toy ecrsa symbol table seed v1\0\0";

/// Table assigning a distinct curve point to every byte value.
///
/// The table is the first [`SYMBOLS`] entries of a uniformly shuffled copy
/// of the group's point list, so a given group and RNG stream always produce
/// the same table.
#[derive(Clone, Debug)]
pub struct SymbolEncoder {
    points: Vec<AffinePoint>,
    index: BTreeMap<AffinePoint, u8>,
    group_order: Word,
}

impl SymbolEncoder {
    /// Build an encoding table for `group`, shuffling its points with `rng`.
    ///
    /// Returns [`Error::GroupTooSmall`] if the group has fewer than
    /// [`SYMBOLS`] points.
    pub fn new<R: RngCore + ?Sized>(group: &CurveGroup, rng: &mut R) -> Result<Self> {
        let order = group.order();
        if order < SYMBOLS as Word {
            return Err(Error::GroupTooSmall { order });
        }

        let mut points = group.points().to_vec();

        // Fisher-Yates
        for i in (1..points.len()).rev() {
            if let Some(j) = random_range(rng, 0..i as Word + 1) {
                points.swap(i, j as usize);
            }
        }
        points.truncate(SYMBOLS);

        let index = points
            .iter()
            .zip(0..=u8::MAX)
            .map(|(point, byte)| (*point, byte))
            .collect();

        Ok(Self {
            points,
            index,
            group_order: order,
        })
    }

    /// Build an encoding table for `group` from a 32-byte seed.
    pub fn from_seed(group: &CurveGroup, seed: [u8; 32]) -> Result<Self> {
        Self::new(group, &mut ChaCha8Rng::from_seed(seed))
    }

    /// Point assigned to `byte`.
    pub fn encode(&self, byte: u8) -> AffinePoint {
        self.points[usize::from(byte)]
    }

    /// Byte assigned to `point`, or `None` if the point is not in the table.
    pub fn decode(&self, point: &AffinePoint) -> Option<u8> {
        self.index.get(point).copied()
    }

    /// Order of the group the table was drawn from.
    pub fn group_order(&self) -> Word {
        self.group_order
    }

    /// Table entries indexed by byte value.
    pub fn points(&self) -> &[AffinePoint] {
        &self.points
    }
}
