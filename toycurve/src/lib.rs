#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod affine;
mod error;
mod group;
mod params;
mod point_arithmetic;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
    group::CurveGroup,
    params::{CurveParams, MAX_MODULUS},
};
pub use modfield::{self, Word};

/// Curve used by the EC-RSA permutation cipher: `y² = x³ + x + 1` over
/// `GF(277)`.
///
/// Its group has exactly 256 points (255 finite points and the point at
/// infinity), so the symbol table covers the whole group.
pub const ECRSA_CURVE: CurveParams = CurveParams::from_raw(1, 1, 277);
