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

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arith;
mod error;
mod field;
mod primes;
mod random;
#[cfg(feature = "alloc")]
mod sqrt;

pub use crate::{
    arith::{gcd, mod_inverse, mod_mul, mod_pow},
    error::{Error, Result},
    field::{FieldElement, PrimeField},
    primes::{is_prime, random_prime},
    random::random_range,
};
pub use rand_core;

#[cfg(feature = "alloc")]
pub use crate::sqrt::{Roots, SquareRootTable};

/// Machine word used for field elements and moduli.
pub type Word = u64;

/// Double-width word used for intermediate products.
pub(crate) type WideWord = u128;
