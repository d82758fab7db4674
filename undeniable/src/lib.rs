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

mod error;
mod keys;
mod params;
mod protocol;
mod sign;

pub use crate::{
    error::{Error, Result},
    keys::{PublicKey, SigningKey},
    params::{SafePrime, SafePrimeParams, generate_safe_prime},
    protocol::{Challenge, Confirm, PendingVerification, Response, VerifiedArtifact, verify},
    sign::{MARKER, SignedArtifact},
};
pub use rand_core;
