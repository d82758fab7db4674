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

mod cipher;
#[cfg(feature = "precomputed-tables")]
mod default_table;
mod encoding;
mod error;
mod keys;
mod pixels;

pub use crate::{
    cipher::{Cipher, Direction},
    encoding::{DEFAULT_SEED, SYMBOLS, SymbolEncoder},
    error::{Error, Result},
    keys::KeyPair,
    pixels::PixelFormat,
};
pub use rand_core;
pub use toycurve;

#[cfg(feature = "precomputed-tables")]
pub use crate::default_table::default_cipher;
