//! Process-wide cipher over the default curve.

#[cfg(not(any(feature = "critical-section", feature = "std")))]
compile_error!("`precomputed-tables` feature requires either `critical-section` or `std`");

use crate::{Cipher, DEFAULT_SEED, Result, SymbolEncoder};
use toycurve::{CurveGroup, ECRSA_CURVE};

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

/// Built on first use: the point enumeration of [`ECRSA_CURVE`] and the
/// encoding table seeded with [`DEFAULT_SEED`].
static DEFAULT_CIPHER: LazyLock<Result<Cipher>> = LazyLock::new(|| {
    let group = CurveGroup::new(ECRSA_CURVE);
    SymbolEncoder::from_seed(&group, DEFAULT_SEED).map(Cipher::new)
});

/// Cipher over [`ECRSA_CURVE`] with the encoding table seeded by
/// [`DEFAULT_SEED`].
///
/// The table is computed once per process and shared by every caller.
pub fn default_cipher() -> Result<&'static Cipher> {
    DEFAULT_CIPHER.as_ref().map_err(|err| *err)
}
