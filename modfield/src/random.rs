//! Uniform sampling of words from an RNG.

use crate::Word;
use core::ops::Range;
use rand_core::RngCore;

/// Draws a uniformly distributed value from `range` by rejection sampling.
///
/// Returns `None` if the range is empty.
pub fn random_range<R: RngCore + ?Sized>(rng: &mut R, range: Range<Word>) -> Option<Word> {
    if range.is_empty() {
        return None;
    }

    let span = range.end - range.start;
    // largest multiple of `span` that fits in a word
    let zone = Word::MAX - Word::MAX % span;

    loop {
        let v = rng.next_u64();
        if v < zone {
            return Some(range.start + v % span);
        }
    }
}
