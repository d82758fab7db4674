//! Permutation cipher tests.

use ecrsa::{Cipher, DEFAULT_SEED, Direction, Error, KeyPair, PixelFormat, SymbolEncoder};
use proptest::{prelude::any, prop_compose, proptest};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use std::sync::LazyLock;
use toycurve::{CurveGroup, CurveParams, ECRSA_CURVE};

static GROUP: LazyLock<CurveGroup> = LazyLock::new(|| CurveGroup::new(ECRSA_CURVE));

static CIPHER: LazyLock<Cipher> =
    LazyLock::new(|| Cipher::new(SymbolEncoder::from_seed(&GROUP, DEFAULT_SEED).unwrap()));

prop_compose! {
    fn key_pair()(seed in any::<u64>()) -> KeyPair {
        KeyPair::generate(&mut ChaCha8Rng::seed_from_u64(seed), GROUP.order()).unwrap()
    }
}

#[test]
fn encoder_is_a_bijection() {
    let encoder = CIPHER.encoder();
    assert_eq!(encoder.points().len(), 256);
    for x in 0..=u8::MAX {
        assert_eq!(encoder.decode(&encoder.encode(x)), Some(x));
    }
    // the table covers the whole group, so every point decodes
    for point in GROUP.points() {
        assert!(encoder.decode(point).is_some(), "{point}");
    }
}

#[test]
fn encrypt_42_with_e_5() {
    let key = KeyPair::new(5, 205, GROUP.order()).unwrap();
    let c = CIPHER.encrypt(&key, 42).unwrap();
    assert_eq!(CIPHER.decrypt(&key, c), Ok(42));
}

#[test]
fn e_5_fixes_exactly_four_bytes() {
    // The group is cyclic of order 256 and 5P = P iff 4P = O.
    let key = KeyPair::new(5, 205, GROUP.order()).unwrap();
    let table = CIPHER.substitution_table(&key, Direction::Encrypt).unwrap();
    let fixed = (0..=u8::MAX)
        .filter(|&x| table[usize::from(x)] == x)
        .count();
    assert_eq!(fixed, 4);
}

#[test]
fn larger_groups_round_trip() {
    // orders 259, 260 and 303
    for (a, b, p) in [(1, 3, 277), (1, 1, 263), (2, 1, 271)] {
        let group = CurveGroup::new(CurveParams::new(a, b, p).unwrap());
        let cipher = Cipher::new(SymbolEncoder::from_seed(&group, DEFAULT_SEED).unwrap());
        let mut rng = ChaCha8Rng::seed_from_u64(p);

        for _ in 0..10 {
            let key = KeyPair::generate(&mut rng, group.order()).unwrap();
            for x in 0..=u8::MAX {
                let c = cipher.encrypt(&key, x).unwrap();
                assert_eq!(cipher.decrypt(&key, c), Ok(x), "key {key}, byte {x}");
            }
        }
    }
}

#[test]
fn pixels_keep_alpha() {
    let key = KeyPair::new(5, 205, GROUP.order()).unwrap();
    let original: Vec<u8> = (0..=u8::MAX).collect();
    let mut pixels = original.clone();

    CIPHER
        .encrypt_pixels(&key, PixelFormat::Rgba, &mut pixels)
        .unwrap();
    for (before, after) in original.chunks_exact(4).zip(pixels.chunks_exact(4)) {
        assert_eq!(before[3], after[3]);
        for (b, a) in before[..3].iter().zip(&after[..3]) {
            assert_eq!(CIPHER.encrypt(&key, *b), Ok(*a));
        }
    }

    CIPHER
        .decrypt_pixels(&key, PixelFormat::Rgba, &mut pixels)
        .unwrap();
    assert_eq!(pixels, original);
}

#[test]
fn pixels_without_alpha_are_fully_encrypted() {
    let key = KeyPair::new(5, 205, GROUP.order()).unwrap();
    let mut gray: Vec<u8> = (0..=u8::MAX).collect();
    let mut bytes = gray.clone();

    CIPHER
        .encrypt_pixels(&key, PixelFormat::Gray, &mut gray)
        .unwrap();
    CIPHER.encrypt_in_place(&key, &mut bytes).unwrap();
    assert_eq!(gray, bytes);
}

#[test]
fn ragged_pixel_buffer() {
    let key = KeyPair::new(5, 205, GROUP.order()).unwrap();
    let mut pixels = [0u8; 7];
    assert_eq!(
        CIPHER.encrypt_pixels(&key, PixelFormat::Rgb, &mut pixels),
        Err(Error::PixelBufferLength {
            len: 7,
            channels: 3
        })
    );
    assert_eq!(pixels, [0u8; 7]);
}

#[test]
fn cipher_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cipher>();
    assert_send_sync::<CurveGroup>();
}

proptest! {
    #[test]
    fn round_trip(key in key_pair(), x in any::<u8>()) {
        let c = CIPHER.encrypt(&key, x).unwrap();
        assert_eq!(CIPHER.decrypt(&key, c), Ok(x));
    }

    #[test]
    fn tables_are_inverse_permutations(key in key_pair()) {
        let forward = CIPHER.substitution_table(&key, Direction::Encrypt).unwrap();
        let backward = CIPHER.substitution_table(&key, Direction::Decrypt).unwrap();
        for x in 0..=u8::MAX {
            assert_eq!(backward[usize::from(forward[usize::from(x)])], x);
        }
    }

    #[test]
    fn any_seed_gives_a_bijection(seed in any::<[u8; 32]>()) {
        let encoder = SymbolEncoder::from_seed(&GROUP, seed).unwrap();
        for x in 0..=u8::MAX {
            assert_eq!(encoder.decode(&encoder.encode(x)), Some(x));
        }
    }
}
