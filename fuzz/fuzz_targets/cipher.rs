#![no_main]
// Cipher round trips with keys and buffers derived from fuzzer input.
use ecrsa::{KeyPair, PixelFormat, default_cipher};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }

    let cipher = default_cipher().unwrap();
    let order = cipher.encoder().group_order();
    let mut rng = ChaCha8Rng::from_seed(data[0..32].try_into().unwrap());
    let key = KeyPair::generate(&mut rng, order).unwrap();

    let format = match data[32] % 4 {
        0 => PixelFormat::Gray,
        1 => PixelFormat::GrayAlpha,
        2 => PixelFormat::Rgb,
        _ => PixelFormat::Rgba,
    };

    let original = &data[33..];
    let mut buffer = original.to_vec();
    match cipher.encrypt_pixels(&key, format, &mut buffer) {
        Ok(()) => {
            cipher.decrypt_pixels(&key, format, &mut buffer).unwrap();
            assert_eq!(buffer, original);
        }
        Err(_) => {
            assert_ne!(original.len() % format.channels(), 0);
            assert_eq!(buffer, original);
        }
    }

    // Arbitrary text never panics the key parser
    if let Ok(text) = std::str::from_utf8(original) {
        let _ = KeyPair::parse(text, order);
    }
});
