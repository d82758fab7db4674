#![no_main]
// Signing and verification on arbitrary content and arbitrary artifacts.
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use undeniable::{Error, MARKER, PublicKey, SafePrimeParams, SigningKey, verify};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    let mut rng = ChaCha8Rng::from_seed(data[0..32].try_into().unwrap());
    let key = SigningKey::generate(&mut rng, &SafePrimeParams::default()).unwrap();
    let content = &data[32..];

    match key.sign(content) {
        Ok(signed) => {
            let verified = verify(&signed, key.public_key(), &key, &mut rng).unwrap();
            assert_eq!(verified.content(), content);
        }
        Err(err) => {
            assert_eq!(err, Error::AlreadySigned);
            assert!(content.windows(MARKER.len()).any(|w| w == MARKER));
        }
    }

    // Arbitrary artifacts are rejected or confirmed, never a panic
    let _ = verify(content, key.public_key(), &key, &mut rng);

    if let Ok(text) = std::str::from_utf8(content) {
        let _ = text.parse::<PublicKey>();
    }
});
