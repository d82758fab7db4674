#![no_main]
// Group law on curves built from fuzzer-chosen coefficients.
use libfuzzer_sys::fuzz_target;
use toycurve::{AffinePoint, CurveGroup, CurveParams};

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let word = |i: usize| u64::from(u16::from_le_bytes([data[i], data[i + 1]]));
    // keep enumeration cheap
    let p = word(0) % 1024;
    let Ok(params) = CurveParams::new(word(2), word(4), p) else {
        return;
    };
    let group = CurveGroup::new(params);
    let points = group.points();
    let pick = |i: usize| points[word(i) as usize % points.len()];
    let (p1, p2, p3) = (pick(6), pick(8), pick(10));
    let k = word(12) * word(14);

    // Test that addition is commutative and associative
    assert_eq!(p1 + p2, p2 + p1);
    assert_eq!((p1 + p2) + p3, p1 + (p2 + p3));

    // Test that addition and doubling are consistent
    assert_eq!(p1.double(), p1 + p1);

    // Test that negation works correctly
    assert_eq!(p1 + (-p1), AffinePoint::IDENTITY);

    // Test scalar multiplication distributive property
    assert_eq!(p1 * k + p2 * k, (p1 + p2) * k);
    assert_eq!(p1 * group.order(), AffinePoint::IDENTITY);

    // Sums never leave the group
    assert!(points.contains(&(p1 + p2)));
});
