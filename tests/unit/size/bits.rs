use super::*;

#[test]
fn bits_needed_inverts_powers_of_two() {
    for exp in 1..=10u32 {
        let c = 1u64 << exp;
        let b = bits_needed(c).unwrap();
        assert_eq!(2u64.pow(b), c);
    }
    assert_eq!(bits_needed(256).unwrap(), 8);
    assert_eq!(bits_needed(1).unwrap(), 0);
    assert_eq!(bits_needed(1 << 63).unwrap(), 63);
}

#[test]
fn bits_needed_rejects_other_counts() {
    for c in [0u64, 3, 6, 100, 255, 1000] {
        assert!(
            matches!(bits_needed(c), Err(MediaLabError::InvalidArgument(_))),
            "{c} accepted"
        );
    }
}

#[test]
fn round2_keeps_two_decimals() {
    assert_eq!(round2(37.5), 37.5);
    assert_eq!(round2(2.441_406_25), 2.44);
    assert_eq!(round2(-0.004), -0.0);
    assert_eq!(round2(1.006), 1.01);
}
