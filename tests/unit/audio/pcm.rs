use super::*;

#[test]
fn halving_rate_keeps_even_samples() {
    let src: Vec<f32> = (0..10).map(|i| i as f32).collect();
    let out = reduce_sample_rate(&src, 44_100, 22_050).unwrap();
    assert_eq!(out, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    assert_eq!(reduce_sample_rate(&src, 8_000, 8_000).unwrap(), src);
}

#[test]
fn rate_reduction_rejects_upsampling_and_zero() {
    assert!(reduce_sample_rate(&[0.0], 8_000, 16_000).is_err());
    assert!(reduce_sample_rate(&[0.0], 0, 0).is_err());
}

#[test]
fn one_bit_quantization_has_two_levels() {
    let out = quantize_samples(&[-1.0, -0.6, -0.2, 0.2, 0.9, 1.0], 1).unwrap();
    for s in &out {
        assert!(*s == -1.0 || *s == 0.0);
    }
    assert_eq!(out[0], -1.0);
    assert_eq!(out[5], 0.0);
}

#[test]
fn quantization_is_idempotent_and_bounded() {
    let src: Vec<f32> = (-100..=100).map(|i| i as f32 / 100.0).collect();
    for bits in 1..=MAX_SAMPLE_BITS {
        let once = quantize_samples(&src, bits).unwrap();
        assert_eq!(quantize_samples(&once, bits).unwrap(), once);
        assert!(once.iter().all(|s| (-1.0..=1.0).contains(s)));
        let distinct: std::collections::BTreeSet<i64> =
            once.iter().map(|s| (s * 65536.0) as i64).collect();
        assert!(distinct.len() <= 1 << bits);
    }
    assert!(quantize_samples(&src, 0).is_err());
    assert!(quantize_samples(&src, 17).is_err());
}

#[test]
fn pcm_size_matches_cd_audio() {
    // One second of 44.1 kHz 16-bit stereo is 176400 bytes.
    assert_eq!(estimate_pcm_size_kb(44_100, 16, 2, 1.0).unwrap(), 172.27);
    assert_eq!(estimate_pcm_size_kb(8_000, 8, 1, 0.0).unwrap(), 0.0);
    assert!(estimate_pcm_size_kb(0, 16, 2, 1.0).is_err());
    assert!(estimate_pcm_size_kb(44_100, 16, 2, f64::INFINITY).is_err());
}
