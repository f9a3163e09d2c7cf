use std::collections::BTreeSet;

use super::*;

#[test]
fn total_pixel_count_is_product() {
    assert_eq!(total_pixel_count(10, 20).unwrap(), 200);
    assert_eq!(total_pixel_count(1, 1).unwrap(), 1);
    assert_eq!(
        total_pixel_count(u32::MAX, 2).unwrap(),
        u64::from(u32::MAX) * 2
    );
    assert!(matches!(
        total_pixel_count(0, 5),
        Err(MediaLabError::InvalidArgument(_))
    ));
}

#[test]
fn quantize_properties_hold_over_full_domain() {
    for bits in 1..=8u32 {
        let depth = BitDepth::new(bits).unwrap();
        let mut outputs = BTreeSet::new();
        let mut prev = 0u8;
        for value in 0..=255u8 {
            let q = quantize_channel(value, depth);
            assert_eq!(quantize_channel(q, depth), q, "idempotent at {value}/{bits}");
            assert!(q >= prev, "monotonic at {value}/{bits}");
            assert!(q <= value);
            prev = q;
            outputs.insert(q);
        }
        assert!(outputs.len() <= 1 << bits);
    }
}

#[test]
fn quantize_full_depth_is_identity() {
    for value in 0..=255u8 {
        assert_eq!(quantize_channel(value, BitDepth::FULL), value);
    }
}

#[test]
fn quantize_masks_low_bits() {
    assert_eq!(quantize_channel_bits(0b1011_0111, 3).unwrap(), 0b1010_0000);
    assert_eq!(quantize_channel_bits(255, 1).unwrap(), 128);
    assert_eq!(quantize_channel_bits(127, 1).unwrap(), 0);
    assert!(quantize_channel_bits(10, 0).is_err());
    assert!(quantize_channel_bits(10, 9).is_err());
}

#[test]
fn quantize_image_applies_per_channel() {
    let img = DecodedImage::from_rgb8(1, 1, vec![200, 100, 37]).unwrap();
    let q = quantize_image(&img, QuantizationSpec::new(2).unwrap());
    assert_eq!(q.as_rgb8(), &[192, 64, 0]);
}

#[test]
fn split_channels_zeroes_other_channels() {
    let img = DecodedImage::from_rgb8(2, 1, vec![10, 20, 30, 40, 50, 60]).unwrap();
    let (r, g, b) = split_channels(&img);
    assert_eq!(r.as_rgb8(), &[10, 0, 0, 40, 0, 0]);
    assert_eq!(g.as_rgb8(), &[0, 20, 0, 0, 50, 0]);
    assert_eq!(b.as_rgb8(), &[0, 0, 30, 0, 0, 60]);
    for ch in [&r, &g, &b] {
        assert_eq!(ch.dimensions(), img.dimensions());
    }
}

#[test]
fn total_bits_is_three_channels() {
    assert_eq!(total_bits_for_depth(8).unwrap(), 24);
    assert_eq!(total_bits_for_depth(5).unwrap(), 15);
    assert!(total_bits_for_depth(0).is_err());
}
