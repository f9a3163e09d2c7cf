use super::*;

#[test]
fn unit_factors_are_identity() {
    let img = DecodedImage::from_rgb8(2, 1, vec![0, 90, 255, 12, 200, 77]).unwrap();
    assert_eq!(adjust_brightness(&img, 1.0).unwrap(), img);
    assert_eq!(adjust_contrast(&img, 1.0).unwrap(), img);
    assert_eq!(enhance(&img, 1.0, 1.0).unwrap(), img);
}

#[test]
fn brightness_scales_and_saturates() {
    let img = DecodedImage::from_rgb8(1, 1, vec![100, 200, 3]).unwrap();
    let out = adjust_brightness(&img, 1.5).unwrap();
    assert_eq!(out.as_rgb8(), &[150, 255, 4]);
    let dark = adjust_brightness(&img, 0.5).unwrap();
    assert_eq!(dark.as_rgb8(), &[50, 100, 1]);
}

#[test]
fn contrast_zero_collapses_to_mean_luma() {
    let img = DecodedImage::from_rgb8(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
    assert_eq!(mean_luma(&img), 128);
    let flat = adjust_contrast(&img, 0.0).unwrap();
    assert!(flat.pixels().all(|px| px == [128, 128, 128]));
}

#[test]
fn contrast_on_uniform_image_is_stable() {
    let img = DecodedImage::solid(4, 4, [60, 60, 60]).unwrap();
    assert_eq!(adjust_contrast(&img, 2.0).unwrap(), img);
}

#[test]
fn luma_weights_match_rec601() {
    assert_eq!(luma_u8([255, 255, 255]), 255);
    assert_eq!(luma_u8([0, 0, 0]), 0);
    assert_eq!(luma_u8([255, 0, 0]), 76);
    assert_eq!(luma_u8([0, 255, 0]), 150);
    assert_eq!(luma_u8([0, 0, 255]), 29);
}

#[test]
fn bad_factors_are_rejected() {
    let img = DecodedImage::solid(1, 1, [1, 2, 3]).unwrap();
    assert!(adjust_brightness(&img, -0.1).is_err());
    assert!(adjust_contrast(&img, f64::NAN).is_err());
}
