use super::*;

#[test]
fn decoded_image_rejects_zero_dimensions_and_bad_lengths() {
    assert!(matches!(
        DecodedImage::from_rgb8(0, 4, vec![]),
        Err(MediaLabError::InvalidArgument(_))
    ));
    assert!(matches!(
        DecodedImage::from_rgb8(2, 2, vec![0; 11]),
        Err(MediaLabError::InvalidArgument(_))
    ));
    let img = DecodedImage::from_rgb8(2, 2, vec![0; 12]).unwrap();
    assert_eq!(img.dimensions(), (2, 2));
}

#[test]
fn pixel_lookup_is_row_major() {
    let img = DecodedImage::from_rgb8(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(img.pixel(0, 0), Some([1, 2, 3]));
    assert_eq!(img.pixel(1, 0), Some([4, 5, 6]));
    assert_eq!(img.pixel(2, 0), None);
    assert_eq!(img.pixels().count(), 2);
}

#[test]
fn rgb_image_conversion_keeps_bytes() {
    let img = DecodedImage::solid(3, 2, [9, 8, 7]).unwrap();
    let rgb = img.to_rgb_image();
    assert_eq!(rgb.dimensions(), (3, 2));
    assert_eq!(DecodedImage::from_rgb_image(rgb).unwrap(), img);
}

#[test]
fn decode_png_drops_alpha() {
    let src = image::RgbaImage::from_raw(1, 1, vec![100, 50, 200, 128]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(src)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let img = DecodedImage::decode(&buf).unwrap();
    assert_eq!(img.as_rgb8(), &[100, 50, 200]);
    assert!(matches!(
        DecodedImage::decode(b"not an image"),
        Err(MediaLabError::Decode(_))
    ));
}

#[test]
fn bit_depth_range_is_enforced() {
    assert!(BitDepth::new(0).is_err());
    assert!(BitDepth::new(9).is_err());
    let d = BitDepth::new(3).unwrap();
    assert_eq!(d.bits(), 3);
    assert_eq!(d.dropped_bits(), 5);
    assert_eq!(d.levels(), 8);
}

#[test]
fn bit_depth_deserialize_validates() {
    let ok: QuantizationSpec = serde_json::from_str(r#"{"channel_bits":5}"#).unwrap();
    assert_eq!(ok.channel_bits.bits(), 5);
    assert!(serde_json::from_str::<QuantizationSpec>(r#"{"channel_bits":12}"#).is_err());
}
