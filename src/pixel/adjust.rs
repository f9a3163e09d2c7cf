use crate::foundation::core::DecodedImage;
use crate::foundation::error::{MediaLabError, MediaLabResult};

/// Slider range the demo offers for both brightness and contrast.
pub const ENHANCE_FACTOR_RANGE: std::ops::RangeInclusive<f64> = 0.5..=2.0;

/// Scales every channel by `factor` (0 gives black, 1 leaves the image unchanged).
pub fn adjust_brightness(image: &DecodedImage, factor: f64) -> MediaLabResult<DecodedImage> {
    check_factor("brightness", factor)?;
    Ok(image.map_channels(|_, v| blend_u8(0.0, f64::from(v), factor)))
}

/// Pushes channels away from (factor > 1) or toward (factor < 1) the image's mean luma.
pub fn adjust_contrast(image: &DecodedImage, factor: f64) -> MediaLabResult<DecodedImage> {
    check_factor("contrast", factor)?;
    let mean = f64::from(mean_luma(image));
    Ok(image.map_channels(|_, v| blend_u8(mean, f64::from(v), factor)))
}

/// Brightness first, then contrast, as the demo applies its two sliders.
pub fn enhance(
    image: &DecodedImage,
    brightness: f64,
    contrast: f64,
) -> MediaLabResult<DecodedImage> {
    let bright = adjust_brightness(image, brightness)?;
    adjust_contrast(&bright, contrast)
}

/// ITU-R 601 luma in Q16 fixed point, rounded.
pub fn luma_u8(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((r * 19_595 + g * 38_470 + b * 7_471 + 0x8000) >> 16) as u8
}

/// Average luma over all pixels, rounded half up.
pub fn mean_luma(image: &DecodedImage) -> u8 {
    let sum: u64 = image.pixels().map(|px| u64::from(luma_u8(px))).sum();
    let n = u64::from(image.width()) * u64::from(image.height());
    ((sum as f64) / (n as f64) + 0.5).floor().min(255.0) as u8
}

fn blend_u8(base: f64, v: f64, factor: f64) -> u8 {
    (base + factor * (v - base)).trunc().clamp(0.0, 255.0) as u8
}

fn check_factor(what: &str, factor: f64) -> MediaLabResult<()> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(MediaLabError::invalid_argument(format!(
            "{what} factor must be finite and >= 0, got {factor}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/adjust.rs"]
mod tests;
