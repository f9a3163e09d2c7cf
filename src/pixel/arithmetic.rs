use crate::foundation::core::{BitDepth, Channel, DecodedImage, QuantizationSpec};
use crate::foundation::error::{MediaLabError, MediaLabResult};

/// `width * height`. Zero dimensions are a caller bug and are rejected.
pub fn total_pixel_count(width: u32, height: u32) -> MediaLabResult<u64> {
    if width == 0 || height == 0 {
        return Err(MediaLabError::invalid_argument(format!(
            "pixel count needs positive dimensions, got {width}x{height}"
        )));
    }
    Ok(u64::from(width) * u64::from(height))
}

/// Splits an image into three single-channel views of the same size.
///
/// Each returned image keeps one channel's intensities and zeroes the other two, which is the
/// form a viewer shows when it recomposes a lone channel as RGB.
pub fn split_channels(image: &DecodedImage) -> (DecodedImage, DecodedImage, DecodedImage) {
    let keep = |only: Channel| image.map_channels(|c, v| if c == only { v } else { 0 });
    (keep(Channel::Red), keep(Channel::Green), keep(Channel::Blue))
}

/// Clears the low `8 - bits` bits of an 8-bit channel value.
pub fn quantize_channel(value: u8, bits: BitDepth) -> u8 {
    let shift = bits.dropped_bits();
    (value >> shift) << shift
}

/// [`quantize_channel`] for a raw bit count; out-of-range counts are rejected, never clamped.
pub fn quantize_channel_bits(value: u8, bits: u32) -> MediaLabResult<u8> {
    Ok(quantize_channel(value, BitDepth::new(bits)?))
}

/// Applies [`quantize_channel`] independently to R, G and B of every pixel.
pub fn quantize_image(image: &DecodedImage, spec: QuantizationSpec) -> DecodedImage {
    image.map_channels(|_, v| quantize_channel(v, spec.channel_bits))
}

/// Bits per pixel for an RGB image at `channel_bits` per channel.
pub fn total_bits_for_depth(channel_bits: u32) -> MediaLabResult<u32> {
    Ok(BitDepth::new(channel_bits)?.bits() * 3)
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/arithmetic.rs"]
mod tests;
