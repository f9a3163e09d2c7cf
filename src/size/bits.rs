use crate::foundation::error::{MediaLabError, MediaLabResult};

/// Bits needed per pixel to tell `color_count` colors apart, for a power-of-two count.
///
/// Returns `b` with `2^b == color_count`. Any other count is rejected rather than rounded up, so
/// the identity always holds for a successful call.
pub fn bits_needed(color_count: u64) -> MediaLabResult<u32> {
    if !color_count.is_power_of_two() {
        return Err(MediaLabError::invalid_argument(format!(
            "color count must be a positive power of two, got {color_count}"
        )));
    }
    Ok(color_count.trailing_zeros())
}

/// Rounds to 2 decimal places, the precision every displayed size uses.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "../../tests/unit/size/bits.rs"]
mod tests;
