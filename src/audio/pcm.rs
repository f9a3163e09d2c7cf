use crate::foundation::error::{MediaLabError, MediaLabResult};
use crate::size::bits::round2;

pub const MAX_SAMPLE_BITS: u32 = 16;

/// Keeps every `from_rate / to_rate`-th sample (nearest, no anti-alias filter) so the
/// aliasing of a low sampling rate stays audible.
pub fn reduce_sample_rate(
    samples: &[f32],
    from_rate: u32,
    to_rate: u32,
) -> MediaLabResult<Vec<f32>> {
    if from_rate == 0 || to_rate == 0 {
        return Err(MediaLabError::invalid_argument(format!(
            "sample rates must be > 0, got {from_rate} -> {to_rate}"
        )));
    }
    if to_rate > from_rate {
        return Err(MediaLabError::invalid_argument(format!(
            "target rate {to_rate} Hz exceeds source rate {from_rate} Hz"
        )));
    }
    let (from, to) = (u64::from(from_rate), u64::from(to_rate));
    let out_len = samples.len() as u64 * to / from;
    Ok((0..out_len)
        .map(|i| samples[(i * from / to) as usize])
        .collect())
}

/// Snaps normalized samples onto a signed `bits`-bit integer grid and back to [-1, 1].
pub fn quantize_samples(samples: &[f32], bits: u32) -> MediaLabResult<Vec<f32>> {
    if !(1..=MAX_SAMPLE_BITS).contains(&bits) {
        return Err(MediaLabError::invalid_argument(format!(
            "sample bit depth must be in 1..={MAX_SAMPLE_BITS}, got {bits}"
        )));
    }
    let levels = (1u32 << (bits - 1)) as f32;
    Ok(samples
        .iter()
        .map(|&s| (s * levels).round().clamp(-levels, levels - 1.0) / levels)
        .collect())
}

/// Uncompressed PCM size: `rate * bits * channels * seconds / 8 / 1024`, to 2 decimals.
pub fn estimate_pcm_size_kb(
    sample_rate: u32,
    bits_per_sample: u32,
    channels: u16,
    seconds: f64,
) -> MediaLabResult<f64> {
    if sample_rate == 0 || bits_per_sample == 0 || channels == 0 {
        return Err(MediaLabError::invalid_argument(format!(
            "pcm size needs positive rate/bits/channels, got {sample_rate}/{bits_per_sample}/{channels}"
        )));
    }
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(MediaLabError::invalid_argument(format!(
            "duration must be finite and >= 0, got {seconds}"
        )));
    }
    let bits_per_sec =
        u64::from(sample_rate) * u64::from(bits_per_sample) * u64::from(channels);
    Ok(round2(bits_per_sec as f64 * seconds / 8.0 / 1024.0))
}

#[cfg(test)]
#[path = "../../tests/unit/audio/pcm.rs"]
mod tests;
