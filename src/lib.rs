//! medialab is the computation core behind two teaching demos: PixelLab (how digital images
//! are stored) and WaveForge (how digital audio is stored).
//!
//! The presentation layer decodes an upload, calls into this crate and renders what comes back.
//! Every function here is a stateless, single-pass computation over caller-owned data:
//!
//! - **Pixels**: pixel counts, channel splitting, bit-depth quantization, brightness/contrast.
//! - **Resolution**: pixelation previews for a target grid or a display density (PPI).
//! - **Sizes**: bits needed for a palette, uncompressed size estimates, and a per-format
//!   encoded size comparison.
//! - **Quiz**: practice questions whose answers come from the same arithmetic, drawn with an
//!   injected random source.
//! - **Audio**: decode, downmix to mono and peak-normalize; sample-rate and bit-depth reduction.
//!
//! Precondition violations are reported as [`MediaLabError::InvalidArgument`] and are never
//! clamped away. A silent audio clip is the one condition callers are expected to surface to the
//! user ([`MediaLabError::EmptyOrSilentInput`]).
#![forbid(unsafe_code)]

mod audio;
mod foundation;
mod lab;
mod pixel;
mod quiz;
mod settings;
mod size;

pub use audio::normalize::{
    DecodedAudio, NormalizedAudio, decode_and_normalize, decode_audio, downmix_to_mono,
    normalize_peak, peak_amplitude,
};
pub use audio::pcm::{MAX_SAMPLE_BITS, estimate_pcm_size_kb, quantize_samples, reduce_sample_rate};
pub use foundation::core::{BitDepth, Channel, DecodedImage, QuantizationSpec};
pub use foundation::error::{MediaLabError, MediaLabResult};
pub use lab::{DepthPreview, PixelLabReport, ResolutionPreview, run_pixel_lab};
pub use pixel::adjust::{
    ENHANCE_FACTOR_RANGE, adjust_brightness, adjust_contrast, enhance, luma_u8, mean_luma,
};
pub use pixel::arithmetic::{
    quantize_channel, quantize_channel_bits, quantize_image, split_channels,
    total_bits_for_depth, total_pixel_count,
};
pub use pixel::resolution::{
    CM_PER_INCH, DEFAULT_DISPLAY_WIDTH_CM, DEFAULT_PPI_PRESETS, ppi_target_dimensions,
    simulate_display_resolution, simulate_ppi,
};
pub use quiz::{
    BITS_NEEDED_COLORS, DATA_SIZE_COLORS, DATA_SIZE_SIZES, PIXEL_COUNT_SIZES, Quiz, QuizItem,
    generate_quiz, generate_quiz_seeded,
};
pub use settings::LabSettings;
pub use size::bits::{bits_needed, round2};
pub use size::report::{
    BYTES_PER_KB, CompressionClass, FormatCharacteristics, FormatSizeEntry, FormatSizeReport,
    ImageFormat, encode_image, encoded_format_sizes, estimate_image_size_kb,
    format_characteristics, format_size_report,
};
