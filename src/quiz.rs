//! Practice questions with answers computed from the same arithmetic the demo displays.
//!
//! Parameters are drawn from fixed candidate tables with a caller-supplied random source, so a
//! given seed always yields the same quiz. Each item carries its parameters and its answer
//! together; the presentation layer formats them and never recomputes the answer.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::error::MediaLabResult;
use crate::pixel::arithmetic::total_pixel_count;
use crate::size::bits::bits_needed;
use crate::size::report::estimate_image_size_kb;

pub const PIXEL_COUNT_SIZES: [(u32, u32); 3] = [(10, 20), (12, 20), (15, 25)];
pub const BITS_NEEDED_COLORS: [u64; 4] = [16, 64, 256, 1024];
pub const DATA_SIZE_COLORS: [u64; 5] = [2, 4, 8, 16, 32];
pub const DATA_SIZE_SIZES: [(u32, u32); 3] = [(50, 50), (80, 80), (100, 60)];

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuizItem {
    /// Total pixels in a `width x height` image.
    PixelCount { width: u32, height: u32, answer: u64 },
    /// Bits per pixel needed for `color_count` colors.
    BitsNeeded { color_count: u64, answer: u32 },
    /// Kilobytes for a `width x height` image with `color_count` colors.
    DataSize {
        width: u32,
        height: u32,
        color_count: u64,
        bits_per_pixel: u32,
        total_bits: u64,
        bytes: f64,
        answer_kb: f64,
    },
}

impl QuizItem {
    pub fn pixel_count(width: u32, height: u32) -> MediaLabResult<Self> {
        Ok(Self::PixelCount {
            width,
            height,
            answer: total_pixel_count(width, height)?,
        })
    }

    pub fn bits_needed(color_count: u64) -> MediaLabResult<Self> {
        Ok(Self::BitsNeeded {
            color_count,
            answer: bits_needed(color_count)?,
        })
    }

    pub fn data_size(width: u32, height: u32, color_count: u64) -> MediaLabResult<Self> {
        let bits_per_pixel = bits_needed(color_count)?;
        let total_bits = total_pixel_count(width, height)? * u64::from(bits_per_pixel);
        Ok(Self::DataSize {
            width,
            height,
            color_count,
            bits_per_pixel,
            total_bits,
            bytes: total_bits as f64 / 8.0,
            answer_kb: estimate_image_size_kb(width, height, bits_per_pixel)?,
        })
    }

    pub fn prompt(&self) -> String {
        match self {
            Self::PixelCount { width, height, .. } => {
                format!("How many pixels does a {width}×{height} pixel image have in total?")
            }
            Self::BitsNeeded { color_count, .. } => {
                format!("How many bits does one pixel need to represent {color_count} colors?")
            }
            Self::DataSize {
                width,
                height,
                color_count,
                ..
            } => format!(
                "What is the data size (KB) of a {width}×{height} pixel image with {color_count} colors?"
            ),
        }
    }

    pub fn explanation(&self) -> String {
        match self {
            Self::PixelCount {
                width,
                height,
                answer,
            } => format!("{width}×{height}={answer} pixels"),
            Self::BitsNeeded {
                color_count,
                answer,
            } => format!("2^{answer}={color_count}, so {answer} bits are needed"),
            Self::DataSize {
                total_bits,
                bytes,
                answer_kb,
                ..
            } => format!("total bits={total_bits} → bytes={bytes:.2} → KB={answer_kb:.2}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Quiz {
    pub pixel_count: QuizItem,
    pub bits_needed: QuizItem,
    pub data_size: QuizItem,
}

impl Quiz {
    pub fn items(&self) -> [&QuizItem; 3] {
        [&self.pixel_count, &self.bits_needed, &self.data_size]
    }
}

/// Draws one quiz from the candidate tables using `rng`.
pub fn generate_quiz<R: Rng + ?Sized>(rng: &mut R) -> MediaLabResult<Quiz> {
    let (w, h) = pick(rng, &PIXEL_COUNT_SIZES);
    let pixel_count = QuizItem::pixel_count(w, h)?;

    let bits_needed = QuizItem::bits_needed(pick(rng, &BITS_NEEDED_COLORS))?;

    let colors = pick(rng, &DATA_SIZE_COLORS);
    let (w, h) = pick(rng, &DATA_SIZE_SIZES);
    let data_size = QuizItem::data_size(w, h, colors)?;

    Ok(Quiz {
        pixel_count,
        bits_needed,
        data_size,
    })
}

/// [`generate_quiz`] driven by a `StdRng` seeded from `seed`.
pub fn generate_quiz_seeded(seed: u64) -> MediaLabResult<Quiz> {
    generate_quiz(&mut StdRng::seed_from_u64(seed))
}

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, table: &[T]) -> T {
    table[rng.gen_range(0..table.len())]
}

#[cfg(test)]
#[path = "../tests/unit/quiz.rs"]
mod tests;
