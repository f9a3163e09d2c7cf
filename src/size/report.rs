use std::{collections::BTreeMap, io::Cursor};

use crate::foundation::core::DecodedImage;
use crate::foundation::error::{MediaLabError, MediaLabResult};
use crate::size::bits::round2;

pub const BYTES_PER_KB: f64 = 1024.0;

/// Storage estimate for an uncompressed bitmap: `width * height * bpp / 8 / 1024`, to 2 decimals.
pub fn estimate_image_size_kb(width: u32, height: u32, bits_per_pixel: u32) -> MediaLabResult<f64> {
    if width == 0 || height == 0 {
        return Err(MediaLabError::invalid_argument(format!(
            "size estimate needs positive dimensions, got {width}x{height}"
        )));
    }
    let total_bits = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|v| v.checked_mul(u64::from(bits_per_pixel)))
        .ok_or_else(|| {
            MediaLabError::invalid_argument(format!(
                "{width}x{height} at {bits_per_pixel} bpp overflows the bit count"
            ))
        })?;
    Ok(round2(total_bits as f64 / 8.0 / BYTES_PER_KB))
}

/// The image file formats the demo compares. Declaration order is report order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    Jpg,
    Png,
    Gif,
    Bmp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionClass {
    Lossy,
    Lossless,
    Uncompressed,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Jpg,
        ImageFormat::Png,
        ImageFormat::Gif,
        ImageFormat::Bmp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "JPG",
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Bmp => "BMP",
        }
    }

    pub fn compression(self) -> CompressionClass {
        match self {
            ImageFormat::Jpg => CompressionClass::Lossy,
            ImageFormat::Png | ImageFormat::Gif => CompressionClass::Lossless,
            ImageFormat::Bmp => CompressionClass::Uncompressed,
        }
    }

    pub fn typical_use(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "photographs",
            ImageFormat::Png => "illustrations and transparent images",
            ImageFormat::Gif => "animations",
            ImageFormat::Bmp => "uncompressed storage",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "lossy compression suited to natural images",
            ImageFormat::Png => "lossless compression with transparency",
            ImageFormat::Gif => "lossless compression, up to 256 colors",
            ImageFormat::Bmp => "simple uncompressed format",
        }
    }

    fn codec(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for CompressionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CompressionClass::Lossy => "lossy",
            CompressionClass::Lossless => "lossless",
            CompressionClass::Uncompressed => "uncompressed",
        })
    }
}

/// One row of the format characteristics table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FormatCharacteristics {
    pub format: ImageFormat,
    pub typical_use: &'static str,
    pub summary: &'static str,
}

/// Characteristics rows for `formats`, in declaration order, duplicates dropped.
pub fn format_characteristics(formats: &[ImageFormat]) -> Vec<FormatCharacteristics> {
    let wanted: std::collections::BTreeSet<ImageFormat> = formats.iter().copied().collect();
    wanted
        .into_iter()
        .map(|format| FormatCharacteristics {
            format,
            typical_use: format.typical_use(),
            summary: format.summary(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FormatSizeEntry {
    pub format: ImageFormat,
    pub compression: CompressionClass,
    pub bytes: u64,
    /// `bytes / 1024`, 2 decimals.
    pub kb: f64,
    /// `(bytes - original_bytes) / 1024`, signed, 2 decimals.
    pub delta_kb: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FormatSizeReport {
    pub original_bytes: u64,
    pub entries: Vec<FormatSizeEntry>,
}

impl FormatSizeReport {
    pub fn get(&self, format: ImageFormat) -> Option<&FormatSizeEntry> {
        self.entries.iter().find(|e| e.format == format)
    }

    /// Entry with the fewest bytes; ties go to the earlier format.
    pub fn smallest(&self) -> Option<&FormatSizeEntry> {
        self.entries.iter().min_by_key(|e| e.bytes)
    }
}

/// Tabulates encoded sizes against `original_bytes`.
///
/// Keying the input by [`ImageFormat`] rules out duplicate labels, and the map's ordering puts
/// the entries in declaration order whatever order the caller inserted them in.
pub fn format_size_report(
    original_bytes: u64,
    encoded_sizes: &BTreeMap<ImageFormat, u64>,
) -> FormatSizeReport {
    let original_kb = original_bytes as f64 / BYTES_PER_KB;
    let entries = encoded_sizes
        .iter()
        .map(|(&format, &bytes)| {
            let kb = bytes as f64 / BYTES_PER_KB;
            FormatSizeEntry {
                format,
                compression: format.compression(),
                bytes,
                kb: round2(kb),
                delta_kb: round2(kb - original_kb),
            }
        })
        .collect();
    FormatSizeReport {
        original_bytes,
        entries,
    }
}

/// Re-encodes `image` in each format with the `image` crate's default settings and measures it.
#[tracing::instrument(skip(image), fields(w = image.width(), h = image.height()))]
pub fn encoded_format_sizes(
    image: &DecodedImage,
    formats: &[ImageFormat],
) -> MediaLabResult<BTreeMap<ImageFormat, u64>> {
    let mut out = BTreeMap::new();
    for &format in formats {
        let bytes = encode_image(image, format)?;
        tracing::debug!(%format, bytes = bytes.len(), "encoded");
        out.insert(format, bytes.len() as u64);
    }
    Ok(out)
}

/// Encodes `image` in `format`.
pub fn encode_image(image: &DecodedImage, format: ImageFormat) -> MediaLabResult<Vec<u8>> {
    let rgb = image::DynamicImage::ImageRgb8(image.to_rgb_image());
    let dyn_img = match format {
        // The GIF encoder palettizes from RGBA.
        ImageFormat::Gif => image::DynamicImage::ImageRgba8(rgb.to_rgba8()),
        _ => rgb,
    };
    let mut buf = Vec::new();
    dyn_img
        .write_to(&mut Cursor::new(&mut buf), format.codec())
        .map_err(|e| MediaLabError::encode(format!("encode {format}: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/size/report.rs"]
mod tests;
