use crate::foundation::core::{DecodedImage, QuantizationSpec};
use crate::foundation::error::MediaLabResult;
use crate::pixel::adjust::enhance;
use crate::pixel::arithmetic::{
    quantize_image, split_channels, total_bits_for_depth, total_pixel_count,
};
use crate::pixel::resolution::{ppi_target_dimensions, simulate_display_resolution};
use crate::settings::LabSettings;
use crate::size::report::{
    FormatCharacteristics, FormatSizeReport, ImageFormat, encode_image, encoded_format_sizes,
    format_characteristics, format_size_report,
};

/// A reduced-resolution preview, shown at the source size.
#[derive(Clone, Debug)]
pub struct ResolutionPreview {
    /// Set when the grid came from a PPI preset rather than an explicit target.
    pub ppi: Option<f64>,
    pub grid_width: u32,
    pub grid_height: u32,
    pub image: DecodedImage,
}

#[derive(Clone, Debug)]
pub struct DepthPreview {
    pub spec: QuantizationSpec,
    /// Bits per pixel across R, G and B.
    pub total_bits: u32,
    pub image: DecodedImage,
}

/// Everything one PixelLab pass shows for an uploaded image.
#[derive(Clone, Debug)]
pub struct PixelLabReport {
    pub width: u32,
    pub height: u32,
    pub total_pixels: u64,
    pub adjusted: DecodedImage,
    pub channels: [DecodedImage; 3],
    pub resolutions: Vec<ResolutionPreview>,
    pub depths: Vec<DepthPreview>,
    /// Size of the file as uploaded, kept apart from the comparison table.
    pub upload_bytes: Option<u64>,
    pub format_table: Vec<FormatCharacteristics>,
    /// Sizes of the adjusted image per format, relative to its JPG re-encode.
    pub formats: FormatSizeReport,
}

/// Runs the full PixelLab sequence on `original`.
///
/// Previews and the format comparison are derived from the brightness/contrast-adjusted image,
/// the pixel count from the original. The comparison baseline is the adjusted image re-encoded
/// as JPG; `upload_bytes` is only carried through to the report.
#[tracing::instrument(
    skip(original, settings),
    fields(w = original.width(), h = original.height())
)]
pub fn run_pixel_lab(
    original: &DecodedImage,
    upload_bytes: Option<u64>,
    settings: &LabSettings,
) -> MediaLabResult<PixelLabReport> {
    settings.validate()?;
    let (width, height) = original.dimensions();
    let total_pixels = total_pixel_count(width, height)?;

    let adjusted = enhance(original, settings.brightness, settings.contrast)?;
    let (r, g, b) = split_channels(&adjusted);

    let mut resolutions =
        Vec::with_capacity(settings.ppi_presets.len() + settings.resolution_targets.len());
    for &ppi in &settings.ppi_presets {
        let (gw, gh) = ppi_target_dimensions(ppi, settings.display_width_cm, width, height)?;
        resolutions.push(ResolutionPreview {
            ppi: Some(ppi),
            grid_width: gw,
            grid_height: gh,
            image: simulate_display_resolution(&adjusted, gw, gh)?,
        });
    }
    for &(gw, gh) in &settings.resolution_targets {
        resolutions.push(ResolutionPreview {
            ppi: None,
            grid_width: gw,
            grid_height: gh,
            image: simulate_display_resolution(&adjusted, gw, gh)?,
        });
    }

    let depths = settings
        .channel_depths
        .iter()
        .map(|&channel_bits| {
            let spec = QuantizationSpec { channel_bits };
            Ok(DepthPreview {
                spec,
                total_bits: total_bits_for_depth(channel_bits.bits())?,
                image: quantize_image(&adjusted, spec),
            })
        })
        .collect::<MediaLabResult<Vec<_>>>()?;

    let baseline = encode_image(&adjusted, ImageFormat::Jpg)?.len() as u64;
    let to_encode: Vec<ImageFormat> = settings
        .formats
        .iter()
        .copied()
        .filter(|f| *f != ImageFormat::Jpg)
        .collect();
    let mut sizes = encoded_format_sizes(&adjusted, &to_encode)?;
    if settings.formats.contains(&ImageFormat::Jpg) {
        sizes.insert(ImageFormat::Jpg, baseline);
    }
    let formats = format_size_report(baseline, &sizes);
    let format_table = format_characteristics(&settings.formats);

    tracing::debug!(
        previews = resolutions.len(),
        depths = depths.len(),
        formats = formats.entries.len(),
        "pixel lab pass complete"
    );

    Ok(PixelLabReport {
        width,
        height,
        total_pixels,
        adjusted,
        channels: [r, g, b],
        resolutions,
        depths,
        upload_bytes,
        format_table,
        formats,
    })
}

#[cfg(test)]
#[path = "../tests/unit/lab.rs"]
mod tests;
