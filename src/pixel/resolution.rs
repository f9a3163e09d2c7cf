use image::imageops::{self, FilterType};

use crate::foundation::core::DecodedImage;
use crate::foundation::error::{MediaLabError, MediaLabResult};

pub const CM_PER_INCH: f64 = 2.54;

/// Display densities the demo compares side by side.
pub const DEFAULT_PPI_PRESETS: [f64; 3] = [10.0, 50.0, 200.0];

/// Physical width the PPI previews are assumed to be shown at.
pub const DEFAULT_DISPLAY_WIDTH_CM: f64 = 10.0;

/// Shows what `image` looks like at `target_width x target_height`, at its original size.
///
/// The image is reduced with a bilinear filter and then blown back up with nearest-neighbour so
/// every low-resolution pixel becomes a visible block. The output always has the input's
/// dimensions; it is a visualization, not a usable reduced image.
#[tracing::instrument(skip(image), fields(src_w = image.width(), src_h = image.height()))]
pub fn simulate_display_resolution(
    image: &DecodedImage,
    target_width: u32,
    target_height: u32,
) -> MediaLabResult<DecodedImage> {
    if target_width == 0 || target_height == 0 {
        return Err(MediaLabError::invalid_argument(format!(
            "target resolution must be > 0, got {target_width}x{target_height}"
        )));
    }
    let (w, h) = image.dimensions();
    if (target_width, target_height) == (w, h) {
        return Ok(image.clone());
    }

    let small = imageops::resize(
        image.as_rgb_image(),
        target_width,
        target_height,
        FilterType::Triangle,
    );
    let restored = imageops::resize(&small, w, h, FilterType::Nearest);
    DecodedImage::from_rgb_image(restored)
}

/// Pixel grid a display of `ppi` density shows across `display_width_cm`, keeping aspect ratio.
///
/// `width = floor(ppi * cm / 2.54)`, `height = floor(width * orig_h / orig_w)`.
pub fn ppi_target_dimensions(
    ppi: f64,
    display_width_cm: f64,
    orig_width: u32,
    orig_height: u32,
) -> MediaLabResult<(u32, u32)> {
    if !ppi.is_finite() || ppi <= 0.0 {
        return Err(MediaLabError::invalid_argument(format!(
            "ppi must be finite and > 0, got {ppi}"
        )));
    }
    if !display_width_cm.is_finite() || display_width_cm <= 0.0 {
        return Err(MediaLabError::invalid_argument(format!(
            "display width must be finite and > 0 cm, got {display_width_cm}"
        )));
    }
    if orig_width == 0 || orig_height == 0 {
        return Err(MediaLabError::invalid_argument(format!(
            "source dimensions must be > 0, got {orig_width}x{orig_height}"
        )));
    }

    let inches = display_width_cm / CM_PER_INCH;
    let width = (ppi * inches).floor();
    if width > f64::from(u32::MAX) {
        return Err(MediaLabError::invalid_argument(format!(
            "{ppi} ppi over {display_width_cm} cm overflows the pixel grid"
        )));
    }
    let width = width as u32;
    let height = u64::from(width) * u64::from(orig_height) / u64::from(orig_width);
    let height = u32::try_from(height).map_err(|_| {
        MediaLabError::invalid_argument(format!("target height {height} overflows the pixel grid"))
    })?;
    if width == 0 || height == 0 {
        return Err(MediaLabError::invalid_argument(format!(
            "{ppi} ppi over {display_width_cm} cm yields an empty {width}x{height} grid \
             for a {orig_width}x{orig_height} source"
        )));
    }
    tracing::debug!(ppi, display_width_cm, width, height, "ppi target grid");
    Ok((width, height))
}

/// [`simulate_display_resolution`] at the grid derived by [`ppi_target_dimensions`].
pub fn simulate_ppi(
    image: &DecodedImage,
    ppi: f64,
    display_width_cm: f64,
) -> MediaLabResult<DecodedImage> {
    let (w, h) = ppi_target_dimensions(ppi, display_width_cm, image.width(), image.height())?;
    simulate_display_resolution(image, w, h)
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/resolution.rs"]
mod tests;
