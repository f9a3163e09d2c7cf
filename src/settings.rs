use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::BitDepth;
use crate::foundation::error::{MediaLabError, MediaLabResult};
use crate::pixel::adjust::ENHANCE_FACTOR_RANGE;
use crate::pixel::resolution::{DEFAULT_DISPLAY_WIDTH_CM, DEFAULT_PPI_PRESETS};
use crate::size::report::ImageFormat;

/// Knobs for one PixelLab pass. Missing JSON fields take the demo's defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabSettings {
    pub brightness: f64,
    pub contrast: f64,
    /// Display densities to preview, in pixels per inch.
    pub ppi_presets: Vec<f64>,
    pub display_width_cm: f64,
    /// Explicit `(width, height)` grids to preview in addition to the PPI presets.
    pub resolution_targets: Vec<(u32, u32)>,
    /// Per-channel bit depths to preview.
    pub channel_depths: Vec<BitDepth>,
    /// Formats the uploaded image is re-encoded to for the size comparison.
    pub formats: Vec<ImageFormat>,
}

impl Default for LabSettings {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            ppi_presets: DEFAULT_PPI_PRESETS.to_vec(),
            display_width_cm: DEFAULT_DISPLAY_WIDTH_CM,
            resolution_targets: Vec::new(),
            channel_depths: [5, 3, 2]
                .into_iter()
                .filter_map(|b| BitDepth::new(b).ok())
                .collect(),
            formats: ImageFormat::ALL.to_vec(),
        }
    }
}

impl LabSettings {
    pub fn from_json_str(s: &str) -> MediaLabResult<Self> {
        let settings: Self = serde_json::from_str(s)
            .context("parse lab settings JSON")
            .map_err(MediaLabError::Other)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> MediaLabResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read lab settings '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> MediaLabResult<()> {
        for (name, v) in [("brightness", self.brightness), ("contrast", self.contrast)] {
            if !ENHANCE_FACTOR_RANGE.contains(&v) {
                return Err(MediaLabError::invalid_argument(format!(
                    "{name} must be in {}..={}, got {v}",
                    ENHANCE_FACTOR_RANGE.start(),
                    ENHANCE_FACTOR_RANGE.end()
                )));
            }
        }
        if let Some(&ppi) = self.ppi_presets.iter().find(|p| !p.is_finite() || **p <= 0.0) {
            return Err(MediaLabError::invalid_argument(format!(
                "ppi presets must be > 0, got {ppi}"
            )));
        }
        if !self.display_width_cm.is_finite() || self.display_width_cm <= 0.0 {
            return Err(MediaLabError::invalid_argument(format!(
                "display_width_cm must be > 0, got {}",
                self.display_width_cm
            )));
        }
        if let Some(&(w, h)) = self
            .resolution_targets
            .iter()
            .find(|(w, h)| *w == 0 || *h == 0)
        {
            return Err(MediaLabError::invalid_argument(format!(
                "resolution targets must be > 0, got {w}x{h}"
            )));
        }
        let mut seen = std::collections::BTreeSet::new();
        if let Some(dup) = self.formats.iter().find(|f| !seen.insert(**f)) {
            return Err(MediaLabError::invalid_argument(format!(
                "format {dup} listed more than once"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
