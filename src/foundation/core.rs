use crate::foundation::error::{MediaLabError, MediaLabResult};

/// A decoded RGB8 pixel grid, packed row-major as `[r, g, b, r, g, b, ...]`.
///
/// Dimensions are always non-zero; this is checked on construction and the buffer is private
/// so the invariant holds for the lifetime of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    buf: image::RgbImage,
}

impl DecodedImage {
    pub fn from_rgb8(width: u32, height: u32, rgb8: Vec<u8>) -> MediaLabResult<Self> {
        let expected = rgb8_len(width, height)?;
        let got = rgb8.len();
        let buf = image::RgbImage::from_raw(width, height, rgb8)
            .filter(|_| got == expected)
            .ok_or_else(|| {
                MediaLabError::invalid_argument(format!(
                    "rgb8 buffer has {got} bytes, expected {expected} for {width}x{height}"
                ))
            })?;
        Ok(Self { buf })
    }

    /// An image where every pixel is `rgb`.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> MediaLabResult<Self> {
        rgb8_len(width, height)?;
        Ok(Self {
            buf: image::RgbImage::from_pixel(width, height, image::Rgb(rgb)),
        })
    }

    pub fn from_rgb_image(img: image::RgbImage) -> MediaLabResult<Self> {
        rgb8_len(img.width(), img.height())?;
        Ok(Self { buf: img })
    }

    /// Decodes any format the `image` crate understands and drops alpha.
    pub fn decode(bytes: &[u8]) -> MediaLabResult<Self> {
        let dyn_img = image::load_from_memory(bytes)
            .map_err(|e| MediaLabError::decode(format!("decode image from memory: {e}")))?;
        Self::from_rgb_image(dyn_img.to_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.buf.width()
    }

    pub fn height(&self) -> u32 {
        self.buf.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buf.dimensions()
    }

    pub fn as_rgb8(&self) -> &[u8] {
        self.buf.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.buf.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.buf.pixels().map(|p| p.0)
    }

    /// Applies `f` to every channel value, keeping dimensions.
    pub fn map_channels(&self, mut f: impl FnMut(Channel, u8) -> u8) -> Self {
        let mut buf = self.buf.clone();
        for px in buf.pixels_mut() {
            for (c, v) in Channel::ALL.into_iter().zip(px.0.iter_mut()) {
                *v = f(c, *v);
            }
        }
        Self { buf }
    }

    pub fn as_rgb_image(&self) -> &image::RgbImage {
        &self.buf
    }

    pub fn to_rgb_image(&self) -> image::RgbImage {
        self.buf.clone()
    }
}

fn rgb8_len(width: u32, height: u32) -> MediaLabResult<usize> {
    if width == 0 || height == 0 {
        return Err(MediaLabError::invalid_argument(format!(
            "image dimensions must be > 0, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(3))
        .ok_or_else(|| MediaLabError::invalid_argument("image buffer size overflow"))
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// Bits kept per color channel, 1..=8.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct BitDepth(u8);

impl BitDepth {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 8;
    pub const FULL: BitDepth = BitDepth(8);

    pub fn new(bits: u32) -> MediaLabResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&bits) {
            return Err(MediaLabError::invalid_argument(format!(
                "channel bit depth must be in {}..={}, got {bits}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(bits as u8))
    }

    pub fn bits(self) -> u32 {
        u32::from(self.0)
    }

    /// Number of low bits discarded from an 8-bit channel value.
    pub fn dropped_bits(self) -> u32 {
        8 - self.bits()
    }

    /// Distinct levels a channel can take at this depth.
    pub fn levels(self) -> u32 {
        1 << self.bits()
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = MediaLabError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<BitDepth> for u32 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

/// The uniform bit depth applied to R, G and B when simulating a reduced palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuantizationSpec {
    pub channel_bits: BitDepth,
}

impl QuantizationSpec {
    pub fn new(channel_bits: u32) -> MediaLabResult<Self> {
        Ok(Self {
            channel_bits: BitDepth::new(channel_bits)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
