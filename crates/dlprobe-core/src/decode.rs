//! Decode a response body as a raster image.

use crate::error::ProbeError;
use image::{GenericImageView, ImageFormat};

/// Decoded image; only its size is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    /// Format identified from the magic bytes.
    pub format: Option<ImageFormat>,
}

impl Raster {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Fully decodes `bytes`, guessing the format from its leading bytes.
///
/// A full decode (rather than a header peek) is done so truncated streams are
/// rejected.
pub fn decode_image(bytes: &[u8]) -> Result<Raster, ProbeError> {
    let format = image::guess_format(bytes).ok();
    tracing::debug!(?format, len = bytes.len(), "decoding body");

    let img = image::load_from_memory(bytes)
        .map_err(|source| ProbeError::image_decode(bytes.len(), source))?;
    let (width, height) = img.dimensions();

    Ok(Raster {
        width,
        height,
        format,
    })
}
