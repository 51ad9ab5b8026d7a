//! Image decode/encode around the engine's raw 8-bit buffers.

use std::path::Path;

use image::{DynamicImage, GrayImage};

/// Interleaved 8-bit pixels as handed to the engine.
#[derive(Debug)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl DecodedImage {
    pub fn raw(&self) -> holefill::Result<holefill::RawImage<'_>> {
        holefill::RawImage::new(&self.bytes, self.height, self.width, self.channels)
    }
}

/// Gray inputs stay single-channel; everything else becomes 8-bit RGB.
/// Alpha is discarded.
pub fn decode(image: DynamicImage) -> DecodedImage {
    let height = image.height() as usize;
    let width = image.width() as usize;

    let (bytes, channels) = match image {
        DynamicImage::ImageLuma8(buffer) => (buffer.into_raw(), 1),
        DynamicImage::ImageRgb8(buffer) => (buffer.into_raw(), 3),
        other if !other.color().has_color() => (other.into_luma8().into_raw(), 1),
        other => (other.into_rgb8().into_raw(), 3),
    };

    DecodedImage {
        bytes,
        height,
        width,
        channels,
    }
}

pub fn load(path: &Path) -> image::ImageResult<DecodedImage> {
    Ok(decode(image::open(path)?))
}

/// Converts denormalized values to 8-bit gray, rounding and saturating.
pub fn to_gray(values: &[f32], height: usize, width: usize) -> GrayImage {
    let pixels = values
        .iter()
        .map(|&v| v.round().clamp(0.0, u8::MAX as f32) as u8)
        .collect();
    GrayImage::from_raw(width as u32, height as u32, pixels)
        .expect("value count must equal height * width")
}
