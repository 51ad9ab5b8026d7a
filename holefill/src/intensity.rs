//! Single-channel normalized intensity buffers.
//!
//! Reduction turns an interleaved 8-bit image into one `f32` per pixel in
//! `[0, 1]` and stamps the hole sentinel; denormalization maps filled values
//! back to the 8-bit display range.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use crate::raw_image::RawImage;

const SAMPLE_MIN: f32 = u8::MIN as f32;
const SAMPLE_MAX: f32 = u8::MAX as f32;

/// Row-major `f32` buffer, one value per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityBuffer {
    values: Vec<f32>,
    height: usize,
    width: usize,
}

impl IntensityBuffer {
    pub fn new(height: usize, width: usize, values: Vec<f32>) -> Self {
        assert_eq!(
            values.len(),
            height * width,
            "values length must equal height * width"
        );
        Self {
            values,
            height,
            width,
        }
    }

    pub fn new_zeroed(height: usize, width: usize) -> Self {
        Self::new(height, width, vec![0.0; height * width])
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.is_within(self.height, self.width)
    }

    #[inline]
    pub fn get(&self, pixel: Pixel) -> f32 {
        debug_assert!(self.contains(pixel));
        self.values[pixel.linear_index(self.width)]
    }

    #[inline]
    pub fn set(&mut self, pixel: Pixel, value: f32) {
        debug_assert!(self.contains(pixel));
        let index = pixel.linear_index(self.width);
        self.values[index] = value;
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    #[inline]
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    pub(crate) fn check_contains(&self, pixel: Pixel) -> Result<()> {
        if self.contains(pixel) {
            Ok(())
        } else {
            Err(Error::PixelOutOfBounds {
                pixel,
                height: self.height,
                width: self.width,
            })
        }
    }
}

/// Maps an 8-bit sample linearly onto `[0, 1]`.
#[inline]
pub fn normalize(sample: u8) -> f32 {
    (sample as f32 - SAMPLE_MIN) / (SAMPLE_MAX - SAMPLE_MIN)
}

/// Maps a normalized value back to the 8-bit range. No clamping.
#[inline]
pub fn denormalize_value(value: f32) -> f32 {
    SAMPLE_MAX * value
}

/// Reduces `raw` to normalized intensities and writes `hole_value` at every
/// hole pixel.
///
/// Hole pixels must lie inside the image; this is checked before any work.
pub fn prepare_image(raw: &RawImage<'_>, holes: &[Pixel], hole_value: f32) -> Result<IntensityBuffer> {
    let mut buffer = IntensityBuffer::new_zeroed(raw.height(), raw.width());
    for &hole in holes {
        buffer.check_contains(hole)?;
    }

    buffer
        .values
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, value)| *value = normalize(raw.channel_average(index)));

    for &hole in holes {
        buffer.set(hole, hole_value);
    }

    Ok(buffer)
}

/// Returns the denormalized values of `buffer`.
pub fn denormalize(buffer: &IntensityBuffer) -> Vec<f32> {
    buffer.values.iter().map(|&v| denormalize_value(v)).collect()
}

pub fn denormalize_in_place(buffer: &mut IntensityBuffer) {
    buffer
        .values
        .iter_mut()
        .for_each(|v| *v = denormalize_value(*v));
}
