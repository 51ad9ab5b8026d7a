//! Hole and boundary classification.
//!
//! Both sets are computed from the mask alone. Hole pixels are strictly below
//! the threshold and boundary pixels strictly above it, so mid-intensity
//! pixels at exactly the threshold belong to neither set.

use std::collections::BTreeMap;

use crate::config::{validate_threshold, Connectivity, FillConfig};
use crate::error::Result;
use crate::pixel::Pixel;
use crate::raw_image::RawImage;

/// Converts a normalized threshold into the 8-bit sample domain.
#[inline]
fn threshold_value(threshold: f32) -> f32 {
    u8::MAX as f32 * threshold
}

/// Collects every pixel of `raw` whose channel average is strictly below
/// `threshold`, in row-major order.
pub fn find_hole(raw: &RawImage<'_>, threshold: f32) -> Result<Vec<Pixel>> {
    validate_threshold(threshold)?;
    let threshold = threshold_value(threshold);

    let mut holes = Vec::new();
    for x in 0..raw.height() {
        for y in 0..raw.width() {
            let average = raw.channel_average(x * raw.width() + y) as f32;
            if average < threshold {
                holes.push(Pixel::new(x as i32, y as i32));
            }
        }
    }
    Ok(holes)
}

/// Collects the neighbours of every hole pixel whose channel average is
/// strictly above `threshold`.
///
/// A pixel bordering several holes is recorded once per adjacency, which
/// weights it proportionally more in the fill. Neighbours outside the image
/// are skipped.
pub fn find_boundaries(
    raw: &RawImage<'_>,
    holes: &[Pixel],
    threshold: f32,
    connectivity: Connectivity,
) -> Result<Vec<Pixel>> {
    validate_threshold(threshold)?;
    let threshold = threshold_value(threshold);

    let mut boundaries = Vec::new();
    for &hole in holes {
        for &(dx, dy) in connectivity.offsets() {
            let candidate = hole.offset(dx, dy);
            let Some(average) = raw.channel_average_at(candidate) else {
                continue;
            };
            if average as f32 > threshold {
                boundaries.push(candidate);
            }
        }
    }
    Ok(boundaries)
}

/// Hole and boundary sets of one mask, reused for every image of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleRegion {
    holes: Vec<Pixel>,
    boundaries: Vec<Pixel>,
    height: usize,
    width: usize,
}

impl HoleRegion {
    pub fn from_mask(mask: &RawImage<'_>, config: &FillConfig) -> Result<Self> {
        let holes = find_hole(mask, config.intensity_threshold)?;
        let boundaries = find_boundaries(
            mask,
            &holes,
            config.intensity_threshold,
            config.connectivity,
        )?;

        tracing::debug!(
            holes = holes.len(),
            boundaries = boundaries.len(),
            connectivity = ?config.connectivity,
            "Classified mask {}x{}",
            mask.height(),
            mask.width()
        );

        Ok(Self {
            holes,
            boundaries,
            height: mask.height(),
            width: mask.width(),
        })
    }

    #[inline]
    pub fn holes(&self) -> &[Pixel] {
        &self.holes
    }

    /// Boundary pixels including repeats, one per hole adjacency.
    #[inline]
    pub fn boundaries(&self) -> &[Pixel] {
        &self.boundaries
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Distinct boundary pixels with the number of hole adjacencies each one
    /// was recorded for, sorted by coordinate.
    pub fn unique_boundaries(&self) -> Vec<(Pixel, u32)> {
        let mut counts: BTreeMap<Pixel, u32> = BTreeMap::new();
        for &pixel in &self.boundaries {
            *counts.entry(pixel).or_default() += 1;
        }
        counts.into_iter().collect()
    }
}
