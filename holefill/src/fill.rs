//! Dense weighted-average hole filling.
//!
//! Every hole pixel becomes `sum(w(h, b) * I(b)) / sum(w(h, b))` over all
//! boundary pixels `b`, repeats included. Cost is `|holes| * |boundaries|`
//! kernel evaluations.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::intensity::IntensityBuffer;
use crate::pixel::Pixel;
use crate::weight::WeightKernel;

/// Fills every hole pixel of `buffer` from the boundary intensities.
///
/// All estimates are computed before the buffer is touched, so on error the
/// buffer is unchanged. Boundary pixels are never holes, which makes the
/// per-hole sums independent and lets them run in parallel.
///
/// # Errors
/// - [`Error::PixelOutOfBounds`] if a hole or boundary pixel is outside `buffer`.
/// - [`Error::DegenerateFill`] listing the hole pixels whose weight sum is zero
///   or not finite, including every hole when `boundaries` is empty.
pub fn fill_hole<K: WeightKernel + ?Sized>(
    buffer: &mut IntensityBuffer,
    holes: &[Pixel],
    boundaries: &[Pixel],
    kernel: &K,
) -> Result<()> {
    if holes.is_empty() {
        return Ok(());
    }
    for &pixel in holes.iter().chain(boundaries) {
        buffer.check_contains(pixel)?;
    }
    if boundaries.is_empty() {
        return Err(Error::DegenerateFill {
            pixels: holes.to_vec(),
        });
    }

    let samples: Vec<(Pixel, f32)> = boundaries
        .iter()
        .map(|&pixel| (pixel, buffer.get(pixel)))
        .collect();

    let estimates: Vec<Option<f32>> = holes
        .par_iter()
        .map(|&hole| weighted_average(hole, &samples, kernel))
        .collect();

    let degenerate: Vec<Pixel> = holes
        .iter()
        .zip(&estimates)
        .filter(|(_, estimate)| estimate.is_none())
        .map(|(&hole, _)| hole)
        .collect();
    if !degenerate.is_empty() {
        tracing::warn!(
            "{} of {} hole pixels have no usable boundary weight",
            degenerate.len(),
            holes.len()
        );
        return Err(Error::DegenerateFill { pixels: degenerate });
    }

    for (&hole, estimate) in holes.iter().zip(estimates) {
        if let Some(value) = estimate {
            buffer.set(hole, value);
        }
    }

    Ok(())
}

/// Weighted mean of `samples` as seen from `hole`, accumulated in `f64`.
/// `None` when the weights do not sum to a finite non-zero value.
fn weighted_average<K: WeightKernel + ?Sized>(
    hole: Pixel,
    samples: &[(Pixel, f32)],
    kernel: &K,
) -> Option<f32> {
    let mut weight_sum = 0.0f64;
    let mut weighted_sum = 0.0f64;

    for &(pixel, intensity) in samples {
        let weight = kernel.weight(hole, pixel) as f64;
        weight_sum += weight;
        weighted_sum += weight * intensity as f64;
    }

    let value = weighted_sum / weight_sum;
    (weight_sum != 0.0 && weight_sum.is_finite() && value.is_finite()).then_some(value as f32)
}
