//! Mask-once, fill-many pipeline.
//!
//! [`HoleFiller`] classifies the mask a single time and then runs
//! reduce -> fill -> denormalize for each image. The classified region and the
//! kernel are read-only after construction, so one filler can serve many
//! images concurrently; each call owns its own intensity buffer.

#[cfg(test)]
mod tests;

use rayon::prelude::*;

use crate::config::FillConfig;
use crate::error::{Error, Result};
use crate::fill::fill_hole;
use crate::intensity::{denormalize_in_place, prepare_image, IntensityBuffer};
use crate::raw_image::RawImage;
use crate::region::HoleRegion;
use crate::weight::{PowerLawKernel, WeightKernel};

#[derive(Debug, Clone)]
pub struct HoleFiller {
    region: HoleRegion,
    kernel: PowerLawKernel,
    hole_value: f32,
}

impl HoleFiller {
    /// Classifies `mask` and builds the kernel from `config`.
    ///
    /// Fails with [`Error::DegenerateFill`] when the mask has hole pixels but
    /// no boundary pixels, since every image would fail the same way.
    pub fn new(mask: &RawImage<'_>, config: &FillConfig) -> Result<Self> {
        config.validate()?;
        let kernel = PowerLawKernel::new(config.z, config.e)?;
        let region = HoleRegion::from_mask(mask, config)?;

        if !region.holes().is_empty() && region.boundaries().is_empty() {
            return Err(Error::DegenerateFill {
                pixels: region.holes().to_vec(),
            });
        }

        tracing::info!(
            holes = region.holes().len(),
            boundaries = region.boundaries().len(),
            z = kernel.z(),
            e = kernel.e(),
            "Hole filler ready for {}x{} images",
            region.height(),
            region.width()
        );

        Ok(Self {
            region,
            kernel,
            hole_value: config.hole_value,
        })
    }

    #[inline]
    pub fn region(&self) -> &HoleRegion {
        &self.region
    }

    #[inline]
    pub fn kernel(&self) -> &PowerLawKernel {
        &self.kernel
    }

    #[inline]
    pub fn hole_value(&self) -> f32 {
        self.hole_value
    }

    /// Reduces `image` and carves the hole, without filling it.
    pub fn prepare(&self, image: &RawImage<'_>) -> Result<IntensityBuffer> {
        self.check_dimensions(image)?;
        prepare_image(image, self.region.holes(), self.hole_value)
    }

    /// Fills the hole of `image` with the configured kernel and returns the
    /// single-channel result in the 8-bit display range (unclamped).
    pub fn process(&self, image: &RawImage<'_>) -> Result<Vec<f32>> {
        self.process_with_kernel(image, &self.kernel)
    }

    /// Like [`process`](Self::process) with a caller-supplied kernel.
    pub fn process_with_kernel<K: WeightKernel + ?Sized>(
        &self,
        image: &RawImage<'_>,
        kernel: &K,
    ) -> Result<Vec<f32>> {
        let mut buffer = self.prepare(image)?;
        fill_hole(
            &mut buffer,
            self.region.holes(),
            self.region.boundaries(),
            kernel,
        )?;
        denormalize_in_place(&mut buffer);

        tracing::debug!(
            "Filled {} hole pixels in {}x{} image",
            self.region.holes().len(),
            image.height(),
            image.width()
        );

        Ok(buffer.into_values())
    }

    /// Processes `images` in parallel. Results keep input order; a failing
    /// image does not affect the others.
    pub fn process_batch(&self, images: &[RawImage<'_>]) -> Vec<Result<Vec<f32>>> {
        images.par_iter().map(|image| self.process(image)).collect()
    }

    fn check_dimensions(&self, image: &RawImage<'_>) -> Result<()> {
        if image.height() != self.region.height() || image.width() != self.region.width() {
            return Err(Error::DimensionMismatch {
                expected_height: self.region.height(),
                expected_width: self.region.width(),
                actual_height: image.height(),
                actual_width: image.width(),
            });
        }
        Ok(())
    }
}
