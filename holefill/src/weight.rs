//! Distance-based interpolation weights.

use crate::config::DEFAULT_EPSILON;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Weight of boundary pixel `b` when interpolating hole pixel `a`.
///
/// Any `Fn(Pixel, Pixel) -> f32 + Sync` closure is a kernel, so custom
/// weightings can be passed without defining a type.
pub trait WeightKernel: Sync {
    fn weight(&self, a: Pixel, b: Pixel) -> f32;
}

impl<F> WeightKernel for F
where
    F: Fn(Pixel, Pixel) -> f32 + Sync,
{
    #[inline]
    fn weight(&self, a: Pixel, b: Pixel) -> f32 {
        self(a, b)
    }
}

/// Euclidean distance from integer squared differences.
#[inline]
pub fn euclidean_distance(a: Pixel, b: Pixel) -> f32 {
    (a.distance_squared(b) as f64).sqrt() as f32
}

/// `1 / (|d(a, b)|^z + e)`.
///
/// `z` sets how fast influence falls off with distance; `e` keeps the weight
/// finite when `a == b`, where it equals `1 / e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawKernel {
    z: f32,
    e: f32,
}

impl PowerLawKernel {
    /// Builds the kernel, replacing a non-positive (or NaN) `e` with
    /// [`DEFAULT_EPSILON`].
    pub fn new(z: f32, e: f32) -> Result<Self> {
        if !z.is_finite() {
            return Err(Error::InvalidExponent(z));
        }
        if e.is_infinite() {
            return Err(Error::InvalidEpsilon(e));
        }

        let e = if e > 0.0 {
            e
        } else {
            tracing::warn!(
                "Kernel epsilon {} is not positive, using {}",
                e,
                DEFAULT_EPSILON
            );
            DEFAULT_EPSILON
        };

        Ok(Self { z, e })
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    #[inline]
    pub fn e(&self) -> f32 {
        self.e
    }
}

impl WeightKernel for PowerLawKernel {
    #[inline]
    fn weight(&self, a: Pixel, b: Pixel) -> f32 {
        let distance = euclidean_distance(a, b).abs();
        1.0 / (distance.powf(self.z) + self.e)
    }
}
