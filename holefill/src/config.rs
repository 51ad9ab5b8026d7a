//! Configuration for hole classification and filling.
//!
//! [`FillConfig`] carries every tunable the engine consumes. Nothing is read
//! from process-wide state: callers build a config (or deserialize one) and
//! pass it explicitly.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fraction of the intensity range below which a mask pixel is a hole.
pub const DEFAULT_INTENSITY_THRESHOLD: f32 = 0.5;

/// Value written into hole locations before they are filled.
pub const DEFAULT_HOLE_VALUE: f32 = -1.0;

/// Epsilon used when a non-positive one is supplied.
pub const DEFAULT_EPSILON: f32 = 0.01;

pub const DEFAULT_EXPONENT: f32 = 2.0;

// ============================================================================
// Connectivity
// ============================================================================

const FOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const EIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Which neighbours of a hole pixel are boundary candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Horizontal and vertical neighbours only.
    Four,
    /// All eight surrounding pixels, diagonals included.
    #[default]
    Eight,
}

impl Connectivity {
    /// Neighbour offsets `(dx, dy)` in row-major scan order.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Four => &FOUR_OFFSETS,
            Connectivity::Eight => &EIGHT_OFFSETS,
        }
    }

    pub fn neighbor_count(self) -> u32 {
        self.offsets().len() as u32
    }
}

impl TryFrom<u32> for Connectivity {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            4 => Ok(Connectivity::Four),
            8 => Ok(Connectivity::Eight),
            other => Err(Error::InvalidConnectivity(other)),
        }
    }
}

// ============================================================================
// FillConfig
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Normalized threshold in `[0, 1]`. Mask pixels strictly below are holes,
    /// neighbours strictly above are boundary pixels.
    pub intensity_threshold: f32,
    pub connectivity: Connectivity,
    /// Falloff exponent of the weight kernel. Any finite value is accepted;
    /// zero or negative values give flat or inverted weighting.
    pub z: f32,
    /// Kernel epsilon. Non-positive values are replaced by [`DEFAULT_EPSILON`].
    pub e: f32,
    pub hole_value: f32,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            intensity_threshold: DEFAULT_INTENSITY_THRESHOLD,
            connectivity: Connectivity::default(),
            z: DEFAULT_EXPONENT,
            e: DEFAULT_EPSILON,
            hole_value: DEFAULT_HOLE_VALUE,
        }
    }
}

impl FillConfig {
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn kernel(mut self, z: f32, e: f32) -> Self {
        self.z = z;
        self.e = e;
        self
    }

    pub fn intensity_threshold(mut self, threshold: f32) -> Self {
        self.intensity_threshold = threshold;
        self
    }

    pub fn hole_value(mut self, hole_value: f32) -> Self {
        self.hole_value = hole_value;
        self
    }

    /// Checks the values that cannot be repaired. A non-positive `e` is not an
    /// error here; it is clamped when the kernel is built.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.intensity_threshold)?;
        if !self.z.is_finite() {
            return Err(Error::InvalidExponent(self.z));
        }
        if self.e.is_infinite() {
            return Err(Error::InvalidEpsilon(self.e));
        }
        Ok(())
    }
}

pub(crate) fn validate_threshold(threshold: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(Error::InvalidThreshold(threshold));
    }
    Ok(())
}
