//! Holefill - boundary-weighted hole filling for image batches.
//!
//! A mask image marks a hole (dark pixels). The hole and the ring of bright
//! pixels around it are classified once, then every image of the batch is
//! reduced to a single normalized intensity channel and each hole pixel is
//! replaced by a distance-weighted average of the boundary intensities.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use holefill::{FillConfig, HoleFiller, RawImage};
//!
//! let mask = RawImage::new(&mask_bytes, height, width, channels)?;
//! let filler = HoleFiller::new(&mask, &FillConfig::default())?;
//!
//! let image = RawImage::new(&image_bytes, height, width, channels)?;
//! let filled: Vec<f32> = filler.process(&image)?;
//! ```

mod config;
mod error;
mod fill;
mod intensity;
mod pipeline;
mod pixel;
mod raw_image;
mod region;
mod weight;

pub mod prelude;

// ============================================================================
// Core types
// ============================================================================

pub use error::{Error, Result};
pub use pixel::Pixel;
pub use raw_image::{running_mean, RawImage};

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    Connectivity, FillConfig, DEFAULT_EPSILON, DEFAULT_EXPONENT, DEFAULT_HOLE_VALUE,
    DEFAULT_INTENSITY_THRESHOLD,
};

// ============================================================================
// Engine stages
// ============================================================================

pub use fill::fill_hole;
pub use intensity::{
    denormalize, denormalize_in_place, denormalize_value, normalize, prepare_image,
    IntensityBuffer,
};
pub use region::{find_boundaries, find_hole, HoleRegion};
pub use weight::{euclidean_distance, PowerLawKernel, WeightKernel};

// ============================================================================
// Pipeline
// ============================================================================

pub use pipeline::HoleFiller;
