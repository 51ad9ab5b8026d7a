//! Error types for hole classification and filling.

use thiserror::Error;

use crate::pixel::Pixel;

/// Errors raised by the engine. Every variant is detected before the target
/// buffer is mutated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Channel count must be positive")]
    InvalidChannelCount,

    #[error(
        "Dimension mismatch: mask is {expected_height}x{expected_width}, image is {actual_height}x{actual_width}"
    )]
    DimensionMismatch {
        expected_height: usize,
        expected_width: usize,
        actual_height: usize,
        actual_width: usize,
    },

    #[error("Intensity threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("Invalid connectivity value {0}, expected 4 or 8")]
    InvalidConnectivity(u32),

    #[error("Kernel epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f32),

    #[error("Kernel exponent must be finite, got {0}")]
    InvalidExponent(f32),

    #[error("Pixel ({}, {}) is outside the {height}x{width} buffer", pixel.x, pixel.y)]
    PixelOutOfBounds {
        pixel: Pixel,
        height: usize,
        width: usize,
    },

    #[error("Degenerate fill: {} hole pixel(s) have no usable boundary weight", pixels.len())]
    DegenerateFill { pixels: Vec<Pixel> },
}

pub type Result<T> = std::result::Result<T, Error>;
