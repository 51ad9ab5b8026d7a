use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that stop a run before any image is processed.
///
/// Each maps to its own process exit code (2 is left to argument parsing
/// errors reported by clap). Failures of individual images
/// are logged and skipped instead.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to load configuration '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid fill configuration: {0}")]
    InvalidConfig(#[source] holefill::Error),

    #[error("Failed to create output directory '{}': {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open mask file '{}': {source}", path.display())]
    MaskLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Mask '{}' is unusable: {source}", path.display())]
    InvalidMask {
        path: PathBuf,
        #[source]
        source: holefill::Error,
    },

    #[error("Failed to read input directory '{}': {source}", path.display())]
    InputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Config { .. } => 3,
            RunError::InvalidConfig(_) => 4,
            RunError::OutputDir { .. } => 5,
            RunError::MaskLoad { .. } => 6,
            RunError::InvalidMask { .. } => 7,
            RunError::InputDir { .. } => 8,
        }
    }
}
