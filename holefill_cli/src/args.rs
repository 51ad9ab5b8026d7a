use std::path::{Path, PathBuf};

use clap::Parser;
use holefill::{Connectivity, FillConfig};

use crate::error::RunError;

#[derive(Parser, Debug, Clone)]
#[command(name = "holefill")]
#[command(version, about = "Fill a masked hole in every image of a directory", long_about = None)]
pub struct Args {
    /// Directory containing the images to process
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory receiving the filled images (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Mask image; dark pixels mark the hole
    #[arg(short, long, value_name = "FILE")]
    pub mask: PathBuf,

    /// Boundary pixel connectivity (4 or 8)
    #[arg(short, long, value_name = "4|8")]
    pub connectivity: Option<u32>,

    /// Weight kernel epsilon; non-positive values fall back to 0.01
    #[arg(short = 'e', long = "epsilon", allow_negative_numbers = true)]
    pub e: Option<f32>,

    /// Weight kernel distance exponent
    #[arg(short = 'z', long = "exponent", allow_negative_numbers = true)]
    pub z: Option<f32>,

    /// Normalized hole threshold in [0, 1]
    #[arg(long, value_name = "FLOAT")]
    pub threshold: Option<f32>,

    /// Value stamped into hole pixels before filling
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub hole_value: Option<f32>,

    /// YAML or JSON fill configuration; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of images processed at once
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Directory for rotated log files
    #[arg(long, value_name = "DIR", default_value = "logs")]
    pub log_dir: PathBuf,
}

impl Args {
    /// Resolves the fill configuration: file values (or defaults) overridden
    /// by any flag given on the command line.
    pub fn fill_config(&self) -> Result<FillConfig, RunError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => FillConfig::default(),
        };

        if let Some(connectivity) = self.connectivity {
            config.connectivity =
                Connectivity::try_from(connectivity).map_err(RunError::InvalidConfig)?;
        }
        if let Some(e) = self.e {
            config.e = e;
        }
        if let Some(z) = self.z {
            config.z = z;
        }
        if let Some(threshold) = self.threshold {
            config.intensity_threshold = threshold;
        }
        if let Some(hole_value) = self.hole_value {
            config.hole_value = hole_value;
        }

        config.validate().map_err(RunError::InvalidConfig)?;
        Ok(config)
    }

    pub fn jobs(&self) -> usize {
        self.jobs
            .filter(|&jobs| jobs > 0)
            .unwrap_or_else(common::parallel::default_parallelism)
    }
}

fn load_config(path: &Path) -> Result<FillConfig, RunError> {
    let format = common::FileFormat::from_path(path).map_err(|source| RunError::Config {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|source| RunError::Config {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    let config = common::deserialize(&text, format).map_err(|source| RunError::Config {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    tracing::debug!(path = %path.display(), "Loaded fill configuration");
    Ok(config)
}
