//! Directory batch: classify the mask once, then fill every input file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use holefill::{Error as FillError, HoleFiller};

use crate::args::Args;
use crate::error::RunError;
use crate::io;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
}

pub fn run(args: &Args) -> Result<BatchSummary, RunError> {
    let config = args.fill_config()?;

    std::fs::create_dir_all(&args.output_dir).map_err(|source| RunError::OutputDir {
        path: args.output_dir.clone(),
        source,
    })?;

    let mask = io::load(&args.mask).map_err(|source| RunError::MaskLoad {
        path: args.mask.clone(),
        source,
    })?;
    let invalid_mask = |source: FillError| RunError::InvalidMask {
        path: args.mask.clone(),
        source,
    };
    let mask_raw = mask.raw().map_err(invalid_mask)?;
    let filler = HoleFiller::new(&mask_raw, &config).map_err(|source| match source {
        FillError::DegenerateFill { .. } => invalid_mask(source),
        other => RunError::InvalidConfig(other),
    })?;

    let files = list_files(&args.input_dir)?;
    let total = files.len();
    tracing::info!(
        "Processing {} files from {} with up to {} in flight",
        total,
        args.input_dir.display(),
        args.jobs()
    );

    let indexed: Vec<(usize, PathBuf)> = files.into_iter().enumerate().collect();
    let results = common::parallel::par_map_limited(&indexed, args.jobs(), |(index, path)| {
        tracing::info!("{}/{}: {}", index + 1, total, path.display());
        process_file(&filler, path, &args.output_dir)
    });

    let mut summary = BatchSummary::default();
    for ((_, path), result) in indexed.iter().zip(results) {
        match result {
            Ok(output) => {
                tracing::debug!("Saved {}", output.display());
                summary.processed += 1;
            }
            Err(err) => {
                tracing::warn!("Skipping {}: {:#}", path.display(), err);
                summary.skipped += 1;
            }
        }
    }

    tracing::info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "Batch complete"
    );
    Ok(summary)
}

/// Regular files of `dir`, sorted by path.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, RunError> {
    let input_dir_error = |source| RunError::InputDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(input_dir_error)? {
        let path = entry.map_err(input_dir_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn process_file(filler: &HoleFiller, path: &Path, output_dir: &Path) -> anyhow::Result<PathBuf> {
    let decoded = io::load(path).context("failed to open")?;
    let raw = decoded.raw()?;
    let values = filler.process(&raw)?;

    let file_name = path.file_name().context("input path has no file name")?;
    let output_path = output_dir.join(file_name);
    io::to_gray(&values, decoded.height, decoded.width)
        .save(&output_path)
        .with_context(|| format!("failed to save {}", output_path.display()))?;

    Ok(output_path)
}
