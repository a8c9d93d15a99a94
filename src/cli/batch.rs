//! Converting all files in a folder
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use bitgrid::Layout;
use color_eyre::eyre::{self, eyre, WrapErr};
use log::{debug, error};
use thiserror::Error;

use super::convert::{output_path, Direction};

/// The outcome of converting a folder
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of files that were converted
    pub converted: usize,
    /// Files that could not be converted
    pub failed: Vec<PathBuf>,
}

impl BatchSummary {
    /// Number of files that were attempted
    pub fn total(&self) -> usize {
        self.converted + self.failed.len()
    }
}

/// Some files of a folder could not be converted
#[derive(Debug, Error)]
#[error("Failed to convert {failed} of {total} files")]
pub struct BatchError {
    failed: usize,
    total: usize,
}

impl From<BatchSummary> for BatchError {
    fn from(summary: BatchSummary) -> Self {
        BatchError {
            failed: summary.failed.len(),
            total: summary.total(),
        }
    }
}

/// List the regular files in `folder`, sorted by name
///
/// Subdirectories are skipped, their contents are not visited.
pub fn list_files(folder: &Path) -> eyre::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder)
        .wrap_err_with(|| format!("Failed to read folder `{}`", folder.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping '{}'", path.display());
        }
    }
    files.sort();
    Ok(files)
}

/// Convert every file in `folder` into `out_dir`
///
/// A file that fails is reported and skipped, the others are still converted.
/// Files that map to an output already written in this run (`a.bin` and
/// `a.txt` both become `a.png`) count as failures and are not written.
pub fn convert_folder(
    direction: Direction,
    folder: &Path,
    out_dir: &Path,
    layout: Layout,
) -> eyre::Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut written = HashSet::new();
    for path in list_files(folder)? {
        let result = output_path(direction, &path, out_dir).and_then(|target| {
            if written.contains(&target) {
                return Err(eyre!(
                    "Skipping `{}`, it would overwrite '{}'",
                    path.display(),
                    target.display()
                ));
            }
            let out_path = direction.convert(&path, out_dir, layout)?;
            written.insert(out_path);
            Ok(())
        });
        match result {
            Ok(()) => summary.converted += 1,
            Err(err) => {
                error!("{:#}", err);
                summary.failed.push(path);
            }
        }
    }
    Ok(summary)
}
