//! Replacing the input file with the optimized scratch file.

use std::fs;
use std::path::Path;

use crate::error::{OptimizeError, Result};

/// How `optimize_in_place` moves the scratch file over the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ReplaceStrategy {
    /// Remove the input, then rename the scratch file into its place.
    ///
    /// If the rename fails the input is already gone and only the scratch
    /// file remains.
    #[default]
    RemoveThenRename,
    /// Rename the scratch file over the input in one step.
    ///
    /// Atomic where the filesystem replaces the destination on rename.
    AtomicRename,
}

/// Move `temp` to `target` using the given strategy.
///
/// Nothing is rolled back on failure.
pub fn replace_file(temp: &Path, target: &Path, strategy: ReplaceStrategy) -> Result<()> {
    if strategy == ReplaceStrategy::RemoveThenRename {
        fs::remove_file(target).map_err(|e| OptimizeError::filesystem("remove", target, e))?;
        log::debug!("Removed {}", target.display());
    }

    fs::rename(temp, target).map_err(|e| OptimizeError::filesystem("rename", temp, e))?;
    log::info!("Replaced {} with {}", target.display(), temp.display());

    Ok(())
}
