use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tempfile::Builder;

/// Rewrites `target` through a temporary file in the same directory.
///
/// `write` receives the temporary path and must have closed every handle it
/// opened on it before returning. Only after it succeeds is the temporary file
/// given `target`'s permissions, synced and renamed over `target`. On any
/// failure the temporary file is removed and `target` is left as it was.
pub fn replace_atomically<T, F>(target: &Path, write: F) -> Result<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp_file = Builder::new()
        .prefix(".bamghoster-")
        .suffix(".bam")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    log::debug!("Writing to temporary file {}", temp_file.path().display());

    let value = write(temp_file.path())?;

    if let Ok(metadata) = fs::metadata(target) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", target.display()))?;
    }
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;
    temp_file
        .persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", target.display()))?;

    Ok(value)
}
