use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Error;

/// Permanently delete the file at `path`.
pub fn remove_file(path: &Path) -> Result<(), Error> {
    fs::remove_file(path).map_err(|source| Error::Remove {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Removed {}", path.display());
    Ok(())
}

/// True if `path` exists and is a regular file.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
