use std::path::{self, Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::Error;

/// Recursive traversal returning the absolute path of every file under
/// `root` whose name ends with `suffix`. Order follows the filesystem's
/// enumeration. Symlinks are not followed; links to directories are skipped
/// like directories. Traversal errors (missing root,
/// unreadable directory) are returned as-is.
pub fn find_files_with_suffix(root: &Path, suffix: &str) -> Result<Vec<PathBuf>, Error> {
    let root = path::absolute(root)?;
    debug!("Walking {} for *{}", root.display(), suffix);

    let mut matched = Vec::new();
    for entry in WalkDir::new(&root).min_depth(1) {
        let entry = entry?;
        // Links are not followed, so a link to a directory shows up as a link.
        if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(suffix) {
            trace!("Matched {}", entry.path().display());
            matched.push(entry.into_path());
        }
    }

    Ok(matched)
}
