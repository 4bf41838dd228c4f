use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to remove {}: {}", path.display(), source)]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
