//! Filesystem primitives shared across features.

pub mod copy;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub use copy::{CopyFailure, CopySummary, copy_path_filtered, copy_tree_filtered};

/// Entry names never propagated into a destination, matched at any depth.
pub const EXCLUDED_NAMES: &[&str] = &[".git", ".DS_Store", "__pycache__"];

/// Whether an entry name is on the copy denylist.
pub fn is_excluded(name: &OsStr) -> bool {
    EXCLUDED_NAMES.iter().any(|excluded| name == OsStr::new(excluded))
}

/// Existence check that treats any I/O error as "absent".
pub async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Whether `path` exists and is a directory.
pub async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// Recursively create `path` and all of its parents.
pub async fn ensure_dir(path: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(path).await
}

/// Express `path` relative to `base` for display, falling back to `path`.
pub fn relative_to(base: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
