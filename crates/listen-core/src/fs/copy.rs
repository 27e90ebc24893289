//! Best-effort recursive copy with a name denylist.
//!
//! Every entry is copied independently: a failure on one file or directory
//! is recorded in the returned [`CopySummary`] and the walk continues with
//! its siblings. Nothing at the destination is ever removed.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::is_excluded;

/// A single entry that could not be copied.
#[derive(Debug)]
pub struct CopyFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

impl fmt::Display for CopyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Outcome of a filtered copy.
#[derive(Debug, Default)]
pub struct CopySummary {
    /// Regular files written to the destination
    pub files_copied: usize,
    /// Entries skipped because their name is on the denylist
    pub excluded: usize,
    /// Entries that failed, each isolated from the rest of the walk
    pub failures: Vec<CopyFailure>,
}

impl CopySummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, path: &Path, error: io::Error) {
        self.failures.push(CopyFailure {
            path: path.to_path_buf(),
            error,
        });
    }
}

/// Copy the contents of directory `src` into `dst`, creating `dst` as needed.
///
/// Entries whose name is on the denylist are skipped at any depth. Symlinks
/// to files are copied as regular files; symlinked directories are reported
/// as failures rather than followed.
pub async fn copy_tree_filtered(src: &Path, dst: &Path) -> CopySummary {
    let mut summary = CopySummary::default();
    let mut pending = vec![(src.to_path_buf(), dst.to_path_buf())];

    while let Some((from_dir, to_dir)) = pending.pop() {
        if let Err(err) = tokio::fs::create_dir_all(&to_dir).await {
            summary.fail(&to_dir, err);
            continue;
        }

        let mut entries = match tokio::fs::read_dir(&from_dir).await {
            Ok(entries) => entries,
            Err(err) => {
                summary.fail(&from_dir, err);
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => {
                    summary.fail(&from_dir, err);
                    break;
                }
            };

            let name = entry.file_name();
            if is_excluded(&name) {
                summary.excluded += 1;
                continue;
            }

            let from = entry.path();
            let to = to_dir.join(&name);
            match resolve_kind(&entry).await {
                Ok(EntryKind::Dir) => pending.push((from, to)),
                Ok(EntryKind::File) => copy_file(&from, &to, &mut summary).await,
                Ok(EntryKind::Unsupported) => summary.fail(
                    &from,
                    io::Error::new(io::ErrorKind::Unsupported, "unsupported entry type"),
                ),
                Err(err) => summary.fail(&from, err),
            }
        }
    }

    summary
}

/// Copy a single path, file or directory, into `dst`.
///
/// The denylist applies to `src` itself as well as everything below it.
/// `src` is not followed when it is a symlink to a directory.
pub async fn copy_path_filtered(src: &Path, dst: &Path) -> CopySummary {
    let mut summary = CopySummary::default();

    if src.file_name().is_some_and(is_excluded) {
        summary.excluded += 1;
        return summary;
    }

    match top_level_kind(src).await {
        Ok(EntryKind::Dir) => copy_tree_filtered(src, dst).await,
        Ok(EntryKind::File) => {
            if let Some(parent) = dst.parent()
                && let Err(err) = tokio::fs::create_dir_all(parent).await
            {
                summary.fail(parent, err);
                return summary;
            }
            copy_file(src, dst, &mut summary).await;
            summary
        }
        Ok(EntryKind::Unsupported) => {
            summary.fail(
                src,
                io::Error::new(io::ErrorKind::Unsupported, "unsupported entry type"),
            );
            summary
        }
        Err(err) => {
            summary.fail(src, err);
            summary
        }
    }
}

enum EntryKind {
    Dir,
    File,
    Unsupported,
}

async fn resolve_kind(entry: &tokio::fs::DirEntry) -> io::Result<EntryKind> {
    classify(entry.file_type().await?, &entry.path()).await
}

async fn top_level_kind(path: &Path) -> io::Result<EntryKind> {
    let meta = tokio::fs::symlink_metadata(path).await?;
    classify(meta.file_type(), path).await
}

/// Symlinks to files are followed; symlinks to directories are refused.
async fn classify(ty: std::fs::FileType, path: &Path) -> io::Result<EntryKind> {
    if ty.is_dir() {
        return Ok(EntryKind::Dir);
    }
    if ty.is_file() {
        return Ok(EntryKind::File);
    }
    if ty.is_symlink() {
        let target = tokio::fs::metadata(path).await?;
        if target.is_file() {
            return Ok(EntryKind::File);
        }
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symlinked directories are not copied",
        ));
    }
    Ok(EntryKind::Unsupported)
}

async fn copy_file(from: &Path, to: &Path, summary: &mut CopySummary) {
    match tokio::fs::copy(from, to).await {
        Ok(_) => summary.files_copied += 1,
        Err(err) => summary.fail(from, err),
    }
}
