//! Locate the repository root by ascending from a start directory.

use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::error::ResolveError;

/// Find the nearest ancestor of `start_dir` (inclusive) holding a `.git` entry.
///
/// `start_dir` is made absolute before the first check, so `.` and other
/// relative inputs work. A file starts the search from its directory. The ascent stops once the next parent would be the
/// filesystem root; the root itself is only checked when it is the start.
pub fn find_repo_root(start_dir: &Path) -> Result<PathBuf, ResolveError> {
    let start = absolute_clean(start_dir).map_err(|source| ResolveError::AbsolutePath {
        path: start_dir.to_path_buf(),
        source,
    })?;

    if !start.exists() {
        return Err(ResolveError::MissingDirectory(start));
    }

    let mut dir = start.clone();
    if dir.is_file() {
        dir.pop();
    }
    loop {
        debug!("Searching for git dir in \"{}\"", dir.display());
        if dir.join(".git").exists() {
            return Ok(dir);
        }

        // Stop once the next candidate would be the filesystem root.
        if !dir.pop() || dir.parent().is_none() {
            return Err(ResolveError::NotFound(start));
        }
    }
}

/// Make `path` absolute and drop `.`/`..` components lexically.
fn absolute_clean(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    Ok(cleaned)
}
