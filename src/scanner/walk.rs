use crate::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directories a run should visit, in the order they are visited.
///
/// Without `recursive` this is just `root`. Otherwise the whole tree under `root`
/// is walked (root first, siblings by file name) and any directory whose name below
/// the root is hidden is skipped together with everything beneath it.
pub fn directories_to_scan(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, Error> {
    if !recursive {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut dirs = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden_dir(entry));

    for entry in walker {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    debug!("{} directories to scan under {}", dirs.len(), root.display());
    Ok(dirs)
}

/// A dot followed by at least one word character: `.cache`, `._x`, `.2`.
/// `.` and `..` are not hidden.
pub fn is_hidden_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('.')
        && chars
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    // The root is always scanned, whatever it is called.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let hidden = entry.file_name().to_str().is_some_and(is_hidden_name);
    if hidden {
        debug!("Skipping hidden directory {}", entry.path().display());
    }
    hidden
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    let source = match err.into_io_error() {
        Some(source) => source,
        None => io::Error::other("filesystem loop detected"),
    };
    Error::Enumeration { path, source }
}
