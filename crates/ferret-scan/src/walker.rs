//! Bounded, depth-first directory walk

use crate::constants::{ALLOWED_DOTFILES, SKIP_DIRS};
use ferret_core::{ScanNode, NO_EXTENSION};
use ferret_fs::{DirEntry, FileSystem};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Whether an entry is left out of trees and counts.
///
/// Dot entries are skipped unless allow-listed; directories on the
/// deny-list are skipped regardless of depth.
pub fn is_skipped(name: &str, is_dir: bool) -> bool {
    if name.starts_with('.') && !ALLOWED_DOTFILES.contains(&name) {
        return true;
    }
    is_dir && SKIP_DIRS.contains(&name)
}

/// Lowercased extension with its leading dot, or [`NO_EXTENSION`].
pub fn extension_label(name: &str) -> String {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_lowercase()),
        _ => NO_EXTENSION.to_string(),
    }
}

/// List a directory with skipped entries removed, directories first,
/// then by case-insensitive name.
pub(crate) fn visible_entries<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<DirEntry> = fs
        .read_dir(dir)?
        .into_iter()
        .filter(|entry| {
            let skipped = is_skipped(&entry.name, entry.metadata.is_dir);
            if skipped {
                debug!(path = %entry.path.display(), "skipping entry");
            }
            !skipped
        })
        .collect();
    entries.sort_by_cached_key(|entry| (!entry.metadata.is_dir, entry.name.to_lowercase()));
    Ok(entries)
}

/// Walk the tree under `root`. The root is depth 0; a directory deeper
/// than `max_depth` is returned as a truncated node without being listed.
pub fn walk_tree<F: FileSystem + ?Sized>(fs: &F, root: &Path, max_depth: usize) -> ScanNode {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    walk_dir(fs, root, name, 0, max_depth)
}

fn walk_dir<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    name: String,
    depth: usize,
    max_depth: usize,
) -> ScanNode {
    if depth > max_depth {
        return ScanNode::truncated(name);
    }

    let entries = match visible_entries(fs, dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot list directory");
            let mut node = ScanNode::directory(name, Vec::new());
            node.error = Some(listing_error(&e));
            return node;
        }
    };

    let children = entries
        .into_iter()
        .map(|entry| {
            if entry.metadata.is_dir {
                walk_dir(fs, &entry.path, entry.name, depth + 1, max_depth)
            } else {
                let extension = extension_label(&entry.name);
                ScanNode::file(entry.name, entry.metadata.size, extension)
            }
        })
        .collect();

    ScanNode::directory(name, children)
}

fn listing_error(error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => error.to_string(),
    }
}
