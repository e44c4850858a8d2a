//! Project-type, entry-point and config-file detection
//!
//! All checks look at fixed paths relative to the project root; nothing
//! here walks the tree.

use crate::constants::{ENTRY_POINT_CANDIDATES, KEY_CONFIG_FILES, PROJECT_INDICATORS};
use ferret_core::ProjectType;
use ferret_fs::FileSystem;
use std::path::Path;
use tracing::debug;

fn present<F: FileSystem + ?Sized>(fs: &F, relative: &str) -> bool {
    match fs.exists(Path::new(relative)) {
        Ok(found) => found,
        Err(e) => {
            debug!(path = relative, error = %e, "treating unreadable path as absent");
            false
        }
    }
}

/// Detect project types from root indicator files.
///
/// Every indicator contributes its type once, in table order. Without any
/// indicator, `package.json` means node, then `index.html` means static,
/// otherwise the result is `[unknown]`.
pub fn detect_project_types<F: FileSystem + ?Sized>(fs: &F) -> Vec<ProjectType> {
    let mut types = Vec::new();
    for (file, project_type) in PROJECT_INDICATORS {
        if present(fs, file) && !types.contains(project_type) {
            types.push(*project_type);
        }
    }

    if types.is_empty() {
        let fallback = if present(fs, "package.json") {
            ProjectType::Node
        } else if present(fs, "index.html") {
            ProjectType::Static
        } else {
            ProjectType::Unknown
        };
        types.push(fallback);
    }

    types
}

/// Conventional entry files that exist, in candidate order.
pub fn find_entry_points<F: FileSystem + ?Sized>(fs: &F) -> Vec<String> {
    existing(fs, ENTRY_POINT_CANDIDATES)
}

/// Well-known configuration files present at the root.
pub fn find_config_files<F: FileSystem + ?Sized>(fs: &F) -> Vec<String> {
    existing(fs, KEY_CONFIG_FILES)
}

fn existing<F: FileSystem + ?Sized>(fs: &F, candidates: &[&str]) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| present(fs, candidate))
        .map(|candidate| candidate.to_string())
        .collect()
}
