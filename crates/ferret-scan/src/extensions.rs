//! File counts by extension

use crate::walker::{extension_label, visible_entries};
use ferret_core::ExtensionCounts;
use ferret_fs::FileSystem;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Count files per extension in directories at depth <= `max_depth`
/// (the root is depth 0), applying the same skip rules as the tree walk.
///
/// Counts are ordered descending; ties keep first-seen order, where the
/// walk visits each directory's files before its subdirectories.
pub fn count_extensions<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    max_depth: usize,
) -> ExtensionCounts {
    let mut tally = Tally::default();
    count_dir(fs, root, 0, max_depth, &mut tally);
    ExtensionCounts::from_first_seen(tally.counts)
}

#[derive(Default)]
struct Tally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, extension: String) {
        match self.index.get(&extension) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(extension.clone(), self.counts.len());
                self.counts.push((extension, 1));
            }
        }
    }
}

fn count_dir<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    depth: usize,
    max_depth: usize,
    tally: &mut Tally,
) {
    if depth > max_depth {
        return;
    }

    let entries = match visible_entries(fs, dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot list directory, not counted");
            return;
        }
    };

    let (dirs, files): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|entry| entry.metadata.is_dir);

    for file in &files {
        tally.add(extension_label(&file.name));
    }
    for sub in &dirs {
        count_dir(fs, &sub.path, depth + 1, max_depth, tally);
    }
}
