//! Native filesystem implementation using std::fs.

use crate::file_system::scoped_path;
use crate::{DirEntry, FileMetadata, FileSystem};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Native filesystem scoped to a project root.
///
/// Symbolic links are followed by default when reporting metadata, so a
/// link to a directory is listed as a directory. Walkers must bound their
/// depth; link cycles are not detected here.
#[derive(Debug, Clone)]
pub struct NativeFileSystem {
    project_root: PathBuf,
    follow_symlinks: bool,
}

impl NativeFileSystem {
    /// Create a new native filesystem scoped to a project root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root doesn't exist or can't be canonicalized.
    pub fn new(project_root: impl AsRef<Path>) -> io::Result<Self> {
        let project_root = project_root.as_ref().canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!(
                    "Project root does not exist: {}",
                    project_root.as_ref().display()
                ),
            )
        })?;

        Ok(Self {
            project_root,
            follow_symlinks: true,
        })
    }

    /// Report symlinks as themselves instead of their targets.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    fn stat(&self, path: &Path) -> io::Result<FileMetadata> {
        let link_meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileMetadata::missing()),
            Err(e) => return Err(e),
        };
        let is_symlink = link_meta.file_type().is_symlink();

        // Dangling links fall back to the link itself.
        let meta = if is_symlink && self.follow_symlinks {
            fs::metadata(path).unwrap_or(link_meta)
        } else {
            link_meta
        };

        Ok(FileMetadata {
            exists: true,
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
            is_symlink,
            size: if meta.is_file() { meta.len() } else { 0 },
        })
    }
}

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        let validated = scoped_path(&self.project_root, path)?;
        Ok(validated.exists())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let validated = scoped_path(&self.project_root, path)?;
        fs::read_to_string(validated)
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let validated = scoped_path(&self.project_root, path)?;
        self.stat(&validated)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let validated = scoped_path(&self.project_root, path)?;
        let mut entries = Vec::new();
        for entry in fs::read_dir(&validated)? {
            let entry = entry?;
            let path = entry.path();
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                metadata: self.stat(&path)?,
                path,
            });
        }
        Ok(entries)
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }
}
