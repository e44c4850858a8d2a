//! FileSystem trait for read-only, root-scoped filesystem access.

use std::io;
use std::path::{Component, Path, PathBuf};

/// File metadata compatible across implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Whether the path exists.
    pub exists: bool,
    /// Whether the path is a file (false if directory or doesn't exist).
    pub is_file: bool,
    /// Whether the path is a directory.
    pub is_dir: bool,
    /// Whether the path itself is a symbolic link.
    pub is_symlink: bool,
    /// File size in bytes (0 for directories or non-existent files).
    pub size: u64,
}

impl FileMetadata {
    /// Metadata for a path that does not exist.
    pub fn missing() -> Self {
        Self {
            exists: false,
            is_file: false,
            is_dir: false,
            is_symlink: false,
            size: 0,
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name (lossily converted to UTF-8).
    pub name: String,
    /// Absolute path of the entry.
    pub path: PathBuf,
    pub metadata: FileMetadata,
}

/// Read-only filesystem scoped to a project root.
///
/// Relative paths are resolved against [`FileSystem::project_root`]; paths
/// that escape the root are rejected with `PermissionDenied`.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Read file contents as a string.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::NotFound` if file doesn't exist.
    /// Returns `io::ErrorKind::InvalidData` if file is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Get file/directory metadata.
    ///
    /// Returns metadata even if the file doesn't exist (exists=false).
    fn metadata(&self, path: &Path) -> io::Result<FileMetadata>;

    /// List the direct children of a directory, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::PermissionDenied` when the directory cannot
    /// be listed; callers decide whether that aborts anything.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Get the project root this filesystem is scoped to.
    fn project_root(&self) -> &Path;
}

/// Syntactic normalization: drops `.` and resolves `..` without touching
/// the disk.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                components.clear();
                components.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            Component::Normal(_) => components.push(component),
        }
    }
    components.iter().collect()
}

/// Resolve `path` against `root` and verify it stays inside it.
pub(crate) fn scoped_path(root: &Path, path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    let normalized = normalize_lexically(&absolute);
    if !normalized.starts_with(root) {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!(
                "Path traversal detected: {} is outside project root {}",
                normalized.display(),
                root.display()
            ),
        ));
    }
    Ok(normalized)
}
