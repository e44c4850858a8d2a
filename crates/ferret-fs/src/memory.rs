//! In-memory filesystem implementation.

use crate::file_system::scoped_path;
use crate::{normalize_lexically, DirEntry, FileMetadata, FileSystem};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// In-memory filesystem.
///
/// Files and directories are registered up front. Directories can be marked
/// as unreadable to simulate permission errors without touching real file
/// modes (which root ignores).
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<..>>` for interior mutability:
/// - Multiple concurrent readers (common case)
/// - Exclusive writer (rare: only during setup)
#[derive(Clone)]
pub struct MemoryFileSystem {
    project_root: PathBuf,
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFileSystem {
    /// Create an empty filesystem rooted at `project_root` (e.g. "/project").
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        let project_root = normalize_lexically(project_root.as_ref());
        let mut state = MemoryState::default();
        state.dirs.insert(project_root.clone());
        Self {
            project_root,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Add a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> io::Result<()> {
        let path = scoped_path(&self.project_root, path.as_ref())?;
        let mut state = self.state.write();
        Self::insert_parents(&mut state, &self.project_root, &path);
        state.files.insert(path, contents.into());
        Ok(())
    }

    /// Add an (empty) directory, creating its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = scoped_path(&self.project_root, path.as_ref())?;
        let mut state = self.state.write();
        Self::insert_parents(&mut state, &self.project_root, &path);
        state.dirs.insert(path);
        Ok(())
    }

    /// Make listing `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = scoped_path(&self.project_root, path.as_ref())?;
        self.state.write().denied.insert(path);
        Ok(())
    }

    fn insert_parents(state: &mut MemoryState, root: &Path, path: &Path) {
        let mut current = path.parent();
        while let Some(dir) = current {
            if !dir.starts_with(root) {
                break;
            }
            state.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }

    fn stat(state: &MemoryState, path: &Path) -> FileMetadata {
        if let Some(contents) = state.files.get(path) {
            FileMetadata {
                exists: true,
                is_file: true,
                is_dir: false,
                is_symlink: false,
                size: contents.len() as u64,
            }
        } else if state.dirs.contains(path) {
            FileMetadata {
                exists: true,
                is_file: false,
                is_dir: true,
                is_symlink: false,
                size: 0,
            }
        } else {
            FileMetadata::missing()
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        let path = scoped_path(&self.project_root, path)?;
        let state = self.state.read();
        Ok(state.files.contains_key(&path) || state.dirs.contains(&path))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let path = scoped_path(&self.project_root, path)?;
        let state = self.state.read();
        let bytes = state.files.get(&path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        String::from_utf8(bytes.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
        let path = scoped_path(&self.project_root, path)?;
        Ok(Self::stat(&self.state.read(), &path))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let path = scoped_path(&self.project_root, path)?;
        let state = self.state.read();

        if state.denied.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            ));
        }
        if !state.dirs.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Directory not found: {}", path.display()),
            ));
        }

        let children = state
            .dirs
            .iter()
            .chain(state.files.keys())
            .filter(|candidate| candidate.parent() == Some(path.as_path()));

        Ok(children
            .map(|child| DirEntry {
                name: child
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: child.clone(),
                metadata: Self::stat(&state, child),
            })
            .collect())
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }
}
