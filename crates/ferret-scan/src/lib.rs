//! Ferret Scan - codebase structure and convention detection
//!
//! A scan answers four questions about a project root without executing
//! anything:
//!
//! - what kind of project is this ([`detect_project_types`])
//! - where does it start ([`find_entry_points`])
//! - what is it made of ([`count_extensions`], [`walk_tree`])
//! - what does it depend on (`ferret_deps::extract_dependencies`)
//!
//! Scans are read-only and run against any [`FileSystem`], so the same
//! code scans a real checkout or an in-memory fixture.
//!
//! # Example
//!
//! ```no_run
//! use ferret_scan::{ScanOptions, Scanner};
//!
//! # fn main() -> ferret_core::Result<()> {
//! let scanner = Scanner::open("./my-site", true)?;
//! let report = scanner.scan(&ScanOptions::default());
//! println!("{:?}", report.summary.project_types);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod detection;
pub mod extensions;
pub mod walker;

pub use constants::DEFAULT_MAX_DEPTH;
pub use detection::{detect_project_types, find_config_files, find_entry_points};
pub use extensions::count_extensions;
pub use walker::{extension_label, is_skipped, walk_tree};

use ferret_core::{Error, Result, ScanNode, ScanReport, ScanSummary};
use ferret_deps::extract_dependencies;
use ferret_fs::{FileSystem, NativeFileSystem};
use std::io;
use std::path::Path;
use tracing::debug;

/// Options for a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Depth bound of the tree walk (root = 0)
    pub max_depth: usize,
    /// Depth bound for extension counting; `None` uses `max_depth`
    pub extension_depth: Option<usize>,
    /// Include the full directory tree in the report
    pub include_structure: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            extension_depth: None,
            include_structure: false,
        }
    }
}

impl ScanOptions {
    fn extension_depth(&self) -> usize {
        self.extension_depth.unwrap_or(self.max_depth)
    }
}

/// Scans the project root of a filesystem
pub struct Scanner<F: FileSystem> {
    fs: F,
}

impl Scanner<NativeFileSystem> {
    /// Open a scanner on a directory of the local disk
    ///
    /// # Errors
    ///
    /// [`Error::PathNotFound`] when `root` does not exist and
    /// [`Error::InvalidPath`] when it is not a directory.
    pub fn open(root: impl AsRef<Path>, follow_symlinks: bool) -> Result<Self> {
        let root = root.as_ref();
        let fs = NativeFileSystem::new(root)
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::PathNotFound {
                    path: root.to_path_buf(),
                },
                _ => Error::Io(e),
            })?
            .with_follow_symlinks(follow_symlinks);

        if !fs.project_root().is_dir() {
            return Err(Error::InvalidPath {
                path: root.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }
        Ok(Self::new(fs))
    }
}

impl<F: FileSystem> Scanner<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn root(&self) -> &Path {
        self.fs.project_root()
    }

    /// Project types, entry points, extension counts and dependencies
    pub fn summary(&self, options: &ScanOptions) -> ScanSummary {
        let summary = ScanSummary {
            project_types: detect_project_types(&self.fs),
            entry_points: find_entry_points(&self.fs),
            file_counts: count_extensions(&self.fs, self.root(), options.extension_depth()),
            dependencies: extract_dependencies(&self.fs),
        };
        debug!(
            root = %self.root().display(),
            types = ?summary.project_types,
            extensions = summary.file_counts.len(),
            "scanned project"
        );
        summary
    }

    /// The directory tree down to `max_depth`
    pub fn tree(&self, max_depth: usize) -> ScanNode {
        walk_tree(&self.fs, self.root(), max_depth)
    }

    /// Key configuration files present at the root
    pub fn config_files(&self) -> Vec<String> {
        find_config_files(&self.fs)
    }

    /// Full scan report
    pub fn scan(&self, options: &ScanOptions) -> ScanReport {
        ScanReport {
            path: self.root().to_path_buf(),
            summary: self.summary(options),
            structure: options
                .include_structure
                .then(|| self.tree(options.max_depth)),
        }
    }
}
