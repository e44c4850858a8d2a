//! Read-only filesystem abstraction for ferret.
//!
//! This crate provides a `FileSystem` trait scoped to a project root. The
//! scanner and dependency extractor only ever see this trait, so tests can
//! swap the real disk for an in-memory tree (including directories that
//! refuse to be listed).
//!
//! # Example
//!
//! ```no_run
//! use ferret_fs::{FileSystem, NativeFileSystem};
//! use std::path::Path;
//!
//! # fn main() -> std::io::Result<()> {
//! let fs = NativeFileSystem::new(".")?;
//! for entry in fs.read_dir(Path::new("."))? {
//!     println!("{} ({} bytes)", entry.name, entry.metadata.size);
//! }
//! # Ok(())
//! # }
//! ```

mod file_system;
pub use file_system::{normalize_lexically, DirEntry, FileMetadata, FileSystem};

pub mod native;
pub use native::NativeFileSystem;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "memory")]
pub use memory::MemoryFileSystem;
