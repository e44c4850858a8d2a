//! # ferret-deps
//!
//! Declared-dependency extraction for project roots.
//!
//! This crate reads the two manifests ferret understands:
//! - `package.json`: `dependencies` and `devDependencies` names, in the
//!   order they are declared
//! - `requirements.txt`: package names with version specifiers stripped
//!
//! Nothing is resolved or fetched. A manifest that fails to parse is
//! reported through `tracing` and left out of the result.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ferret_deps::extract_dependencies;
//! use ferret_fs::NativeFileSystem;
//!
//! # fn example() -> std::io::Result<()> {
//! let fs = NativeFileSystem::new("./my-site")?;
//! let deps = extract_dependencies(&fs);
//! if let Some(npm) = &deps.npm {
//!     println!("{} production dependencies", npm.dependencies.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod npm;
pub mod python;

pub use error::{Error, Result};
pub use npm::{parse_package_json, PACKAGE_JSON};
pub use python::{parse_requirements, REQUIREMENTS_TXT};

use ferret_core::Dependencies;
use ferret_fs::FileSystem;
use std::path::Path;
use tracing::{debug, warn};

/// Collect dependencies declared at the root of `fs`.
///
/// Each manifest contributes only if it exists and can be read (and, for
/// `package.json`, parsed). Failures never abort the extraction.
pub fn extract_dependencies<F: FileSystem + ?Sized>(fs: &F) -> Dependencies {
    Dependencies {
        npm: read_manifest(fs, PACKAGE_JSON).and_then(|content| {
            let path = fs.project_root().join(PACKAGE_JSON);
            match parse_package_json(&path, &content) {
                Ok(deps) => Some(deps),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring unreadable package.json");
                    None
                }
            }
        }),
        python: read_manifest(fs, REQUIREMENTS_TXT).map(|content| parse_requirements(&content)),
    }
}

/// Read a root-level manifest, `None` when absent or unreadable
fn read_manifest<F: FileSystem + ?Sized>(fs: &F, name: &str) -> Option<String> {
    let path = Path::new(name);
    match fs.metadata(path) {
        Ok(meta) if meta.is_file => {}
        Ok(_) => return None,
        Err(e) => {
            warn!(manifest = name, error = %e, "cannot stat manifest");
            return None;
        }
    }

    match fs.read_to_string(path) {
        Ok(content) => {
            debug!(manifest = name, bytes = content.len(), "read manifest");
            Some(content)
        }
        Err(e) => {
            warn!(manifest = name, error = %e, "cannot read manifest");
            None
        }
    }
}

