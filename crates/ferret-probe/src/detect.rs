//! Build-type detection

use ferret_core::ProjectType;
use ferret_fs::FileSystem;
use std::path::Path;

/// Root indicator files, highest priority first. The first one present
/// decides the build type.
pub const BUILD_INDICATORS: &[(&str, ProjectType)] = &[
    ("next.config.js", ProjectType::Nextjs),
    ("next.config.mjs", ProjectType::Nextjs),
    ("vite.config.js", ProjectType::Vite),
    ("vite.config.ts", ProjectType::Vite),
    ("package.json", ProjectType::Node),
    ("index.html", ProjectType::Static),
];

/// Detect how a project is built, `Unknown` when no indicator is present.
pub fn detect_build_type<F: FileSystem + ?Sized>(fs: &F) -> ProjectType {
    BUILD_INDICATORS
        .iter()
        .find(|(file, _)| fs.exists(Path::new(file)).unwrap_or(false))
        .map(|(_, project_type)| *project_type)
        .unwrap_or(ProjectType::Unknown)
}

/// Project types built through npm (and therefore needing `node_modules`).
pub fn is_npm_project(project_type: ProjectType) -> bool {
    matches!(
        project_type,
        ProjectType::Nextjs | ProjectType::Vite | ProjectType::Node
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferret_fs::MemoryFileSystem;

    fn detect(files: &[&str]) -> ProjectType {
        let fs = MemoryFileSystem::new("/p");
        for file in files {
            fs.add_file(file, "").unwrap();
        }
        detect_build_type(&fs)
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            detect(&["index.html", "package.json", "vite.config.ts", "next.config.mjs"]),
            ProjectType::Nextjs
        );
        assert_eq!(
            detect(&["index.html", "package.json", "vite.config.js"]),
            ProjectType::Vite
        );
        assert_eq!(detect(&["index.html", "package.json"]), ProjectType::Node);
        assert_eq!(detect(&["index.html"]), ProjectType::Static);
        assert_eq!(detect(&["README.md"]), ProjectType::Unknown);
    }

    #[test]
    fn test_next_config_ts_is_not_a_build_indicator() {
        assert_eq!(detect(&["next.config.ts"]), ProjectType::Unknown);
    }

    #[test]
    fn test_npm_family() {
        assert!(is_npm_project(ProjectType::Vite));
        assert!(!is_npm_project(ProjectType::Static));
        assert!(!is_npm_project(ProjectType::Unknown));
    }
}
