//! Scanner behavior over in-memory and on-disk fixtures

use ferret_core::{Error, ProjectType, ScanNode, NO_EXTENSION};
use ferret_fs::MemoryFileSystem;
use ferret_scan::{ScanOptions, Scanner};
use std::fs;
use tempfile::TempDir;

fn names(node: &ScanNode) -> Vec<&str> {
    node.children().iter().map(|c| c.name.as_str()).collect()
}

fn nextjs_fixture() -> MemoryFileSystem {
    let fs = MemoryFileSystem::new("/site");
    fs.add_file("next.config.mjs", "export default {}").unwrap();
    fs.add_file(
        "package.json",
        r#"{"dependencies":{"next":"14","react":"18"},"devDependencies":{"eslint":"8"}}"#,
    )
    .unwrap();
    fs.add_file("tsconfig.json", "{}").unwrap();
    fs.add_file(".env.example", "API_URL=").unwrap();
    fs.add_file(".env", "SECRET=1").unwrap();
    fs.add_file("README.md", "# site").unwrap();
    fs.add_file("app/page.tsx", "export default function Page() {}").unwrap();
    fs.add_file("app/layout.tsx", "export default function Layout() {}").unwrap();
    fs.add_file("app/globals.css", "body {}").unwrap();
    fs.add_file("lib/api.ts", "export const api = 1").unwrap();
    fs.add_file("node_modules/react/index.js", "module.exports = {}").unwrap();
    fs.add_file(".next/server/app.js", "").unwrap();
    fs.add_file(".github/workflows/ci.yml", "on: push").unwrap();
    fs
}

#[test]
fn test_summary_of_nextjs_project() {
    let scanner = Scanner::new(nextjs_fixture());
    let summary = scanner.summary(&ScanOptions::default());

    assert_eq!(summary.project_types, vec![ProjectType::Nextjs]);
    assert_eq!(summary.entry_points, vec!["app/page.tsx"]);

    let counts: Vec<(&str, usize)> = summary.file_counts.iter().collect();
    // Root files come first, so .json is seen before .tsx
    assert_eq!(
        counts,
        vec![
            (".json", 2),
            (".tsx", 2),
            (".example", 1),
            (".mjs", 1),
            (".md", 1),
            (".css", 1),
            (".ts", 1),
        ]
    );

    let npm = summary.dependencies.npm.unwrap();
    assert_eq!(npm.dependencies, vec!["next", "react"]);
    assert!(summary.dependencies.python.is_none());

    assert_eq!(
        scanner.config_files(),
        vec!["package.json", "tsconfig.json", "next.config.mjs", ".env.example"]
    );
}

#[test]
fn test_tree_order_and_skips() {
    let scanner = Scanner::new(nextjs_fixture());
    let tree = scanner.tree(4);

    assert_eq!(tree.name, "site");
    assert_eq!(
        names(&tree),
        vec![
            "app",
            "lib",
            ".env.example",
            "next.config.mjs",
            "package.json",
            "README.md",
            "tsconfig.json"
        ]
    );
    let page = &tree.children()[0].children()[2];
    assert_eq!(page.name, "page.tsx");
    assert_eq!(page.extension.as_deref(), Some(".tsx"));
    assert_eq!(page.size, Some(33));
}

#[test]
fn test_only_excluded_directories() {
    let fs = MemoryFileSystem::new("/project");
    fs.add_file("node_modules/a/index.js", "").unwrap();
    fs.add_file(".git/HEAD", "ref: refs/heads/main").unwrap();
    fs.add_dir("dist").unwrap();

    let scanner = Scanner::new(fs);
    let tree = scanner.tree(4);
    assert!(tree.is_dir());
    assert_eq!(tree.children, Some(vec![]));
    assert!(tree.error.is_none());

    let summary = scanner.summary(&ScanOptions::default());
    assert!(summary.file_counts.is_empty());
    assert_eq!(summary.project_types, vec![ProjectType::Unknown]);
}

#[test]
fn test_depth_bound_truncates() {
    let fs = MemoryFileSystem::new("/project");
    fs.add_file("a/b/c/deep.txt", "x").unwrap();
    fs.add_file("top.txt", "x").unwrap();

    let scanner = Scanner::new(fs);
    let tree = scanner.tree(1);
    let a = &tree.children()[0];
    assert_eq!(a.name, "a");
    assert!(!a.truncated);
    let b = &a.children()[0];
    assert_eq!(b.name, "b");
    assert!(b.truncated);
    assert!(b.children.is_none());

    // Depth 0 only lists the root
    let root_only = scanner.summary(&ScanOptions {
        max_depth: 0,
        ..ScanOptions::default()
    });
    assert_eq!(root_only.file_counts.get(".txt"), Some(1));

    let deep = scanner.summary(&ScanOptions {
        max_depth: 0,
        extension_depth: Some(3),
        include_structure: false,
    });
    assert_eq!(deep.file_counts.get(".txt"), Some(2));
}

#[test]
fn test_unreadable_directory_is_marked() {
    let fs = MemoryFileSystem::new("/project");
    fs.add_file("private/secret.txt", "x").unwrap();
    fs.add_file("public/index.html", "<html>").unwrap();
    fs.deny("private").unwrap();

    let scanner = Scanner::new(fs);
    let tree = scanner.tree(4);
    let private = &tree.children()[0];
    assert_eq!(private.name, "private");
    assert_eq!(private.error.as_deref(), Some("Permission denied"));
    assert!(private.children().is_empty());
    // Siblings are still walked
    assert_eq!(names(&tree.children()[1]), vec!["index.html"]);

    let summary = scanner.summary(&ScanOptions::default());
    assert_eq!(summary.file_counts.get(".html"), Some(1));
    assert_eq!(summary.file_counts.get(".txt"), None);
}

#[test]
fn test_project_type_fallbacks() {
    let fs = MemoryFileSystem::new("/p");
    fs.add_file("package.json", "{}").unwrap();
    fs.add_file("index.html", "").unwrap();
    assert_eq!(
        Scanner::new(fs).summary(&ScanOptions::default()).project_types,
        vec![ProjectType::Node]
    );

    let fs = MemoryFileSystem::new("/p");
    fs.add_file("index.html", "").unwrap();
    let summary = Scanner::new(fs).summary(&ScanOptions::default());
    assert_eq!(summary.project_types, vec![ProjectType::Static]);
    assert_eq!(summary.entry_points, vec!["index.html"]);
}

#[test]
fn test_multiple_indicators_deduplicated() {
    let fs = MemoryFileSystem::new("/p");
    fs.add_file("next.config.js", "").unwrap();
    fs.add_file("next.config.ts", "").unwrap();
    fs.add_file("requirements.txt", "django==5.0\n").unwrap();
    fs.add_file("pyproject.toml", "").unwrap();
    fs.add_file("package.json", "{}").unwrap();

    let summary = Scanner::new(fs).summary(&ScanOptions::default());
    assert_eq!(
        summary.project_types,
        vec![ProjectType::Nextjs, ProjectType::Python]
    );
    assert_eq!(summary.dependencies.python, Some(vec!["django".to_string()]));
}

#[test]
fn test_files_without_extension() {
    let fs = MemoryFileSystem::new("/p");
    fs.add_file("Makefile", "").unwrap();
    fs.add_file("Dockerfile", "").unwrap();
    fs.add_file(".gitignore", "target").unwrap();

    let summary = Scanner::new(fs).summary(&ScanOptions::default());
    assert_eq!(summary.file_counts.get(NO_EXTENSION), Some(3));
}

#[test]
fn test_scan_report_on_disk() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/main.ts"), "console.log(1)").unwrap();
    fs::write(temp.path().join("vite.config.ts"), "export default {}").unwrap();

    let scanner = Scanner::open(temp.path(), true).unwrap();
    let report = scanner.scan(&ScanOptions {
        include_structure: true,
        ..ScanOptions::default()
    });

    assert_eq!(report.path, temp.path().canonicalize().unwrap());
    assert_eq!(report.summary.project_types, vec![ProjectType::Vite]);
    assert_eq!(report.summary.entry_points, vec!["src/main.ts"]);
    let structure = report.structure.unwrap();
    assert_eq!(names(&structure), vec!["src", "vite.config.ts"]);

    let without = scanner.scan(&ScanOptions::default());
    assert!(without.structure.is_none());
}

#[test]
fn test_open_missing_root() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");
    assert!(matches!(
        Scanner::open(&missing, true),
        Err(Error::PathNotFound { .. })
    ));

    let file = temp.path().join("file.txt");
    fs::write(&file, "x").unwrap();
    assert!(matches!(
        Scanner::open(&file, true),
        Err(Error::InvalidPath { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_is_bounded() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("a")).unwrap();
    std::os::unix::fs::symlink(temp.path().join("a"), temp.path().join("a/loop")).unwrap();

    let scanner = Scanner::open(temp.path(), true).unwrap();
    let tree = scanner.tree(3);

    // a (1) -> loop (2) -> loop (3) -> loop (4, truncated)
    let mut node = &tree.children()[0];
    for _ in 0..3 {
        node = &node.children()[0];
        assert_eq!(node.name, "loop");
    }
    assert!(node.truncated);
}
