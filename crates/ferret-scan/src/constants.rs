//! Directory conventions recognized by the scanner

use ferret_core::ProjectType;

/// Directory names never descended into (build output, dependency caches,
/// version control).
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    "__pycache__",
    ".venv",
    "venv",
    ".tmp",
    ".cache",
    "coverage",
    ".nyc_output",
];

/// Dot entries that are still reported.
pub const ALLOWED_DOTFILES: &[&str] = &[".env.example", ".gitignore"];

/// Root-level indicator files, in detection order.
pub const PROJECT_INDICATORS: &[(&str, ProjectType)] = &[
    ("next.config.js", ProjectType::Nextjs),
    ("next.config.mjs", ProjectType::Nextjs),
    ("next.config.ts", ProjectType::Nextjs),
    ("vite.config.js", ProjectType::Vite),
    ("vite.config.ts", ProjectType::Vite),
    ("nuxt.config.js", ProjectType::Nuxt),
    ("angular.json", ProjectType::Angular),
    ("vue.config.js", ProjectType::Vue),
    ("requirements.txt", ProjectType::Python),
    ("pyproject.toml", ProjectType::Python),
    ("Cargo.toml", ProjectType::Rust),
    ("go.mod", ProjectType::Go),
    ("composer.json", ProjectType::Php),
    ("Gemfile", ProjectType::Ruby),
];

/// Conventional entry files, relative to the root, in report order.
pub const ENTRY_POINT_CANDIDATES: &[&str] = &[
    "index.html",
    "index.js",
    "index.ts",
    "index.tsx",
    "main.js",
    "main.ts",
    "main.py",
    "app.js",
    "app.ts",
    "app.tsx",
    "app.py",
    "server.js",
    "server.ts",
    "server.py",
    "src/index.js",
    "src/index.ts",
    "src/index.tsx",
    "src/main.js",
    "src/main.ts",
    "src/App.tsx",
    "src/App.js",
    "pages/index.tsx",
    "pages/index.js",
    "app/page.tsx",
    "app/page.js",
];

/// Root-level configuration files listed in reports, in report order.
pub const KEY_CONFIG_FILES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "next.config.js",
    "next.config.mjs",
    "vite.config.js",
    "tailwind.config.js",
    "vercel.json",
    ".env.example",
    "requirements.txt",
    "pyproject.toml",
];

/// Default depth bound for the tree walk and extension counting.
pub const DEFAULT_MAX_DEPTH: usize = 4;
