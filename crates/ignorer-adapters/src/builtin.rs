//! Built-in template catalog.
//!
//! The templates that ship inside the `ignorer` binary. Pattern blocks are
//! compile-time string constants, so loading the catalog allocates only the
//! surrounding [`Template`] metadata.
//!
//! Curation policy: each block carries the conventional ignores for its
//! ecosystem — build output, dependency caches, editor droppings local to the
//! tool — and nothing speculative. OS and editor noise lives in its own
//! templates (`macos`, `vscode`, ...) rather than being repeated per language,
//! so users combine them explicitly: `ignorer go vscode macos`.

use ignorer_core::{
    domain::{Category, Template},
    error::IgnorerResult,
};
use tracing::debug;

/// One row of the builtin catalog table.
struct BuiltinDef {
    name: &'static str,
    category: Category,
    description: &'static str,
    aliases: &'static [&'static str],
    patterns: &'static str,
}

/// Build all built-in templates.
///
/// # Errors
///
/// Only if a table entry violates a domain invariant — that is a programming
/// error caught by `builtin_catalog_is_valid` in this module's tests, not a
/// runtime condition.
pub fn all_templates() -> IgnorerResult<Vec<Template>> {
    let templates = BUILTINS
        .iter()
        .map(|def| {
            Template::builder()
                .name(def.name)
                .category(def.category)
                .description(def.description)
                .aliases(def.aliases.iter().map(|a| (*a).to_string()).collect())
                .patterns(def.patterns)
                .build()
                .map_err(Into::into)
        })
        .collect::<IgnorerResult<Vec<_>>>()?;

    debug!(count = templates.len(), "built-in templates constructed");
    Ok(templates)
}

// ── Catalog table ─────────────────────────────────────────────────────────────

const BUILTINS: &[BuiltinDef] = &[
    // Languages
    BuiltinDef {
        name: "c",
        category: Category::Language,
        description: "C object files, libraries, and executables",
        aliases: &[],
        patterns: C,
    },
    BuiltinDef {
        name: "cpp",
        category: Category::Language,
        description: "C++ object files, libraries, and build output",
        aliases: &["cplusplus"],
        patterns: CPP,
    },
    BuiltinDef {
        name: "go",
        category: Category::Language,
        description: "Go binaries, test artifacts, and vendored dependencies",
        aliases: &["golang"],
        patterns: GO,
    },
    BuiltinDef {
        name: "java",
        category: Category::Language,
        description: "Java class files, packaged archives, and build tools",
        aliases: &[],
        patterns: JAVA,
    },
    BuiltinDef {
        name: "javascript",
        category: Category::Language,
        description: "JavaScript dependencies, logs, and bundler output",
        aliases: &["js"],
        patterns: JAVASCRIPT,
    },
    BuiltinDef {
        name: "kotlin",
        category: Category::Language,
        description: "Kotlin and Gradle build output",
        aliases: &["kt"],
        patterns: KOTLIN,
    },
    BuiltinDef {
        name: "python",
        category: Category::Language,
        description: "Python bytecode, virtual environments, and packaging",
        aliases: &["py"],
        patterns: PYTHON,
    },
    BuiltinDef {
        name: "ruby",
        category: Category::Language,
        description: "Ruby gems, bundler state, and coverage output",
        aliases: &["rb"],
        patterns: RUBY,
    },
    BuiltinDef {
        name: "rust",
        category: Category::Language,
        description: "Cargo target directory and backup files",
        aliases: &["rs"],
        patterns: RUST,
    },
    BuiltinDef {
        name: "swift",
        category: Category::Language,
        description: "Swift Package Manager and Xcode build output",
        aliases: &[],
        patterns: SWIFT,
    },
    BuiltinDef {
        name: "typescript",
        category: Category::Language,
        description: "TypeScript build info and compiled output",
        aliases: &["ts"],
        patterns: TYPESCRIPT,
    },
    // Frameworks
    BuiltinDef {
        name: "django",
        category: Category::Framework,
        description: "Django local settings, database, and media files",
        aliases: &[],
        patterns: DJANGO,
    },
    BuiltinDef {
        name: "flask",
        category: Category::Framework,
        description: "Flask instance folder and session files",
        aliases: &[],
        patterns: FLASK,
    },
    BuiltinDef {
        name: "laravel",
        category: Category::Framework,
        description: "Laravel vendor, cache, and environment files",
        aliases: &[],
        patterns: LARAVEL,
    },
    BuiltinDef {
        name: "nextjs",
        category: Category::Framework,
        description: "Next.js build output and cache",
        aliases: &["next"],
        patterns: NEXTJS,
    },
    BuiltinDef {
        name: "rails",
        category: Category::Framework,
        description: "Rails logs, tmp, and storage directories",
        aliases: &[],
        patterns: RAILS,
    },
    BuiltinDef {
        name: "react",
        category: Category::Framework,
        description: "React build output and dependency caches",
        aliases: &[],
        patterns: REACT,
    },
    BuiltinDef {
        name: "vue",
        category: Category::Framework,
        description: "Vue build output and local env files",
        aliases: &[],
        patterns: VUE,
    },
    // Tools & others
    BuiltinDef {
        name: "docker",
        category: Category::Tool,
        description: "Docker override files and local volumes",
        aliases: &[],
        patterns: DOCKER,
    },
    BuiltinDef {
        name: "emacs",
        category: Category::Tool,
        description: "Emacs backup, autosave, and lock files",
        aliases: &[],
        patterns: EMACS,
    },
    BuiltinDef {
        name: "jetbrains",
        category: Category::Tool,
        description: "JetBrains IDE project metadata",
        aliases: &["idea", "intellij"],
        patterns: JETBRAINS,
    },
    BuiltinDef {
        name: "linux",
        category: Category::Tool,
        description: "Linux temporary and trash files",
        aliases: &[],
        patterns: LINUX,
    },
    BuiltinDef {
        name: "macos",
        category: Category::Tool,
        description: "macOS Finder and Spotlight metadata",
        aliases: &["osx"],
        patterns: MACOS,
    },
    BuiltinDef {
        name: "node",
        category: Category::Tool,
        description: "Node.js dependencies and npm/yarn logs",
        aliases: &["nodejs"],
        patterns: NODE,
    },
    BuiltinDef {
        name: "vim",
        category: Category::Tool,
        description: "Vim swap and session files",
        aliases: &[],
        patterns: VIM,
    },
    BuiltinDef {
        name: "vscode",
        category: Category::Tool,
        description: "Visual Studio Code workspace settings",
        aliases: &[],
        patterns: VSCODE,
    },
    BuiltinDef {
        name: "windows",
        category: Category::Tool,
        description: "Windows thumbnail caches and shortcuts",
        aliases: &[],
        patterns: WINDOWS,
    },
    BuiltinDef {
        name: "xcode",
        category: Category::Tool,
        description: "Xcode user state and build directories",
        aliases: &[],
        patterns: XCODE,
    },
];

// ── Pattern blocks ────────────────────────────────────────────────────────────

const C: &str = "\
# Object files
*.o
*.ko
*.obj
*.elf

# Libraries
*.lib
*.a
*.la
*.lo

# Shared objects
*.dll
*.so
*.so.*
*.dylib

# Executables
*.exe
*.out
*.app
";

const CPP: &str = "\
# Prerequisites
*.d

# Compiled object files
*.slo
*.lo
*.o
*.obj

# Precompiled headers
*.gch
*.pch

# Linker output
*.ilk
*.map
*.exp

# Libraries
*.lib
*.a
*.la

# Executables
*.exe
*.out
*.app

# CMake
build/
CMakeFiles/
CMakeCache.txt
cmake_install.cmake
";

const GO: &str = "\
# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary, built with `go test -c`
*.test

# Output of the go coverage tool
*.out

# Dependency directories
vendor/

# Go workspace file
go.work
go.work.sum
";

const JAVA: &str = "\
# Compiled class files
*.class

# Log files
*.log

# Package files
*.jar
*.war
*.nar
*.ear
*.zip
*.tar.gz

# Build directories
target/
build/
out/

# Gradle
.gradle/

# Virtual machine crash logs
hs_err_pid*
replay_pid*
";

const JAVASCRIPT: &str = "\
# Dependencies
node_modules/

# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Bundler output
dist/
.cache/

# Environment
.env
.env.local
";

const KOTLIN: &str = "\
# Compiled class files
*.class

# Build output
build/
out/

# Gradle
.gradle/
gradle-app.setting

# Kotlin compiler
.kotlin/
";

const PYTHON: &str = "\
# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# Distribution / packaging
build/
dist/
*.egg-info/
.eggs/

# Unit test / coverage reports
htmlcov/
.coverage
.pytest_cache/
.tox/

# Virtual environments
.venv/
venv/
env/

# Type checker caches
.mypy_cache/
.ruff_cache/
";

const RUBY: &str = "\
# Gem files
*.gem

# Bundler
.bundle/
vendor/bundle/

# Coverage
coverage/

# RVM / rbenv
.rvmrc
.ruby-version
.ruby-gemset

# Documentation
.yardoc/
_yardoc/
rdoc/
";

const RUST: &str = "\
# Build output
target/

# Backup files generated by rustfmt
**/*.rs.bk

# MSVC debug info
*.pdb
";

const SWIFT: &str = "\
# Xcode build
build/
DerivedData/

# Swift Package Manager
.build/
Packages/
Package.resolved

# Playgrounds
timeline.xctimeline
playground.xcworkspace

# Object files
*.o
*.dSYM/
";

const TYPESCRIPT: &str = "\
# Compiled output
dist/
build/
*.tsbuildinfo

# Dependencies
node_modules/

# Logs
*.log

# Environment
.env
.env.local
";

const DJANGO: &str = "\
# Local settings
local_settings.py

# Database
db.sqlite3
db.sqlite3-journal

# Media and static collection
media/
staticfiles/

# Logs
*.log
";

const FLASK: &str = "\
# Instance folder
instance/

# Flask session files
flask_session/

# Environment
.env
.flaskenv

# Cache
.webassets-cache/
";

const LARAVEL: &str = "\
# Dependencies
/vendor/
/node_modules/

# Environment
.env
.env.backup

# Cache and storage
/storage/*.key
/public/hot
/public/storage
Homestead.json
Homestead.yaml
";

const NEXTJS: &str = "\
# Next.js build output
.next/
out/

# Production build
build/

# Vercel
.vercel/

# Dependencies
node_modules/

# Environment
.env*.local
";

const RAILS: &str = "\
# Logs
/log/*
!/log/.keep

# Temp files
/tmp/*
!/tmp/.keep

# Storage
/storage/*
!/storage/.keep

# Environment
.env

# Precompiled assets
/public/assets/
";

const REACT: &str = "\
# Dependencies
node_modules/

# Production build
build/
dist/

# Testing
coverage/

# Environment
.env.local
.env.development.local
.env.test.local
.env.production.local

# Logs
npm-debug.log*
yarn-debug.log*
yarn-error.log*
";

const VUE: &str = "\
# Dependencies
node_modules/

# Build output
dist/

# Local env files
.env.local
.env.*.local

# Logs
npm-debug.log*
yarn-debug.log*
";

const DOCKER: &str = "\
# Compose overrides
docker-compose.override.yml
compose.override.yaml

# Local volumes and data
.docker/
docker-data/

# Build secrets
*.env.docker
";

const EMACS: &str = "\
# Backup files
*~
\\#*\\#
.\\#*

# Autosave and lock files
auto-save-list/
.emacs.desktop
.emacs.desktop.lock

# Byte-compiled
*.elc
";

const JETBRAINS: &str = "\
# IDE project metadata
.idea/

# Module files
*.iml
*.ipr
*.iws

# Sandboxed run configuration
out/
";

const LINUX: &str = "\
# Temporary files
*~
.fuse_hidden*

# KDE directory preferences
.directory

# Trash
.Trash-*

# NFS
.nfs*
";

const MACOS: &str = "\
# Finder metadata
.DS_Store
.AppleDouble
.LSOverride

# Icon must end with two \\r
Icon\r\r

# Thumbnails
._*

# Spotlight
.Spotlight-V100
.Trashes
";

const NODE: &str = "\
# Dependencies
node_modules/

# npm / yarn / pnpm logs
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*

# Lockfile backups
package-lock.json.bak

# Runtime data
pids/
*.pid
*.seed
";

const VIM: &str = "\
# Swap files
[._]*.s[a-v][a-z]
[._]*.sw[a-p]
[._]s[a-rt-v][a-z]
[._]ss[a-gi-z]
[._]sw[a-p]

# Session
Session.vim
Sessionx.vim

# Persistent undo
[._]*.un~
";

const VSCODE: &str = "\
# Workspace settings
.vscode/*
!.vscode/settings.json
!.vscode/tasks.json
!.vscode/launch.json
!.vscode/extensions.json

# Local history
.history/
";

const WINDOWS: &str = "\
# Thumbnail cache
Thumbs.db
Thumbs.db:encryptable
ehthumbs.db

# Folder config
[Dd]esktop.ini

# Recycle bin
$RECYCLE.BIN/

# Shortcuts
*.lnk
";

const XCODE: &str = "\
# User state
xcuserdata/
*.xcuserstate

# Build
build/
DerivedData/

# Obsolete project state
*.moved-aside
*.xccheckout
*.xcscmblueprint
";

// ── Tests ─────────────────────────────────────────────────────────────────────
