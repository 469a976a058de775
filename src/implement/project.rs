//! Shallow project-context scan for the first conversation turn.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;

/// Extensions whose files count as project context.
const CONTEXT_EXTENSIONS: [&str; 5] = [".rs", ".py", ".js", ".ts", ".go"];

/// Manifest file names that count as project context.
const CONTEXT_MANIFESTS: [&str; 5] =
    ["Cargo.toml", "package.json", "pyproject.toml", "go.mod", "Makefile"];

/// Version-control metadata directory excluded from the scan.
const VCS_DIR: &str = ".git";

/// Maximum number of paths included in the context summary.
pub const MAX_CONTEXT_FILES: usize = 20;

/// Whether a file name matches the fixed context allow-list.
#[must_use]
pub fn matches_context_pattern(name: &str) -> bool {
    CONTEXT_MANIFESTS.contains(&name)
        || CONTEXT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Collects up to [`MAX_CONTEXT_FILES`] project file paths under `root`.
///
/// Breadth-first, alphabetical within each directory, skipping the
/// version-control metadata directory. Unreadable directories are skipped
/// rather than failing the scan.
#[must_use]
pub fn gather_project_context(fs: &dyn FileSystem, root: &Path) -> Vec<String> {
    let mut found = Vec::new();
    let mut pending = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = pending.pop_front() {
        let Ok(mut entries) = fs.list_dir(&dir) else { continue };
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        for entry in entries {
            let path = child_path(&dir, &entry.name);
            if entry.is_dir {
                if entry.name != VCS_DIR {
                    pending.push_back(path);
                }
            } else if matches_context_pattern(&entry.name) {
                found.push(path.display().to_string());
                if found.len() == MAX_CONTEXT_FILES {
                    return found;
                }
            }
        }
    }

    found
}

/// Joins a child name onto a directory, keeping paths relative when the
/// walk is rooted at `.`.
fn child_path(dir: &Path, name: &str) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake::InMemoryFileSystem;

    #[test]
    fn matches_extensions_and_manifests() {
        assert!(matches_context_pattern("main.rs"));
        assert!(matches_context_pattern("app.py"));
        assert!(matches_context_pattern("Cargo.toml"));
        assert!(matches_context_pattern("Makefile"));
        assert!(!matches_context_pattern("notes.txt"));
        assert!(!matches_context_pattern("image.png"));
    }

    #[test]
    fn gathers_matching_files_breadth_first() {
        let fs = InMemoryFileSystem::new()
            .with_file("Cargo.toml", "")
            .with_file("notes.txt", "")
            .with_file("src/main.rs", "")
            .with_file("src/lib.rs", "");

        let paths = gather_project_context(&fs, Path::new("."));

        assert_eq!(paths, vec!["Cargo.toml", "src/lib.rs", "src/main.rs"]);
    }

    #[test]
    fn excludes_version_control_metadata() {
        let fs = InMemoryFileSystem::new()
            .with_file(".git/hooks/pre-commit.py", "")
            .with_file("main.py", "");

        let paths = gather_project_context(&fs, Path::new("."));

        assert_eq!(paths, vec!["main.py"]);
    }

    #[test]
    fn caps_results_at_twenty() {
        let mut fs = InMemoryFileSystem::new();
        for i in 0..30 {
            fs = fs.with_file(&format!("src/file{i:02}.rs"), "");
        }

        let paths = gather_project_context(&fs, Path::new("."));

        assert_eq!(paths.len(), MAX_CONTEXT_FILES);
        assert_eq!(paths[0], "src/file00.rs");
    }

    #[test]
    fn empty_tree_yields_no_context() {
        let fs = InMemoryFileSystem::new();
        assert!(gather_project_context(&fs, Path::new(".")).is_empty());
    }
}
