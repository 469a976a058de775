//! In-memory fake for the `FileSystem` port.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::ports::filesystem::{DirEntry, FileSystem};

/// Filesystem backed by a sorted map from relative paths to contents.
///
/// Directories are implied by the paths of the files they contain, so the
/// tree `with_file("src/main.rs", ..)` answers `list_dir(".")` with a `src`
/// directory entry.
pub struct InMemoryFileSystem {
    files: BTreeMap<PathBuf, String>,
}

impl InMemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self { files: BTreeMap::new() }
    }

    /// Adds a file at the given relative path.
    #[must_use]
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_string());
        self
    }
}

impl Default for InMemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips a `.` base so `list_dir(".")` sees every top-level path.
fn relative_to<'a>(path: &'a Path, dir: &Path) -> Option<&'a Path> {
    if dir == Path::new(".") {
        Some(path)
    } else {
        path.strip_prefix(dir).ok()
    }
}

impl FileSystem for InMemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no such file: {}", path.display()).into())
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<DirEntry>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries: BTreeMap<String, bool> = BTreeMap::new();
        for file in self.files.keys() {
            let Some(rest) = relative_to(file, path) else { continue };
            let mut components = rest.components();
            let Some(Component::Normal(name)) = components.next() else { continue };
            let is_dir = components.next().is_some();
            let name = name.to_string_lossy().into_owned();
            *entries.entry(name).or_insert(false) |= is_dir;
        }

        if entries.is_empty() && path != Path::new(".") {
            return Err(format!("no such directory: {}", path.display()).into());
        }

        Ok(entries.into_iter().map(|(name, is_dir)| DirEntry { name, is_dir }).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_root_entries_with_implied_directories() {
        let fs = InMemoryFileSystem::new()
            .with_file("README.md", "readme")
            .with_file("src/main.rs", "fn main() {}");

        let entries = fs.list_dir(Path::new(".")).unwrap();
        assert_eq!(
            entries,
            vec![
                DirEntry { name: "README.md".into(), is_dir: false },
                DirEntry { name: "src".into(), is_dir: true },
            ]
        );
    }

    #[test]
    fn lists_nested_directory() {
        let fs = InMemoryFileSystem::new().with_file("src/ports/llm.rs", "");
        let entries = fs.list_dir(Path::new("src")).unwrap();
        assert_eq!(entries, vec![DirEntry { name: "ports".into(), is_dir: true }]);
    }

    #[test]
    fn reads_file_contents() {
        let fs = InMemoryFileSystem::new().with_file("spec.md", "Build a counter");
        assert_eq!(fs.read_to_string(Path::new("spec.md")).unwrap(), "Build a counter");
        assert!(fs.read_to_string(Path::new("missing.md")).is_err());
    }

    #[test]
    fn missing_directory_errors() {
        let fs = InMemoryFileSystem::new().with_file("a.txt", "");
        assert!(fs.list_dir(Path::new("nope")).is_err());
    }
}
