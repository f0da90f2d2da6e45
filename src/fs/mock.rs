use super::{DirEntry, FileSystem, FileType};
use anyhow::{anyhow, bail, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub content: Option<String>,
    pub file_type: FileType,
}

/// In-memory file system rooted at `/mock` (or a custom root)
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(HashMap::new()),
            root,
        };
        let root = fs.root.clone();
        fs.add_dir(root);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                file_type: FileType::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();
        Self::ensure_parents(&mut files, &path);
    }

    /// Content of a file, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        self.files
            .read()
            .unwrap()
            .get(&path)
            .and_then(|e| e.content.clone())
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                file_type: FileType::Directory,
            });
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.file_type == FileType::Directory)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Not a file: {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();

        match files.get(&path) {
            Some(entry) if entry.file_type == FileType::Directory => {}
            Some(_) => bail!("Not a directory: {:?}", path),
            None => bail!("Directory not found: {:?}", path),
        }

        let mut entries = Vec::new();
        for (file_path, entry) in files.iter() {
            if file_path.parent() == Some(path.as_path()) {
                let name = file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string();

                entries.push(DirEntry {
                    name,
                    file_type: entry.file_type,
                });
            }
        }

        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();
        if let Some(entry) = files.get(&path) {
            if entry.file_type != FileType::Directory {
                bail!("Not a directory: {:?}", path);
            }
        }
        Self::ensure_parents(&mut files, &path);
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        let parent_is_dir = path
            .parent()
            .and_then(|p| files.get(p))
            .map(|e| e.file_type == FileType::Directory)
            .unwrap_or(false);
        if !parent_is_dir {
            bail!("Parent directory does not exist: {:?}", path);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(contents.to_string()),
                file_type: FileType::File,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file() {
        let fs = MockFileSystem::new();
        fs.add_file("test.rs", "hello");

        assert!(fs.exists(Path::new("/mock/test.rs")));
        assert!(!fs.is_dir(Path::new("/mock/test.rs")));
    }

    #[test]
    fn test_add_dir() {
        let fs = MockFileSystem::new();
        fs.add_dir("subdir");

        assert!(fs.exists(Path::new("/mock/subdir")));
        assert!(fs.is_dir(Path::new("/mock/subdir")));
    }

    #[test]
    fn test_read_to_string() {
        let fs = MockFileSystem::new();
        fs.add_file("test.rs", "hello world");

        let content = fs.read_to_string(Path::new("/mock/test.rs")).unwrap();
        assert_eq!(content, "hello world");
        assert!(fs.read_to_string(Path::new("/mock")).is_err());
    }

    #[test]
    fn test_read_dir_lists_direct_children_only() {
        let fs = MockFileSystem::new();
        fs.add_dir("subdir");
        fs.add_file("test.rs", "content");
        fs.add_file("subdir/nested.rs", "nested");

        let entries = fs.read_dir(Path::new("/mock")).unwrap();
        let mut names: Vec<&str> = entries.iter().map(|e| e.file_name()).collect();
        names.sort();

        assert_eq!(names, vec!["subdir", "test.rs"]);
    }

    #[test]
    fn test_read_dir_missing() {
        let fs = MockFileSystem::new();
        assert!(fs.read_dir(Path::new("/mock/nope")).is_err());
    }

    #[test]
    fn test_with_root() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("services/logger.rs", "pub struct Logger;");

        assert!(fs.is_dir(Path::new("/repo")));
        assert!(fs.exists(Path::new("/repo/services/logger.rs")));
        assert_eq!(fs.root(), Path::new("/repo"));
    }

    #[test]
    fn test_write_requires_parent() {
        let fs = MockFileSystem::new();
        assert!(fs.write(Path::new("/mock/gen/context.rs"), "x").is_err());

        fs.create_dir_all(Path::new("/mock/gen")).unwrap();
        fs.write(Path::new("/mock/gen/context.rs"), "x").unwrap();
        assert_eq!(fs.contents("gen/context.rs").as_deref(), Some("x"));
    }

    #[test]
    fn test_create_dir_all_over_file_fails() {
        let fs = MockFileSystem::new();
        fs.add_file("taken", "file");
        assert!(fs.create_dir_all(Path::new("/mock/taken")).is_err());
    }
}
