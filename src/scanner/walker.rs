use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use super::error::ScanError;

/// A leaf filesystem item (anything that is not a directory) reachable
/// under a walk root.
#[derive(Debug, Clone)]
pub struct LeafItem {
    pub path: PathBuf,
    pub is_symlink: bool,
}

/// Lazy, restartable enumeration of the leaf items under a root.
///
/// Each call to [`walk`](Self::walk) starts a fresh traversal of the same
/// root, so a pass can be re-run without rebuilding the walker. Traversal
/// order carries no meaning.
#[derive(Debug, Clone)]
pub struct PathWalker {
    root: PathBuf,
    follow_links: bool,
}

impl PathWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: false,
        }
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Start a traversal. Unreadable entries are logged and skipped; the
    /// walk itself never fails, a missing root simply yields nothing.
    pub fn walk(&self) -> Walk {
        Walk {
            inner: WalkDir::new(&self.root)
                .follow_links(self.follow_links)
                .into_iter(),
        }
    }
}

/// One in-flight traversal produced by [`PathWalker::walk`].
pub struct Walk {
    inner: walkdir::IntoIter,
}

impl Iterator for Walk {
    type Item = LeafItem;

    fn next(&mut self) -> Option<LeafItem> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        continue;
                    }
                    let is_symlink = entry.path_is_symlink();
                    return Some(LeafItem {
                        is_symlink,
                        path: entry.into_path(),
                    });
                }
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                    warn!("skipping: {}", ScanError::UnreadableEntry { path, source });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/deep")).unwrap();
        fs::write(dir.path().join("a/one.txt"), b"12345").unwrap();
        fs::write(dir.path().join("a/deep/two.txt"), b"123").unwrap();
        fs::write(dir.path().join("three.bin"), b"1").unwrap();
        dir
    }

    #[test]
    fn test_yields_only_leaves() {
        let dir = fixture();
        let walker = PathWalker::new(dir.path());

        let mut names: Vec<String> = walker
            .walk()
            .map(|item| item.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["one.txt", "three.bin", "two.txt"]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let dir = fixture();
        let walker = PathWalker::new(dir.path());

        assert_eq!(walker.walk().count(), 3);
        assert_eq!(walker.walk().count(), 3);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let walker = PathWalker::new(dir.path().join("does-not-exist"));
        assert_eq!(walker.walk().count(), 0);
    }

    #[test]
    fn test_single_file_root() {
        let dir = fixture();
        let walker = PathWalker::new(dir.path().join("three.bin"));
        assert_eq!(walker.walk().count(), 1);
    }
}
