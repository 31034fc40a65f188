//! Directory walker for locating `session.dat` files.
//!
//! Uses [`walkdir`] for single-threaded recursive traversal. The scan is
//! strictly sequential, so the walker collects paths eagerly and returns
//! them sorted lexicographically by full path, which keeps report output
//! stable across runs and platforms.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::ScanError;

/// File name the walker matches, byte for byte.
pub const SESSION_FILE_NAME: &str = "session.dat";

/// Recursive directory walker that collects `session.dat` paths.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Collect every file named `session.dat` anywhere under the root.
    ///
    /// Returns the matching paths sorted lexicographically. An absent,
    /// unreadable, or non-directory root is an error; unreadable entries
    /// deeper in the tree are logged and skipped so one bad subdirectory
    /// does not abort discovery.
    pub fn collect_session_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        self.check_root()?;

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| self.root.clone(), Path::to_path_buf);
                    log::warn!("Skipping unreadable entry {}: {}", path.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name() == SESSION_FILE_NAME {
                log::debug!("Found session file: {}", entry.path().display());
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Verify the root exists, is readable, and is a directory.
    fn check_root(&self) -> Result<(), ScanError> {
        let metadata = fs::metadata(&self.root).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ScanError::NotFound(self.root.clone()),
            ErrorKind::PermissionDenied => ScanError::PermissionDenied(self.root.clone()),
            _ => ScanError::Io {
                path: self.root.clone(),
                source: e,
            },
        })?;

        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    /// Build a tree with session.dat files at several depths plus decoys.
    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();

        let mut f = File::create(dir.path().join(SESSION_FILE_NAME)).unwrap();
        f.write_all(b"top level").unwrap();

        let sub = dir.path().join("level1").join("level2");
        fs::create_dir_all(&sub).unwrap();
        let mut f = File::create(sub.join(SESSION_FILE_NAME)).unwrap();
        f.write_all(b"nested").unwrap();

        // Decoys that must not match
        File::create(dir.path().join("session.dat.bak")).unwrap();
        File::create(dir.path().join("other.dat")).unwrap();
        fs::create_dir(dir.path().join("session.dat.d")).unwrap();

        dir
    }

    #[test]
    fn test_walker_finds_only_session_files() {
        let dir = create_test_tree();
        let walker = Walker::new(dir.path());

        let paths = walker.collect_session_files().unwrap();

        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(path.file_name().unwrap(), SESSION_FILE_NAME);
        }
    }

    #[test]
    fn test_walker_output_is_sorted() {
        let dir = TempDir::new().unwrap();
        for sub in ["zeta", "alpha", "mid"] {
            let subdir = dir.path().join(sub);
            fs::create_dir(&subdir).unwrap();
            File::create(subdir.join(SESSION_FILE_NAME)).unwrap();
        }

        let walker = Walker::new(dir.path());
        let paths = walker.collect_session_files().unwrap();

        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_walker_empty_tree() {
        let dir = TempDir::new().unwrap();
        let walker = Walker::new(dir.path());

        assert!(walker.collect_session_files().unwrap().is_empty());
    }

    #[test]
    fn test_walker_missing_root_is_fatal() {
        let walker = Walker::new(Path::new("/nonexistent/path/12345"));

        let err = walker.collect_session_files().unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn test_walker_root_must_be_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("plain.txt");
        File::create(&file_path).unwrap();

        let walker = Walker::new(&file_path);
        let err = walker.collect_session_files().unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }
}
