//! Probe runner: sequential read-and-scan over discovered session files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::scanner::{scan_tags, ScanError, Walker};

use super::{FileReport, ProbeSummary};

/// One-shot probe over a directory tree.
///
/// Processing is strictly sequential: the tree is walked first, then each
/// file is read fully into memory, scanned, and dropped before the next one
/// is opened. A file that cannot be read aborts the run; there is no
/// partial-results mode.
#[derive(Debug)]
pub struct TagProbe {
    /// Root directory handed to the walker
    root: PathBuf,
}

impl TagProbe {
    /// Create a probe rooted at the given directory.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    /// Run the probe: discover, scan, and aggregate.
    ///
    /// Returns the per-file reports in walker order (lexicographic by path)
    /// together with the run summary.
    pub fn run(&self) -> Result<(Vec<FileReport>, ProbeSummary), ScanError> {
        let walker = Walker::new(&self.root);
        let paths = walker.collect_session_files()?;
        log::debug!(
            "Discovered {} session file(s) under {}",
            paths.len(),
            self.root.display()
        );

        let mut reports = Vec::with_capacity(paths.len());
        let mut summary = ProbeSummary {
            files_scanned: paths.len(),
            ..ProbeSummary::default()
        };

        for path in paths {
            let data = fs::read(&path).map_err(|e| ScanError::Io {
                path: path.clone(),
                source: e,
            })?;

            let tags = scan_tags(&data);
            log::debug!(
                "{}: {} byte(s), {} unique tag(s)",
                path.display(),
                data.len(),
                tags.len()
            );

            summary.all_tags.extend(tags.iter().copied());
            reports.push(FileReport { path, tags });
        }

        Ok((reports, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{IEND_MARKER, PNG_SIGNATURE, SESSION_FILE_NAME};
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn embedded_png(tag: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&PNG_SIGNATURE);
        buf.extend_from_slice(&[b'X'; 10]);
        buf.extend_from_slice(&IEND_MARKER);
        buf.extend_from_slice(&[0, 0, 0, 0]);
        buf.extend_from_slice(&tag.to_le_bytes());
        buf
    }

    fn write_session_file(dir: &Path, sub: &str, tags: &[u32]) {
        let subdir = dir.join(sub);
        fs::create_dir_all(&subdir).unwrap();
        let mut f = File::create(subdir.join(SESSION_FILE_NAME)).unwrap();
        for &tag in tags {
            f.write_all(&embedded_png(tag)).unwrap();
        }
    }

    #[test]
    fn test_probe_aggregates_across_files() {
        let dir = TempDir::new().unwrap();
        write_session_file(dir.path(), "a", &[7, 9]);
        write_session_file(dir.path(), "b", &[9, 12]);

        let probe = TagProbe::new(dir.path());
        let (reports, summary) = probe.run().unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(
            summary.all_tags.iter().copied().collect::<Vec<_>>(),
            vec![7, 9, 12]
        );
    }

    #[test]
    fn test_probe_reports_follow_walker_order() {
        let dir = TempDir::new().unwrap();
        write_session_file(dir.path(), "zz", &[1]);
        write_session_file(dir.path(), "aa", &[2]);

        let probe = TagProbe::new(dir.path());
        let (reports, _) = probe.run().unwrap();

        let mut paths: Vec<_> = reports.iter().map(|r| r.path.clone()).collect();
        paths.sort();
        assert_eq!(
            paths,
            reports.iter().map(|r| r.path.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_probe_empty_tree() {
        let dir = TempDir::new().unwrap();

        let probe = TagProbe::new(dir.path());
        let (reports, summary) = probe.run().unwrap();

        assert!(reports.is_empty());
        assert_eq!(summary.files_scanned, 0);
        assert!(summary.all_tags.is_empty());
    }

    #[test]
    fn test_probe_missing_root_is_fatal() {
        let probe = TagProbe::new(Path::new("/nonexistent/path/12345"));
        assert!(probe.run().is_err());
    }

    #[test]
    fn test_probe_file_without_images_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let mut f = File::create(dir.path().join(SESSION_FILE_NAME)).unwrap();
        f.write_all(b"opaque container bytes with no images").unwrap();

        let probe = TagProbe::new(dir.path());
        let (reports, summary) = probe.run().unwrap();

        assert_eq!(reports.len(), 1);
        assert!(reports[0].tags.is_empty());
        assert!(summary.all_tags.is_empty());
    }
}
