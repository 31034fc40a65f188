//! Scanner module for session file discovery and byte-level tag extraction.
//!
//! The scanner is divided into submodules:
//! - [`walker`]: recursive discovery of `session.dat` files
//! - [`tags`]: the PNG-anchored type tag scan over one file's bytes
//!
//! # Example
//!
//! ```no_run
//! use sessionprobe::scanner::{scan_tags, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("ASSETS"));
//! for path in walker.collect_session_files().unwrap() {
//!     let data = std::fs::read(&path).unwrap();
//!     let tags = scan_tags(&data);
//!     println!("{}: {} unique types", path.display(), tags.len());
//! }
//! ```

pub mod tags;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use tags::{scan_tags, TypeTag, IEND_MARKER, PNG_SIGNATURE, TYPE_FIELD_OFFSET};
pub use walker::{Walker, SESSION_FILE_NAME};

/// Errors that can occur during discovery or file reading.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while accessing a file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
