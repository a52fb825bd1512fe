//! File system utilities whose errors carry the offending path.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Error variants emitted by this module.
#[derive(Debug, thiserror::Error)]
pub enum FsPathError {
    /// Provides additional path context for [`fs::read_to_string`].
    #[error("failed to read from {path:?}: {source}")]
    Read {
        /// The source `io::Error`.
        source: io::Error,
        /// The path being read.
        path: PathBuf,
    },
}

impl FsPathError {
    /// Returns the complementary error variant for [`fs::read_to_string`].
    pub fn read(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read { source, path: path.into() }
    }
}

/// Wrapper for [`fs::read_to_string`].
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, FsPathError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| FsPathError::read(err, path))
}
