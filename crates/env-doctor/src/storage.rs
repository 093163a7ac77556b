//! Injectable whole-file storage capability.

use std::fs;
use std::path::Path;

use crate::error::{EnvDoctorError, Result};

/// File access used by the core: whole-file reads and writes only.
///
/// Parsing and planning perform no I/O themselves; everything goes through
/// this capability, so tests and other hosts can substitute their own.
pub trait Storage {
    /// Read the entire file; `None` when it does not exist.
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>>;

    /// Replace the entire file content.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Whether the file exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read the entire file as text; `None` when it does not exist.
    fn read_string(&self, path: &Path) -> Result<Option<String>> {
        Ok(self
            .read(path)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// [`Storage`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(EnvDoctorError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        fs::write(path, content).map_err(|source| EnvDoctorError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
