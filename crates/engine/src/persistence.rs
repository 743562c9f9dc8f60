// crates/engine/src/persistence.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use vault_manifest_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }
}

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` and wrap it in a buffered writer.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Create `path`, hand the buffered writer to `write`, then flush.
    /// Every I/O failure is reported as [`InfrastructureError::FileWrite`].
    pub fn write_with<F>(path: &Path, write: F) -> InfraResult<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let to_err = |source| InfrastructureError::FileWrite { path: path.to_path_buf(), source };
        let mut out = Self::create(path).map_err(to_err)?;
        write(&mut out).map_err(to_err)?;
        out.flush().map_err(to_err)
    }

    /// `mkdir -p` for the output directory.
    pub fn ensure_dir(path: &Path) -> InfraResult<()> {
        fs::create_dir_all(path).map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "create_dir_all".to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}
