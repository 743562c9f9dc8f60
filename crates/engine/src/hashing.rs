// crates/engine/src/hashing.rs
use std::{
    io::{self, Read},
    path::Path,
};

use sha2::{Digest, Sha256};
use vault_manifest_shared_kernel::{InfraResult, InfrastructureError, Sha256Digest};

use crate::persistence::FileReader;

/// Read size used when streaming file contents into the hasher.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024; // 1 MiB

/// Computes content digests for files.
pub trait ContentHasher: Send + Sync {
    fn hash_reader(&self, reader: &mut dyn Read) -> io::Result<Sha256Digest>;

    /// Opens `path`, streams it through [`ContentHasher::hash_reader`] and
    /// closes it again before returning.
    fn hash_file(&self, path: &Path) -> InfraResult<Sha256Digest> {
        let mut file = FileReader::open(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        self.hash_reader(&mut file)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}

/// Streaming SHA-256 over fixed-size chunks; memory use does not grow with
/// file size.
#[derive(Debug, Clone, Copy)]
pub struct Sha256Hasher {
    chunk_size: usize,
}

impl Sha256Hasher {
    /// A zero `chunk_size` is bumped to 1.
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size: chunk_size.max(1) }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl ContentHasher for Sha256Hasher {
    fn hash_reader(&self, reader: &mut dyn Read) -> io::Result<Sha256Digest> {
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; self.chunk_size];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buf[..n]);
        }
        let mut out = [0u8; Sha256Digest::LEN];
        out.copy_from_slice(&hasher.finalize());
        Ok(Sha256Digest::from_bytes(out))
    }
}
