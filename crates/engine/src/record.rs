// crates/engine/src/record.rs
use serde::{Deserialize, Serialize};
use vault_manifest_shared_kernel::{FileSize, ModificationTime, RelativePath, Sha256Digest};

use crate::classify::FileKind;

/// Metadata and digest of a file that was read successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: RelativePath,
    pub bytes: FileSize,
    pub mtime_utc: ModificationTime,
    pub kind: FileKind,
    pub sha256: Sha256Digest,
}

/// A file that was listed but could not be stat'ed or read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub path: RelativePath,
    pub error: String,
}

/// One manifest line. Serialized untagged so each variant keeps its own flat
/// key set: success lines never carry `error`, error lines carry only
/// `path` and `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileRecord {
    Entry(FileEntry),
    Error(FileError),
}

impl FileRecord {
    pub fn error(path: RelativePath, error: impl ToString) -> Self {
        Self::Error(FileError { path, error: error.to_string() })
    }

    pub fn path(&self) -> &RelativePath {
        match self {
            Self::Entry(e) => &e.path,
            Self::Error(e) => &e.path,
        }
    }

    pub fn kind(&self) -> Option<FileKind> {
        match self {
            Self::Entry(e) => Some(e.kind),
            Self::Error(_) => None,
        }
    }

    pub fn as_entry(&self) -> Option<&FileEntry> {
        match self {
            Self::Entry(e) => Some(e),
            Self::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<FileEntry> for FileRecord {
    fn from(entry: FileEntry) -> Self {
        Self::Entry(entry)
    }
}

impl From<FileError> for FileRecord {
    fn from(error: FileError) -> Self {
        Self::Error(error)
    }
}
