// crates/engine/src/config.rs
use std::path::{Path, PathBuf};

use derive_builder::Builder;

use crate::hashing::DEFAULT_CHUNK_SIZE;

/// Directory names never descended into, at any depth.
pub const DEFAULT_SKIP_DIRS: [&str; 6] = [".git", "node_modules", ".next", "dist", "build", "__pycache__"];
pub const OUTPUT_DIR_NAME: &str = "_vault";
pub const MANIFEST_FILE_NAME: &str = "manifest.jsonl";
pub const INDEX_FILE_NAME: &str = "index.md";

/// Everything a scan needs. The binary only ever uses
/// [`ScanConfig::for_root`]; the builder is there for tests.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanConfig {
    pub root: PathBuf,
    #[builder(default = "OUTPUT_DIR_NAME.to_string()")]
    pub output_dir_name: String,
    #[builder(default = "MANIFEST_FILE_NAME.to_string()")]
    pub manifest_file_name: String,
    #[builder(default = "INDEX_FILE_NAME.to_string()")]
    pub index_file_name: String,
    #[builder(default = "DEFAULT_SKIP_DIRS.iter().map(|s| (*s).to_string()).collect()")]
    pub skip_dirs: Vec<String>,
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    pub chunk_size: usize,
}

impl ScanConfig {
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_dir_name: OUTPUT_DIR_NAME.to_string(),
            manifest_file_name: MANIFEST_FILE_NAME.to_string(),
            index_file_name: INDEX_FILE_NAME.to_string(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| (*s).to_string()).collect(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output_dir_name)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir().join(&self.manifest_file_name)
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_dir().join(&self.index_file_name)
    }

    /// Whether a directory called `name` is pruned: skip-set members and
    /// dot-directories.
    pub fn is_skipped_dir_name(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.iter().any(|s| s == name)
    }

    /// Whether `path` is the output directory itself.
    pub fn is_output_dir(&self, path: &Path) -> bool {
        path == self.output_dir()
    }
}
