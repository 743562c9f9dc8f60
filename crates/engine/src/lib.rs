// crates/engine/src/lib.rs
use std::path::PathBuf;

use chrono::Utc;
use log::info;
use vault_manifest_shared_kernel::{ConfigError, ErrorContext, FileSize, Result};

pub mod classify;
pub mod config;
pub mod filesystem;
pub mod hashing;
pub mod index;
pub mod manifest;
pub mod persistence;
pub mod record;

pub use crate::classify::FileKind;
pub use crate::config::{ScanConfig, ScanConfigBuilder};
pub use crate::hashing::{ContentHasher, Sha256Hasher};
pub use crate::index::KindCounts;
pub use crate::record::{FileEntry, FileError, FileRecord};

/// What a finished scan wrote.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub manifest_path: PathBuf,
    pub index_path: PathBuf,
    pub records: Vec<FileRecord>,
    pub counts: KindCounts,
}

/// Scan `config.root` and write the manifest and index into the output
/// directory, using the default SHA-256 hasher.
///
/// # Errors
///
/// Only run-level failures are returned: a root that is not a directory,
/// failing to create the output directory, or failing to write either output
/// file. Unreadable files end up as error records in the manifest.
pub fn run(config: &ScanConfig) -> Result<ScanReport> {
    run_with_hasher(config, &Sha256Hasher::new(config.chunk_size))
}

/// [`run`] with a caller-supplied hasher.
pub fn run_with_hasher(config: &ScanConfig, hasher: &dyn ContentHasher) -> Result<ScanReport> {
    if !config.root.is_dir() {
        return Err(ConfigError::RootNotADirectory { path: config.root.clone() }.into());
    }

    let output_dir = config.output_dir();
    persistence::FileWriter::ensure_dir(&output_dir).context("creating output directory")?;

    info!("scanning {}", config.root.display());
    let mut records = filesystem::walk(config, hasher);
    manifest::sort_records(&mut records);

    let counts = KindCounts::from_records(&records);
    let total_bytes: FileSize = records.iter().filter_map(|r| r.as_entry().map(|e| e.bytes)).sum();
    info!(
        "scanned {} files ({:#}), {} unreadable",
        counts.total(),
        total_bytes,
        counts.unreadable()
    );

    let manifest_path = config.manifest_path();
    manifest::write_manifest(&manifest_path, &records).context("writing manifest")?;
    info!("wrote {}", manifest_path.display());

    let index_path = config.index_path();
    index::write_index(&index_path, &counts, Utc::now()).context("writing index")?;
    info!("wrote {}", index_path.display());

    Ok(ScanReport { manifest_path, index_path, records, counts })
}
