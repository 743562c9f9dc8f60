// crates/engine/src/manifest.rs
use std::{
    io::{self, Write},
    path::Path,
};

use vault_manifest_shared_kernel::InfraResult;

use crate::{persistence::FileWriter, record::FileRecord};

/// Sort ascending by the path string. Stable, so equal paths keep walk order.
pub fn sort_records(records: &mut [FileRecord]) {
    records.sort_by(|a, b| a.path().cmp(b.path()));
}

/// Write one compact JSON object per line.
pub fn write_records(records: &[FileRecord], out: &mut impl Write) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Replace the manifest at `path` with `records`. Records must already be
/// sorted.
pub fn write_manifest(path: &Path, records: &[FileRecord]) -> InfraResult<()> {
    FileWriter::write_with(path, |w| write_records(records, w))
}
