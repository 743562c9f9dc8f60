// crates/engine/src/index.rs
use std::{
    collections::BTreeMap,
    io::{self, Write},
    path::Path,
};

use chrono::{DateTime, SecondsFormat, Utc};
use vault_manifest_shared_kernel::InfraResult;

use crate::{classify::FileKind, persistence::FileWriter, record::FileRecord};

const NEXT_STEP: &str = "- Add NOTES.md per top folder with: purpose, run steps, tags, next upgrades.";

/// Per-kind file counts, keyed by kind name so iteration is alphabetical.
///
/// Only successfully read files are counted by kind; error records are
/// tallied separately in `unreadable`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindCounts {
    by_kind: BTreeMap<&'static str, usize>,
    unreadable: usize,
}

impl KindCounts {
    pub fn from_records(records: &[FileRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            match record.kind() {
                Some(kind) => *acc.by_kind.entry(kind.as_str()).or_insert(0) += 1,
                None => acc.unreadable += 1,
            }
            acc
        })
    }

    pub fn get(&self, kind: FileKind) -> usize {
        self.by_kind.get(kind.as_str()).copied().unwrap_or(0)
    }

    /// `(kind name, count)` pairs in ascending kind-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.by_kind.iter().map(|(k, v)| (*k, *v))
    }

    /// Sum over all kinds; equals the number of entry records.
    pub fn total(&self) -> usize {
        self.by_kind.values().sum()
    }

    pub fn unreadable(&self) -> usize {
        self.unreadable
    }
}

/// Render the Markdown index. `generated_at` is the run time, not scan time.
pub fn render_index(counts: &KindCounts, generated_at: DateTime<Utc>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "# Vault Index\n")?;
    writeln!(out, "Generated: {}\n", generated_at.to_rfc3339_opts(SecondsFormat::AutoSi, false))?;
    writeln!(out, "## File counts by kind")?;
    for (kind, count) in counts.iter() {
        writeln!(out, "- {kind}: {count}")?;
    }
    if counts.unreadable() > 0 {
        writeln!(out, "\n## Unreadable entries")?;
        writeln!(out, "- {} entries could not be read; see manifest.jsonl", counts.unreadable())?;
    }
    writeln!(out, "\n## Next step\n{NEXT_STEP}")
}

/// Replace the index at `path`.
pub fn write_index(path: &Path, counts: &KindCounts, generated_at: DateTime<Utc>) -> InfraResult<()> {
    FileWriter::write_with(path, |w| render_index(counts, generated_at, w))
}
