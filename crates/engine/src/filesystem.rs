// crates/engine/src/filesystem.rs
use std::path::Path;

use ignore::{DirEntry, WalkBuilder};
use log::{debug, warn};
use vault_manifest_shared_kernel::{InfraResult, InfrastructureError, ModificationTime, RelativePath};

use crate::{
    classify::FileKind,
    config::ScanConfig,
    hashing::ContentHasher,
    record::{FileEntry, FileRecord},
};

/// Walk `config.root` and produce one record per regular file.
///
/// Skip-set directories, dot-directories and the output directory are pruned
/// in `filter_entry`, so their subtrees are never listed. Dotfiles are
/// dropped. A file that cannot be stat'ed or hashed becomes a
/// [`FileRecord::Error`]; a directory that cannot be listed is logged and
/// skipped. Nothing here aborts the walk.
///
/// Records come back in traversal order; callers sort them.
pub fn walk(config: &ScanConfig, hasher: &dyn ContentHasher) -> Vec<FileRecord> {
    let mut builder = WalkBuilder::new(&config.root);
    // Inventory everything: no .gitignore/.ignore handling, and hidden
    // entries are handled by our own filter below.
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let prune_cfg = config.clone();
    builder.filter_entry(move |entry| should_visit(entry, &prune_cfg));

    let mut records = Vec::new();
    for result in builder.build() {
        match result {
            Ok(entry) => {
                if let Some(record) = record_for_entry(&entry, config, hasher) {
                    records.push(record);
                }
            }
            Err(err) => warn!("walk error: {err}"),
        }
    }
    records
}

fn should_visit(entry: &DirEntry, config: &ScanConfig) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    if is_dir {
        if config.is_output_dir(entry.path()) || config.is_skipped_dir_name(&name) {
            debug!("pruning {}", entry.path().display());
            return false;
        }
        return true;
    }
    !name.starts_with('.')
}

fn record_for_entry(entry: &DirEntry, config: &ScanConfig, hasher: &dyn ContentHasher) -> Option<FileRecord> {
    // Symlinks are candidates; `inspect_file` follows them and keeps only
    // those that resolve to regular files.
    let ft = entry.file_type()?;
    if !(ft.is_file() || ft.is_symlink()) {
        return None;
    }

    let path = entry.path();
    let rel = RelativePath::from_root(&config.root, path);
    match inspect_file(path, rel.clone(), hasher) {
        Ok(Some(file)) => Some(FileRecord::Entry(file)),
        Ok(None) => {
            debug!("skipping non-regular file {rel}");
            None
        }
        Err(err) => {
            warn!("{err}");
            Some(FileRecord::error(rel, err))
        }
    }
}

/// Stat and hash one file. `Ok(None)` means the path exists but is not a
/// regular file (e.g. a symlink to a directory, a FIFO).
fn inspect_file(path: &Path, rel: RelativePath, hasher: &dyn ContentHasher) -> InfraResult<Option<FileEntry>> {
    let stat_err = |source| InfrastructureError::FileSystemOperation {
        operation: "stat".to_string(),
        path: path.to_path_buf(),
        source,
    };
    let meta = std::fs::metadata(path).map_err(stat_err)?;
    if !meta.is_file() {
        return Ok(None);
    }
    let mtime = meta.modified().map_err(stat_err)?;
    let sha256 = hasher.hash_file(path)?;

    Ok(Some(FileEntry {
        kind: FileKind::from_path(path),
        path: rel,
        bytes: meta.len().into(),
        mtime_utc: ModificationTime::from(mtime),
        sha256,
    }))
}

#[cfg(test)]
mod tests {
    use std::{fs, io};

    use vault_manifest_shared_kernel::Sha256Digest;

    use super::*;
    use crate::hashing::Sha256Hasher;

    /// Fails for any file whose name contains "broken".
    struct FlakyHasher;

    impl ContentHasher for FlakyHasher {
        fn hash_reader(&self, reader: &mut dyn io::Read) -> io::Result<Sha256Digest> {
            Sha256Hasher::default().hash_reader(reader)
        }

        fn hash_file(&self, path: &Path) -> InfraResult<Sha256Digest> {
            if path.to_string_lossy().contains("broken") {
                return Err(InfrastructureError::FileRead {
                    path: path.to_path_buf(),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                });
            }
            Sha256Hasher::default().hash_file(path)
        }
    }

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn paths(records: &[FileRecord]) -> Vec<String> {
        let mut out: Vec<_> = records.iter().map(|r| r.path().to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn prunes_skip_set_hidden_and_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "keep.md", "x");
        write(root, "src/app.ts", "x");
        write(root, ".hidden.txt", "x");
        write(root, ".git/config", "x");
        write(root, ".next/cache.json", "x");
        write(root, "node_modules/pkg/index.js", "x");
        write(root, "web/node_modules/pkg/index.js", "x");
        write(root, "py/__pycache__/m.pyc", "x");
        write(root, "dist/bundle.js", "x");
        write(root, "deep/er/build/out.o", "x");
        write(root, "deep/.cache/blob", "x");
        write(root, "_vault/manifest.jsonl", "{}");

        let records = walk(&ScanConfig::for_root(root), &Sha256Hasher::default());
        assert_eq!(paths(&records), ["keep.md", "src/app.ts"]);
    }

    #[test]
    fn nested_output_dir_name_is_not_special() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "project/_vault/notes.md", "x");

        let records = walk(&ScanConfig::for_root(dir.path()), &Sha256Hasher::default());
        assert_eq!(paths(&records), ["project/_vault/notes.md"]);
    }

    #[test]
    fn failures_become_error_records_and_walk_continues() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a/readme.md", "0123456789");
        write(dir.path(), "c/broken", "secret");
        write(dir.path(), "d/after.json", "{}");

        let records = walk(&ScanConfig::for_root(dir.path()), &FlakyHasher);
        assert_eq!(paths(&records), ["a/readme.md", "c/broken", "d/after.json"]);

        let broken = records.iter().find(|r| r.path().as_str() == "c/broken").unwrap();
        match broken {
            FileRecord::Error(e) => {
                assert!(e.error.contains("permission denied") || e.error.contains("Permission denied"));
                // The message names the file once, so it can be logged as-is.
                assert_eq!(e.error.matches("c/broken").count(), 1);
            }
            other => panic!("expected error record, got {other:?}"),
        }

        let readme = records.iter().find_map(|r| r.as_entry().filter(|e| e.path.as_str() == "a/readme.md")).unwrap();
        assert_eq!(readme.bytes.bytes(), 10);
        assert_eq!(readme.kind, FileKind::Doc);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_an_error_record() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("link.txt")).unwrap();

        let records = walk(&ScanConfig::for_root(dir.path()), &Sha256Hasher::default());
        assert_eq!(records.len(), 1);
        assert!(records[0].is_error());
        assert_eq!(records[0].path().as_str(), "link.txt");
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_to_files_are_hashed_and_symlinks_to_dirs_are_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "real/data.txt", "abc");
        std::os::unix::fs::symlink(dir.path().join("real/data.txt"), dir.path().join("alias.txt")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("mirror")).unwrap();

        let records = walk(&ScanConfig::for_root(dir.path()), &Sha256Hasher::default());
        assert_eq!(paths(&records), ["alias.txt", "real/data.txt"]);
        let digests: Vec<_> = records.iter().filter_map(|r| r.as_entry().map(|e| e.sha256)).collect();
        assert_eq!(digests[0], digests[1]);
    }
}
