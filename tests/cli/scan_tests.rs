use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn scan(root: &Path) -> assert_cmd::assert::Assert {
    Command::new(env!("CARGO_BIN_EXE_vault_manifest")).current_dir(root).assert()
}

#[test]
fn writes_manifest_and_index_into_vault_dir() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "a/readme.md", "0123456789");
    write(root, "a/.git/config", "[core]");
    write(root, "b/script.py", "print");
    write(root, "node_modules/dep/index.js", "module.exports = {}");
    write(root, ".env", "SECRET=1");

    scan(root)
        .success()
        .stdout(predicate::str::contains("Wrote: ").count(2))
        .stdout(predicate::str::contains("manifest.jsonl"))
        .stdout(predicate::str::contains("index.md"));

    let manifest = fs::read_to_string(root.join("_vault/manifest.jsonl")).unwrap();
    let rows: Vec<Value> = manifest.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    let paths: Vec<_> = rows.iter().map(|r| r["path"].as_str().unwrap()).collect();
    assert_eq!(paths, ["a/readme.md", "b/script.py"]);
    assert_eq!(rows[0]["kind"], "doc");
    assert_eq!(rows[1]["kind"], "python");
    assert_eq!(rows[1]["bytes"], 5);
    assert!(rows.iter().all(|r| r["sha256"].as_str().unwrap().len() == 64));
    assert!(rows.iter().all(|r| r["mtime_utc"].as_str().unwrap().ends_with("+00:00")));

    let index = fs::read_to_string(root.join("_vault/index.md")).unwrap();
    assert!(index.starts_with("# Vault Index\n\nGenerated: "));
    assert!(index.contains("## File counts by kind\n- doc: 1\n- python: 1\n"));
    assert!(index.contains("## Next step"));
}

#[test]
fn second_run_reproduces_manifest() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "notes.md", "hello");
    write(dir.path(), "site/index.html", "<html></html>");

    scan(dir.path()).success();
    let first = fs::read(dir.path().join("_vault/manifest.jsonl")).unwrap();
    scan(dir.path()).success();
    let second = fs::read(dir.path().join("_vault/manifest.jsonl")).unwrap();

    assert_eq!(first, second);
    assert!(!String::from_utf8(second).unwrap().contains("_vault/"));
}

#[test]
fn empty_directory_produces_empty_manifest() {
    let dir = tempfile::tempdir().unwrap();
    scan(dir.path()).success();
    assert_eq!(fs::read_to_string(dir.path().join("_vault/manifest.jsonl")).unwrap(), "");
    assert!(dir.path().join("_vault/index.md").is_file());
}

#[cfg(unix)]
#[test]
fn unreadable_entries_do_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ok.txt", "fine");
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling.md")).unwrap();

    scan(dir.path()).success();
    let manifest = fs::read_to_string(dir.path().join("_vault/manifest.jsonl")).unwrap();
    let rows: Vec<Value> = manifest.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["path"], "dangling.md");
    assert!(rows[0]["error"].is_string());
    assert!(rows[0].get("kind").is_none());
    assert_eq!(rows[1]["path"], "ok.txt");

    let index = fs::read_to_string(dir.path().join("_vault/index.md")).unwrap();
    assert!(index.contains("- doc: 1\n"));
    assert!(index.contains("## Unreadable entries"));
}

#[test]
fn blocked_output_dir_fails_with_nonzero_status() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "_vault", "not a directory");
    scan(dir.path()).failure().stderr(predicate::str::contains("creating output directory"));
}
