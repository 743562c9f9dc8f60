use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_vault_manifest"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault_manifest"))
        .stdout(predicate::str::contains("manifest.jsonl"));
}

#[test]
fn rejects_arguments() {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_vault_manifest"))
        .current_dir(dir.path())
        .arg("somewhere")
        .assert()
        .failure();
    assert!(!dir.path().join("_vault").exists());
}
