// src/cli.rs
use clap::Parser;

/// Walk the current directory and write `_vault/manifest.jsonl` (one hashed
/// record per file) plus `_vault/index.md` (file counts by kind).
///
/// Takes no arguments. Set `RUST_LOG=info` (or `debug`) for progress on stderr.
#[derive(Parser, Debug)]
#[command(name = "vault_manifest", version)]
pub struct Args {}
