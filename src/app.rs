// src/app.rs
use anyhow::{Context, Result};
use vault_manifest_engine::{ScanConfig, ScanReport};

/// Scan the current working directory with the fixed skip rules.
pub fn run() -> Result<ScanReport> {
    let root = std::env::current_dir().context("cannot determine current directory")?;
    log::debug!("scan root resolved to {}", root.display());
    let config = ScanConfig::for_root(root);
    let report = vault_manifest_engine::run(&config)?;
    Ok(report)
}
