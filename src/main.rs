// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;

mod app;
mod cli;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let _args = cli::Args::parse();
    init_logging();

    match app::run() {
        Ok(report) => {
            println!("Wrote: {}", report.manifest_path.display());
            println!("Wrote: {}", report.index_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
