//! # Shared Kernel
//!
//! Types shared by every crate in the workspace:
//!
//! - [`error`]: the error hierarchy and the [`ErrorContext`] extension trait
//! - [`value_objects`]: small typed wrappers for manifest fields

// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ConfigError, ErrorContext, InfraResult, InfrastructureError, Result, VaultError};

pub mod error;
pub mod value_objects;

pub use value_objects::{DigestParseError, FileSize, ModificationTime, RelativePath, Sha256Digest};
