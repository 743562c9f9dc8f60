// crates/shared-kernel/src/value_objects/mod.rs
pub mod digest;
pub mod file_info;

pub use digest::{DigestParseError, Sha256Digest};
pub use file_info::{FileSize, ModificationTime, RelativePath};
