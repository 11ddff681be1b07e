//! Storage layer for the recipe book
//!
//! This crate implements the `RecipeStore` backends:
//! - JsonFileStore: one JSON document on disk, atomic whole-file rewrites
//! - MemoryStore: the same document held in memory
//!
//! Both assume a single writer; there is no locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json_file;
pub mod memory;

pub use json_file::{CorruptionPolicy, JsonFileStore, DEFAULT_DOCUMENT_PATH};
pub use memory::MemoryStore;
