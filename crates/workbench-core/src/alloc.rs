//! Hash collections used across the workbench crates.
//!
//! Re-exports of the AHash-backed map and set so every crate hashes the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
