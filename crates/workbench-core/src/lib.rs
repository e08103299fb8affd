//! Workbench Core
//!
//! Shared building blocks for the workbench crates: geometry value types,
//! math re-exports, hash collections, logging and profiling setup.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
