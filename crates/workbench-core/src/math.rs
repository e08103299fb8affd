//! Vector math re-exported from [`glam`].
//!
//! Pointer coordinates reported by drag handles are [`Vec2`] values in
//! container space (origin at the top-left corner, y grows downwards).
//!
//! ```
//! use workbench_core::math::Vec2;
//!
//! let start = Vec2::new(320.0, 400.0);
//! let current = Vec2::new(300.0, 410.0);
//! assert_eq!(current - start, Vec2::new(-20.0, 10.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};
