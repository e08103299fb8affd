//! Geometry value types shared by the layout and event crates.
//!
//! All layout math happens in logical pixels as `f32`.

use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    pub fn right(&self) -> T {
        self.x + self.width
    }

    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }
}

impl<T: Copy + Add<Output = T> + Sub<Output = T>> Rect<T> {
    /// Offsets of this rect from each edge of a container of the given size.
    pub fn edges_within(&self, container: Size<T>) -> Edges<T> {
        Edges {
            top: self.y,
            right: container.width - self.right(),
            bottom: container.height - self.bottom(),
            left: self.x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

/// Offsets from the four edges of an enclosing container.
///
/// This is how regions are positioned: `top`/`left` measure from the
/// container's top-left corner, `right`/`bottom` from its far edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Edges<T> {
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Edges {
            top,
            right,
            bottom,
            left,
        }
    }
}
