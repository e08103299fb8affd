//! Size state for one resizable axis.

/// Whether a stored size is a real size rather than the "unset" sentinel.
pub fn is_set(size: f32) -> bool {
    size > 0.0
}

/// Committed, drag-start and pre-maximize sizes of a resizable region.
///
/// A committed size of zero or below means "unset": the next layout derives
/// a default and commits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeState {
    /// Authoritative size, persisted whenever it changes.
    pub committed: f32,
    /// Committed size captured when the current drag began.
    pub drag_start: f32,
    /// Size to restore when leaving the maximized state.
    pub before_maximize: f32,
}

impl ResizeState {
    pub fn new(committed: f32) -> Self {
        Self {
            committed,
            drag_start: committed,
            before_maximize: committed,
        }
    }

    /// Snapshot the committed size as the reference for a new drag.
    pub fn begin_drag(&mut self) {
        self.drag_start = self.committed;
    }

    pub fn commit(&mut self, size: f32) {
        self.committed = size;
    }
}
