//! Collaborators the layout reads from and writes to.
//!
//! The layout does not decide which regions are visible or where the side
//! panel is anchored; it asks a [`WorkbenchState`] every time it lays out.

use workbench_core::geometry::Size;
use workbench_core::math::Vec2;

use crate::region::{Anchor, GroupOrientation, Region, RegionSet};
use crate::storage::Storage;

/// Visibility and placement decisions owned by the surrounding application.
pub trait WorkbenchState {
    fn is_visible(&self, region: Region) -> bool;

    /// Edge the side panel is attached to.
    fn side_anchor(&self) -> Anchor;

    /// Ask the owner to show or hide a region.
    ///
    /// Owners are expected to announce the change with
    /// [`WorkbenchEvent::VisibilityChanged`](crate::event::WorkbenchEvent::VisibilityChanged),
    /// which is what re-lays out the workbench.
    fn set_visible(&mut self, region: Region, visible: bool);

    /// Number of editors currently visible in the main region.
    fn open_editor_count(&self) -> usize;

    fn group_orientation(&self) -> GroupOrientation;

    /// Preferred width of the side panel's active view, if it has one.
    fn optimal_side_width(&self) -> Option<f32> {
        None
    }
}

/// The element the workbench fills.
pub trait ContainerArea {
    /// Current inner size.
    fn client_area(&self) -> Size<f32>;

    /// Active display zoom factor.
    fn zoom_factor(&self) -> f32 {
        1.0
    }

    /// Current scroll offset of the container.
    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Scroll the container back to its origin.
    fn reset_scroll(&mut self) {}
}

/// Floating UI that sizes itself against the whole container
/// (quick pickers, context menus).
pub trait OverlayLayout {
    fn layout(&mut self, container: Size<f32>);
}

/// Everything the layout needs from its surroundings.
pub struct LayoutHost {
    pub state: Box<dyn WorkbenchState>,
    pub container: Box<dyn ContainerArea>,
    pub regions: RegionSet,
    pub storage: Box<dyn Storage>,
    pub overlays: Vec<Box<dyn OverlayLayout>>,
}

impl LayoutHost {
    pub fn new(
        state: Box<dyn WorkbenchState>,
        container: Box<dyn ContainerArea>,
        regions: RegionSet,
        storage: Box<dyn Storage>,
    ) -> Self {
        Self {
            state,
            container,
            regions,
            storage,
            overlays: Vec::new(),
        }
    }

    pub fn with_overlay(mut self, overlay: Box<dyn OverlayLayout>) -> Self {
        self.overlays.push(overlay);
        self
    }
}

impl std::fmt::Debug for LayoutHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutHost")
            .field("overlays", &self.overlays.len())
            .finish_non_exhaustive()
    }
}

/// Visibility flags and placement read at the start of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilitySnapshot {
    pub top: bool,
    pub side: bool,
    pub bottom: bool,
    pub status: bool,
    pub anchor: Anchor,
}

impl VisibilitySnapshot {
    pub fn read(state: &dyn WorkbenchState) -> Self {
        Self {
            top: state.is_visible(Region::Top),
            side: state.is_visible(Region::Side),
            bottom: state.is_visible(Region::Bottom),
            status: state.is_visible(Region::Status),
            anchor: state.side_anchor(),
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::Top => self.top,
            Region::Side => self.side,
            Region::Bottom => self.bottom,
            Region::Status => self.status,
            Region::Rail | Region::Main => true,
        }
    }
}
