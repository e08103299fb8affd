//! The six regions of the workbench and the handles that own their boxes.

use workbench_core::geometry::{Edges, Size};

/// One of the fixed rectangular areas managed by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Full-width bar at the top of the container.
    Top,
    /// Narrow fixed-width rail next to the side panel.
    Rail,
    /// Resizable primary side panel.
    Side,
    /// Resizable panel below the main area.
    Bottom,
    /// Main content area (editor groups).
    Main,
    /// Full-width status strip at the bottom of the container.
    Status,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Top,
        Region::Rail,
        Region::Side,
        Region::Bottom,
        Region::Main,
        Region::Status,
    ];
}

/// Edge of the container the side panel is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Leading (left) edge.
    #[default]
    Start,
    /// Trailing (right) edge.
    End,
}

impl Anchor {
    /// Direction in which pointer motion along x grows the side panel.
    pub fn sign(&self) -> f32 {
        match self {
            Anchor::Start => 1.0,
            Anchor::End => -1.0,
        }
    }
}

/// How open editor groups are arranged inside the main region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupOrientation {
    /// Groups are stacked top to bottom; per-editor minimums add up vertically.
    Stacked,
    /// Groups sit next to each other; per-editor minimums add up horizontally.
    #[default]
    SideBySide,
}

/// Minimum and fixed sizes read from a region's rendered presentation.
///
/// Any value the presentation cannot resolve is `None`; the style snapshot
/// substitutes a default for it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComputedStyle {
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub fixed_width: Option<f32>,
    pub fixed_height: Option<f32>,
}

impl ComputedStyle {
    pub fn min(min_width: f32, min_height: f32) -> Self {
        Self {
            min_width: Some(min_width),
            min_height: Some(min_height),
            ..Default::default()
        }
    }

    pub fn fixed_width(width: f32) -> Self {
        Self {
            fixed_width: Some(width),
            ..Default::default()
        }
    }

    pub fn fixed_height(height: f32) -> Self {
        Self {
            fixed_height: Some(height),
            ..Default::default()
        }
    }
}

/// The outer box of a region, as seen by the layout.
///
/// Implementations own whatever renders the region's content. The layout
/// only ever pushes an outer rectangle into them and reads back their
/// computed style.
pub trait RegionHandle {
    /// Apply the outer size.
    fn set_size(&mut self, size: Size<f32>);

    /// Apply the outer position as offsets from the container edges.
    fn set_position(&mut self, position: Edges<f32>);

    /// Show or hide the region's box.
    fn set_visible(&mut self, visible: bool);

    /// Minimum and fixed sizes of the rendered presentation.
    fn computed_style(&self) -> ComputedStyle;

    /// Refresh any style the region caches for its own nested layout.
    fn compute_style(&mut self) {}

    /// Lay out the region's own content inside the given size.
    fn layout(&mut self, _size: Size<f32>) {}
}

/// Owned handles for all six regions.
pub struct RegionSet {
    pub top: Box<dyn RegionHandle>,
    pub rail: Box<dyn RegionHandle>,
    pub side: Box<dyn RegionHandle>,
    pub bottom: Box<dyn RegionHandle>,
    pub main: Box<dyn RegionHandle>,
    pub status: Box<dyn RegionHandle>,
}

impl RegionSet {
    pub fn get(&self, region: Region) -> &dyn RegionHandle {
        match region {
            Region::Top => self.top.as_ref(),
            Region::Rail => self.rail.as_ref(),
            Region::Side => self.side.as_ref(),
            Region::Bottom => self.bottom.as_ref(),
            Region::Main => self.main.as_ref(),
            Region::Status => self.status.as_ref(),
        }
    }

    pub fn get_mut(&mut self, region: Region) -> &mut dyn RegionHandle {
        match region {
            Region::Top => self.top.as_mut(),
            Region::Rail => self.rail.as_mut(),
            Region::Side => self.side.as_mut(),
            Region::Bottom => self.bottom.as_mut(),
            Region::Main => self.main.as_mut(),
            Region::Status => self.status.as_mut(),
        }
    }
}

impl std::fmt::Debug for RegionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionSet").finish_non_exhaustive()
    }
}
