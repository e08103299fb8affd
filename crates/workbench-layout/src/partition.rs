//! The six-region partition of the container.
//!
//! [`Partition::compute`] is the geometry core of a layout pass: given the
//! container size, visibility, style snapshot and committed sizes, it
//! returns every region's extent. It touches no collaborator.

use workbench_core::geometry::{Rect, Size};

use crate::config::{DEFAULT_MIN_BOTTOM_HEIGHT, DEFAULT_MIN_SIDE_WIDTH};
use crate::host::VisibilitySnapshot;
use crate::region::{Anchor, GroupOrientation, Region};
use crate::resize::is_set;
use crate::style::StyleSnapshot;

/// Everything a layout pass computes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionInput {
    pub container: Size<f32>,
    pub visibility: VisibilitySnapshot,
    pub style: StyleSnapshot,
    /// Top bar height, already corrected for zoom.
    pub top_height: f32,
    pub side_committed: f32,
    pub bottom_committed: f32,
    pub bottom_before_maximize: f32,
    /// Maximum bottom height of the previous pass, if there was one.
    pub previous_max_bottom: Option<f32>,
    pub toggle_maximized: bool,
    pub open_editors: usize,
    pub orientation: GroupOrientation,
    pub default_side_fraction: f32,
    pub default_bottom_fraction: f32,
}

/// Extents of every region after a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Partition {
    pub container: Size<f32>,
    pub anchor: Anchor,
    pub side_visible: bool,
    pub bottom_visible: bool,
    pub top_height: f32,
    pub status_height: f32,
    pub rail_width: f32,
    pub side_width: f32,
    pub bottom_height: f32,
    /// Height shared by rail, side and the main column (container minus top and status).
    pub column_height: f32,
    /// Width of the main column, shared by main and bottom.
    pub column_width: f32,
    pub main: Size<f32>,
    /// Offsets of the main column from the container's left and right
    /// edges while the side panel is hidden.
    pub remainder_left: f32,
    pub remainder_right: f32,
    /// Largest bottom height that still leaves the main region its minimum.
    pub max_bottom_height: f32,
    pub bottom_before_maximize: f32,
}

impl Partition {
    pub fn compute(input: &PartitionInput) -> Self {
        let container = input.container;
        let visibility = input.visibility;
        let style = input.style;

        let mut side_width = if !visibility.side {
            0.0
        } else if is_set(input.side_committed) {
            style.side_min_width.max(input.side_committed)
        } else {
            style
                .side_min_width
                .max(container.width * input.default_side_fraction)
        };

        let status_height = if visibility.status {
            style.status_height
        } else {
            0.0
        };
        let top_height = if visibility.top { input.top_height } else { 0.0 };
        let column_height = (container.height - status_height - top_height).max(0.0);
        let rail_width = style.rail_width;

        let stacked = input.orientation == GroupOrientation::Stacked;
        let editors = input.open_editors.max(1) as f32;
        let stacked_rows = if stacked { editors } else { 1.0 };
        let max_bottom_height = (column_height - stacked_rows * style.main_min_height).max(0.0);

        let clamp_bottom =
            |height: f32| height.max(style.bottom_min_height).min(max_bottom_height);
        let default_bottom_height = clamp_bottom(column_height * input.default_bottom_fraction);

        let mut bottom_before_maximize = input.bottom_before_maximize;
        let mut bottom_height = if !visibility.bottom {
            0.0
        } else if !is_set(input.bottom_committed) {
            default_bottom_height
        } else if input.previous_max_bottom == Some(input.bottom_committed) {
            max_bottom_height
        } else {
            clamp_bottom(input.bottom_committed)
        };

        if visibility.bottom && input.toggle_maximized {
            if bottom_height == max_bottom_height {
                let restored = clamp_bottom(bottom_before_maximize);
                // A remembered height that no longer fits restores to the default.
                bottom_height = if restored < max_bottom_height {
                    restored
                } else {
                    default_bottom_height
                };
            } else {
                bottom_before_maximize = bottom_height;
                bottom_height = max_bottom_height;
            }
        }

        let mut column_width = container.width - side_width - rail_width;
        let mut main = Size::new(column_width, column_height - bottom_height);

        let mut remainder_left = 0.0;
        let mut remainder_right = 0.0;
        if !visibility.side {
            main.width = container.width - rail_width;
            let split = ((container.width - main.width + rail_width) / 2.0).round();
            match visibility.anchor {
                Anchor::Start => {
                    remainder_left = split;
                    remainder_right = container.width - main.width - remainder_left;
                }
                Anchor::End => {
                    remainder_right = split;
                    remainder_left = container.width - main.width - remainder_right;
                }
            }
        }

        let mut min_main_width = style.main_min_width;
        let mut min_main_height = style.main_min_height;
        if input.open_editors > 1 {
            if stacked {
                min_main_height *= editors;
            } else {
                min_main_width *= editors;
            }
        }

        if main.width < min_main_width && visibility.side {
            let give = (min_main_width - main.width).min((side_width - DEFAULT_MIN_SIDE_WIDTH).max(0.0));
            side_width -= give;
            main.width += give;
            column_width += give;
        }
        if main.height < min_main_height && visibility.bottom {
            let give = (min_main_height - main.height)
                .min((bottom_height - DEFAULT_MIN_BOTTOM_HEIGHT).max(0.0));
            bottom_height -= give;
            main.height += give;
        }

        main.width = main.width.max(0.0);
        main.height = main.height.max(0.0);

        if visibility.bottom && bottom_height != max_bottom_height {
            bottom_before_maximize = bottom_height;
        }

        Self {
            container,
            anchor: visibility.anchor,
            side_visible: visibility.side,
            bottom_visible: visibility.bottom,
            top_height,
            status_height,
            rail_width,
            side_width,
            bottom_height,
            column_height,
            column_width: column_width.max(0.0),
            main,
            remainder_left,
            remainder_right,
            max_bottom_height,
            bottom_before_maximize,
        }
    }

    /// Whether the bottom panel currently takes all the space it can.
    pub fn is_bottom_maximized(&self) -> bool {
        self.bottom_visible && self.bottom_height == self.max_bottom_height
    }

    /// Left edge of the main column.
    fn main_x(&self) -> f32 {
        if !self.side_visible {
            return self.remainder_left;
        }
        match self.anchor {
            Anchor::Start => self.rail_width + self.side_width,
            Anchor::End => 0.0,
        }
    }

    /// Absolute rectangle of a region inside the container.
    pub fn rect(&self, region: Region) -> Rect<f32> {
        let width = self.container.width;
        let height = self.container.height;
        let top = self.top_height;
        match region {
            Region::Top => Rect::new(0.0, 0.0, width, self.top_height),
            Region::Status => Rect::new(0.0, height - self.status_height, width, self.status_height),
            Region::Rail => {
                let x = match self.anchor {
                    Anchor::Start => 0.0,
                    Anchor::End => width - self.rail_width,
                };
                Rect::new(x, top, self.rail_width, self.column_height)
            }
            Region::Side => {
                let x = match self.anchor {
                    Anchor::Start => self.rail_width,
                    Anchor::End => width - self.rail_width - self.side_width,
                };
                Rect::new(x, top, self.side_width, self.column_height)
            }
            Region::Main => Rect::new(self.main_x(), top, self.main.width, self.main.height),
            Region::Bottom => Rect::new(
                self.main_x(),
                top + self.main.height,
                self.column_width,
                self.bottom_height,
            ),
        }
    }

    pub fn rects(&self) -> RegionRects {
        RegionRects {
            top: self.rect(Region::Top),
            rail: self.rect(Region::Rail),
            side: self.rect(Region::Side),
            bottom: self.rect(Region::Bottom),
            main: self.rect(Region::Main),
            status: self.rect(Region::Status),
        }
    }
}

/// Absolute rectangles of all regions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionRects {
    pub top: Rect<f32>,
    pub rail: Rect<f32>,
    pub side: Rect<f32>,
    pub bottom: Rect<f32>,
    pub main: Rect<f32>,
    pub status: Rect<f32>,
}

impl RegionRects {
    pub fn get(&self, region: Region) -> Rect<f32> {
        match region {
            Region::Top => self.top,
            Region::Rail => self.rail,
            Region::Side => self.side,
            Region::Bottom => self.bottom,
            Region::Main => self.main,
            Region::Status => self.status,
        }
    }
}
