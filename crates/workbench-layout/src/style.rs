//! Cached minimum and fixed sizes read from the regions' presentation.

use crate::config::{
    DEFAULT_MIN_BOTTOM_HEIGHT, DEFAULT_MIN_MAIN_HEIGHT, DEFAULT_MIN_MAIN_WIDTH,
    DEFAULT_MIN_SIDE_WIDTH, DEFAULT_STATUS_HEIGHT, DEFAULT_TOP_HEIGHT,
};
use crate::region::{Region, RegionSet};

/// Sizes the layout needs from the regions' presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    pub top_height: f32,
    pub rail_width: f32,
    pub side_min_width: f32,
    pub bottom_min_height: f32,
    /// Minimum width of one editor group.
    pub main_min_width: f32,
    /// Minimum height of one editor group.
    pub main_min_height: f32,
    pub status_height: f32,
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        Self {
            top_height: DEFAULT_TOP_HEIGHT,
            rail_width: 0.0,
            side_min_width: DEFAULT_MIN_SIDE_WIDTH,
            bottom_min_height: DEFAULT_MIN_BOTTOM_HEIGHT,
            main_min_width: DEFAULT_MIN_MAIN_WIDTH,
            main_min_height: DEFAULT_MIN_MAIN_HEIGHT,
            status_height: DEFAULT_STATUS_HEIGHT,
        }
    }
}

impl StyleSnapshot {
    /// Read every region's computed style, substituting defaults for
    /// anything the presentation does not report.
    pub fn capture(regions: &RegionSet) -> Self {
        let defaults = Self::default();
        let top = regions.get(Region::Top).computed_style();
        let rail = regions.get(Region::Rail).computed_style();
        let side = regions.get(Region::Side).computed_style();
        let bottom = regions.get(Region::Bottom).computed_style();
        let main = regions.get(Region::Main).computed_style();
        let status = regions.get(Region::Status).computed_style();

        // The rail always renders with an explicit width.
        let rail_width = rail.fixed_width.unwrap_or_else(|| {
            tracing::warn!("Rail reported no width, laying it out as zero-width");
            0.0
        });

        Self {
            top_height: top.fixed_height.unwrap_or(defaults.top_height),
            rail_width,
            side_min_width: side.min_width.unwrap_or(defaults.side_min_width),
            bottom_min_height: bottom.min_height.unwrap_or(defaults.bottom_min_height),
            main_min_width: main.min_width.unwrap_or(defaults.main_min_width),
            main_min_height: main.min_height.unwrap_or(defaults.main_min_height),
            status_height: status.fixed_height.unwrap_or(defaults.status_height),
        }
    }
}

/// The current snapshot plus the very first one ever captured.
///
/// The initial snapshot is never replaced. Zoom correction of the top bar
/// height is anchored to it so repeated zoom changes cannot compound
/// rounding drift.
#[derive(Debug, Clone, Default)]
pub struct StyleCache {
    current: Option<StyleSnapshot>,
    initial: Option<StyleSnapshot>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot wholesale.
    pub fn compute(&mut self, regions: &RegionSet) -> StyleSnapshot {
        let snapshot = StyleSnapshot::capture(regions);
        tracing::trace!("Captured style snapshot: {:?}", snapshot);
        self.current = Some(snapshot);
        if self.initial.is_none() {
            self.initial = Some(snapshot);
        }
        snapshot
    }

    /// The current snapshot, capturing one if none exists yet.
    pub fn current_or_compute(&mut self, regions: &RegionSet) -> StyleSnapshot {
        match self.current {
            Some(snapshot) => snapshot,
            None => self.compute(regions),
        }
    }

    pub fn current(&self) -> Option<&StyleSnapshot> {
        self.current.as_ref()
    }

    pub fn initial(&self) -> Option<&StyleSnapshot> {
        self.initial.as_ref()
    }

    /// Top bar height corrected for the display zoom factor.
    pub fn zoom_corrected_top_height(&self, zoom_factor: f32) -> f32 {
        let base = self
            .initial
            .or(self.current)
            .map(|s| s.top_height)
            .unwrap_or(DEFAULT_TOP_HEIGHT);
        if zoom_factor > 0.0 {
            base / zoom_factor
        } else {
            base
        }
    }
}
