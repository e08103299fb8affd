//! Tunables for the workbench layout.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::StorageScope;

/// Side panel minimum width when its presentation does not specify one.
/// Also the floor the side panel can be squeezed to by editor overflow.
pub const DEFAULT_MIN_SIDE_WIDTH: f32 = 170.0;

/// Bottom panel minimum height when its presentation does not specify one.
/// Also the floor the bottom panel can be squeezed to by editor overflow.
pub const DEFAULT_MIN_BOTTOM_HEIGHT: f32 = 77.0;

/// Minimum width of a single editor group in the main region.
pub const DEFAULT_MIN_MAIN_WIDTH: f32 = 220.0;

/// Minimum height of a single editor group in the main region.
pub const DEFAULT_MIN_MAIN_HEIGHT: f32 = 70.0;

/// Height of the top bar when its presentation does not specify one.
pub const DEFAULT_TOP_HEIGHT: f32 = 30.0;

/// Height of the status strip when its presentation does not specify one.
pub const DEFAULT_STATUS_HEIGHT: f32 = 22.0;

/// How far below its minimum the side panel can be dragged before it hides.
pub const HIDE_SIDE_WIDTH_THRESHOLD: f32 = 50.0;

/// How far below its minimum the bottom panel can be dragged before it hides.
pub const HIDE_BOTTOM_HEIGHT_THRESHOLD: f32 = 50.0;

/// Downward shift of the horizontal sash so it sits just below the main region's edge.
pub const HORIZONTAL_SASH_OFFSET: f32 = 2.0;

/// Storage key for the committed side panel width.
pub const SIDE_WIDTH_KEY: &str = "workbench.sidebar.width";

/// Storage key for the committed bottom panel height.
pub const BOTTOM_HEIGHT_KEY: &str = "workbench.panel.height";

/// Configuration for [`WorkbenchLayout`](crate::WorkbenchLayout).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Hysteresis band below the side minimum before the side panel hides.
    pub hide_side_threshold: f32,
    /// Hysteresis band below the bottom minimum before the bottom panel hides.
    pub hide_bottom_threshold: f32,
    /// Pixel offset applied to the horizontal sash's top.
    pub horizontal_sash_offset: f32,
    /// Share of the container width given to the side panel when no width is stored.
    pub default_side_fraction: f32,
    /// Share of the column height given to the bottom panel when no height is stored.
    pub default_bottom_fraction: f32,
    pub side_width_key: String,
    pub bottom_height_key: String,
    pub storage_scope: StorageScope,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hide_side_threshold: HIDE_SIDE_WIDTH_THRESHOLD,
            hide_bottom_threshold: HIDE_BOTTOM_HEIGHT_THRESHOLD,
            horizontal_sash_offset: HORIZONTAL_SASH_OFFSET,
            default_side_fraction: 0.2,
            default_bottom_fraction: 0.4,
            side_width_key: SIDE_WIDTH_KEY.to_string(),
            bottom_height_key: BOTTOM_HEIGHT_KEY.to_string(),
            storage_scope: StorageScope::Global,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hide_thresholds(mut self, side: f32, bottom: f32) -> Self {
        self.hide_side_threshold = side;
        self.hide_bottom_threshold = bottom;
        self
    }

    pub fn with_horizontal_sash_offset(mut self, offset: f32) -> Self {
        self.horizontal_sash_offset = offset;
        self
    }

    pub fn with_default_fractions(mut self, side: f32, bottom: f32) -> Self {
        self.default_side_fraction = side;
        self.default_bottom_fraction = bottom;
        self
    }

    pub fn with_storage_keys(
        mut self,
        side_width_key: impl Into<String>,
        bottom_height_key: impl Into<String>,
    ) -> Self {
        self.side_width_key = side_width_key.into();
        self.bottom_height_key = bottom_height_key.into();
        self
    }

    pub fn with_storage_scope(mut self, scope: StorageScope) -> Self {
        self.storage_scope = scope;
        self
    }

    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("hide_side_threshold", self.hide_side_threshold),
            ("hide_bottom_threshold", self.hide_bottom_threshold),
            ("horizontal_sash_offset", self.horizontal_sash_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeLength { name, value });
            }
        }

        for (name, value) in [
            ("default_side_fraction", self.default_side_fraction),
            ("default_bottom_fraction", self.default_bottom_fraction),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::FractionOutOfRange { name, value });
            }
        }

        if self.side_width_key.is_empty() || self.bottom_height_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.side_width_key == self.bottom_height_key {
            return Err(ConfigError::DuplicateStorageKey(self.side_width_key.clone()));
        }

        Ok(())
    }
}
