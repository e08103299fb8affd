//! Persisted sizes for the two resizable regions.

use workbench_core::alloc::HashMap;

use crate::config::LayoutConfig;
use crate::error::StorageResult;

/// Sentinel stored width meaning "no width chosen yet".
pub const UNSET_SIDE_WIDTH: f32 = -1.0;

/// Sentinel stored height meaning "no height chosen yet".
pub const UNSET_BOTTOM_HEIGHT: f32 = 0.0;

/// Who a stored value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageScope {
    /// Shared by every workspace of the user.
    #[default]
    Global,
    /// Private to the current workspace.
    Workspace,
}

/// A key/value store of user preferences.
pub trait Storage {
    /// Read a number, or `default` if the key is missing.
    fn get_number(&self, key: &str, scope: StorageScope, default: f32) -> f32;

    /// Write a number.
    fn set_number(&mut self, key: &str, scope: StorageScope, value: f32) -> StorageResult<()>;
}

/// In-memory [`Storage`], useful as a default and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<(StorageScope, String), f32>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before handing the store to the layout.
    pub fn with_number(mut self, key: impl Into<String>, scope: StorageScope, value: f32) -> Self {
        self.values.insert((scope, key.into()), value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_number(&self, key: &str, scope: StorageScope, default: f32) -> f32 {
        self.values
            .get(&(scope, key.to_string()))
            .copied()
            .unwrap_or(default)
    }

    fn set_number(&mut self, key: &str, scope: StorageScope, value: f32) -> StorageResult<()> {
        self.values.insert((scope, key.to_string()), value);
        Ok(())
    }
}

/// Typed access to the side width and bottom height preferences.
///
/// Write failures are logged and swallowed: the in-memory committed size
/// stays authoritative for the rest of the session.
pub struct SizePreferences {
    storage: Box<dyn Storage>,
    side_width_key: String,
    bottom_height_key: String,
    scope: StorageScope,
}

impl SizePreferences {
    pub fn new(storage: Box<dyn Storage>, config: &LayoutConfig) -> Self {
        Self {
            storage,
            side_width_key: config.side_width_key.clone(),
            bottom_height_key: config.bottom_height_key.clone(),
            scope: config.storage_scope,
        }
    }

    /// Stored side width, or [`UNSET_SIDE_WIDTH`].
    pub fn side_width(&self) -> f32 {
        self.storage
            .get_number(&self.side_width_key, self.scope, UNSET_SIDE_WIDTH)
    }

    /// Stored bottom height, or [`UNSET_BOTTOM_HEIGHT`].
    pub fn bottom_height(&self) -> f32 {
        self.storage
            .get_number(&self.bottom_height_key, self.scope, UNSET_BOTTOM_HEIGHT)
    }

    pub fn store_side_width(&mut self, width: f32) {
        let key = self.side_width_key.clone();
        self.store(&key, width);
    }

    pub fn store_bottom_height(&mut self, height: f32) {
        let key = self.bottom_height_key.clone();
        self.store(&key, height);
    }

    fn store(&mut self, key: &str, value: f32) {
        if let Err(e) = self.storage.set_number(key, self.scope, value) {
            tracing::warn!("Failed to persist {} = {}: {}", key, value, e);
        }
    }
}

impl std::fmt::Debug for SizePreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizePreferences")
            .field("side_width_key", &self.side_width_key)
            .field("bottom_height_key", &self.bottom_height_key)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
