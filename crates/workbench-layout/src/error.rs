//! Error types for the workbench layout.
//!
//! Geometry itself never fails: unresolved styles fall back to defaults and
//! undersized results are clamped. Errors only come from rejected
//! configuration and from a persisted-size store refusing a write.

use std::fmt;

/// Rejected [`LayoutConfig`](crate::LayoutConfig) values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length that must be a finite, non-negative number of pixels.
    NegativeLength {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A fraction that must lie strictly between 0 and 1.
    FractionOutOfRange {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A storage key was empty.
    EmptyStorageKey,
    /// Both sizes would be persisted under the same key.
    DuplicateStorageKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeLength { name, value } => {
                write!(f, "{} must be a non-negative length, got {}", name, value)
            }
            ConfigError::FractionOutOfRange { name, value } => {
                write!(f, "{} must be between 0 and 1, got {}", name, value)
            }
            ConfigError::EmptyStorageKey => write!(f, "Storage keys must not be empty"),
            ConfigError::DuplicateStorageKey(key) => {
                write!(f, "Side width and bottom height share storage key '{}'", key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Failures reported by a persisted-size store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The store is not reachable (closed, locked, or not yet initialized).
    Unavailable,
    /// The store refused to write a key.
    Rejected {
        /// The key that was being written.
        key: String,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage is unavailable"),
            StorageError::Rejected { key } => write!(f, "Storage rejected write to '{}'", key),
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage writes.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while constructing a [`WorkbenchLayout`](crate::WorkbenchLayout).
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The supplied configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Config(e) => write!(f, "Invalid layout configuration: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Config(e) => Some(e),
        }
    }
}

impl From<ConfigError> for LayoutError {
    fn from(e: ConfigError) -> Self {
        LayoutError::Config(e)
    }
}

/// Result type for layout construction.
pub type LayoutResult<T> = Result<T, LayoutError>;
