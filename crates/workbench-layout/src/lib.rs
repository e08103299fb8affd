//! Workbench Layout - box layout for a six-region application workbench
//!
//! The container is partitioned into a top bar, a fixed-width rail, a
//! resizable side panel, a main area, a resizable bottom panel and a status
//! strip:
//! - Full recompute of every rectangle on each trigger
//! - Drag-resize sashes with snap-to-hide hysteresis
//! - Persisted side width and bottom height
//! - Maximize/restore of the bottom panel
//! - Per-editor minimum sizes that shrink the panels on overflow
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # use workbench_layout::{LayoutConfig, LayoutHost, LayoutOptions, SharedEventQueue, WorkbenchEvent, WorkbenchLayout};
//! # fn host() -> LayoutHost { unimplemented!() }
//! let events = SharedEventQueue::new();
//! let mut layout = WorkbenchLayout::new(host(), LayoutConfig::default(), &events)?;
//! layout.layout(LayoutOptions::default());
//!
//! // Collaborators push triggers; the host drains them.
//! events.push(WorkbenchEvent::ContainerResized);
//! layout.pump(&events);
//! # Ok::<(), workbench_layout::LayoutError>(())
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod event;
pub mod host;
pub mod partition;
pub mod region;
pub mod resize;
pub mod sash;
pub mod storage;
pub mod style;
pub mod subscription;
pub mod workbench;

pub use config::LayoutConfig;
pub use error::{ConfigError, LayoutError, LayoutResult, StorageError, StorageResult};
pub use event::{EventKinds, HandleStatus, SashEvent, WorkbenchEvent};
pub use host::{ContainerArea, LayoutHost, OverlayLayout, VisibilitySnapshot, WorkbenchState};
pub use partition::{Partition, RegionRects};
pub use region::{Anchor, ComputedStyle, GroupOrientation, Region, RegionHandle, RegionSet};
pub use sash::{Sash, SashGeometry, SashId};
pub use storage::{MemoryStorage, Storage, StorageScope};
pub use style::StyleSnapshot;
pub use subscription::{DisposableStore, SharedEventQueue, Subscription};
pub use workbench::{LayoutOptions, WorkbenchLayout};
