//! Test utilities for the workbench layout.
//!
//! Recording mocks of every collaborator the layout talks to, plus a
//! [`WorkbenchFixture`] that wires them into a [`LayoutHost`].
//!
//! # Overview
//!
//! - [`MockRegion`] - records sizes, positions and visibility pushed into a region
//! - [`MockWorkbenchState`] - visibility, anchor and editor bookkeeping
//! - [`MockContainer`] - client area, zoom and scroll offset
//! - [`MockOverlay`] - records container sizes handed to overlays
//! - [`RecordingStorage`] - in-memory preferences with a write log
//!
//! Every mock is a cheap `Clone` handle around shared state, so a test keeps
//! one clone for assertions while the layout owns the other.
//!
//! # Example
//!
//! ```rust
//! use workbench_layout::{LayoutOptions, Region};
//! use workbench_test_utils::WorkbenchFixture;
//!
//! let fixture = WorkbenchFixture::new(1200.0, 800.0);
//! let mut layout = fixture.build().unwrap();
//! layout.layout(LayoutOptions::default());
//!
//! assert_eq!(fixture.region(Region::Status).size().map(|s| s.height), Some(22.0));
//! ```
//!
//! [`LayoutHost`]: workbench_layout::LayoutHost

mod container;
mod fixture;
mod region;
mod state;
mod storage;

pub use container::{MockContainer, MockOverlay};
pub use fixture::{
    FIXTURE_RAIL_WIDTH, FIXTURE_STATUS_HEIGHT, FIXTURE_TOP_HEIGHT, WorkbenchFixture,
};
pub use region::{MockRegion, RegionCall};
pub use state::MockWorkbenchState;
pub use storage::RecordingStorage;
