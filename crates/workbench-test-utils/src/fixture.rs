//! A fully wired layout host made of mocks.

use workbench_layout::config::{DEFAULT_MIN_MAIN_HEIGHT, DEFAULT_MIN_MAIN_WIDTH};
use workbench_layout::{
    ComputedStyle, LayoutConfig, LayoutHost, LayoutResult, Region, RegionSet, SharedEventQueue,
    WorkbenchLayout,
};

use crate::{MockContainer, MockOverlay, MockRegion, MockWorkbenchState, RecordingStorage};

/// Top bar height reported by the fixture's top region.
pub const FIXTURE_TOP_HEIGHT: f32 = 30.0;
/// Rail width reported by the fixture's rail region.
pub const FIXTURE_RAIL_WIDTH: f32 = 50.0;
/// Status strip height reported by the fixture's status region.
pub const FIXTURE_STATUS_HEIGHT: f32 = 22.0;

/// Mocks for every collaborator, sharing one event queue.
///
/// The fields are test-side handles; [`host`](Self::host) hands clones of
/// them to the layout.
#[derive(Debug, Clone)]
pub struct WorkbenchFixture {
    pub events: SharedEventQueue,
    pub state: MockWorkbenchState,
    pub container: MockContainer,
    pub storage: RecordingStorage,
    pub overlay: MockOverlay,
    pub top: MockRegion,
    pub rail: MockRegion,
    pub side: MockRegion,
    pub bottom: MockRegion,
    pub main: MockRegion,
    pub status: MockRegion,
}

impl WorkbenchFixture {
    /// A `width`×`height` container with a 30px top bar, 50px rail and 22px
    /// status strip. Main reports the default minimums; the panels report
    /// none, so defaults apply.
    pub fn new(width: f32, height: f32) -> Self {
        let events = SharedEventQueue::new();
        Self {
            state: MockWorkbenchState::new().with_events(events.clone()),
            container: MockContainer::new(width, height).with_events(events.clone()),
            storage: RecordingStorage::new(),
            overlay: MockOverlay::new(),
            top: MockRegion::with_style(ComputedStyle::fixed_height(FIXTURE_TOP_HEIGHT)),
            rail: MockRegion::with_style(ComputedStyle::fixed_width(FIXTURE_RAIL_WIDTH)),
            side: MockRegion::new(),
            bottom: MockRegion::new(),
            main: MockRegion::with_style(ComputedStyle::min(
                DEFAULT_MIN_MAIN_WIDTH,
                DEFAULT_MIN_MAIN_HEIGHT,
            )),
            status: MockRegion::with_style(ComputedStyle::fixed_height(FIXTURE_STATUS_HEIGHT)),
            events,
        }
    }

    pub fn with_rail_width(self, width: f32) -> Self {
        self.rail.set_style(ComputedStyle::fixed_width(width));
        self
    }

    pub fn region(&self, region: Region) -> &MockRegion {
        match region {
            Region::Top => &self.top,
            Region::Rail => &self.rail,
            Region::Side => &self.side,
            Region::Bottom => &self.bottom,
            Region::Main => &self.main,
            Region::Status => &self.status,
        }
    }

    /// A host backed by clones of the fixture's mocks.
    pub fn host(&self) -> LayoutHost {
        let regions = RegionSet {
            top: Box::new(self.top.clone()),
            rail: Box::new(self.rail.clone()),
            side: Box::new(self.side.clone()),
            bottom: Box::new(self.bottom.clone()),
            main: Box::new(self.main.clone()),
            status: Box::new(self.status.clone()),
        };
        LayoutHost::new(
            Box::new(self.state.clone()),
            Box::new(self.container.clone()),
            regions,
            Box::new(self.storage.clone()),
        )
        .with_overlay(Box::new(self.overlay.clone()))
    }

    pub fn build(&self) -> LayoutResult<WorkbenchLayout> {
        self.build_with(LayoutConfig::default())
    }

    pub fn build_with(&self, config: LayoutConfig) -> LayoutResult<WorkbenchLayout> {
        WorkbenchLayout::new(self.host(), config, &self.events)
    }
}
