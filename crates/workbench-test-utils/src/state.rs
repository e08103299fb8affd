//! Mock visibility and editor provider.

use std::sync::Arc;

use parking_lot::Mutex;
use workbench_core::alloc::HashMap;
use workbench_layout::{
    Anchor, GroupOrientation, Region, SharedEventQueue, WorkbenchEvent, WorkbenchState,
};

#[derive(Debug)]
struct StateRecord {
    visible: HashMap<Region, bool>,
    anchor: Anchor,
    open_editors: usize,
    orientation: GroupOrientation,
    optimal_side_width: Option<f32>,
    set_visible_calls: Vec<(Region, bool)>,
}

impl Default for StateRecord {
    fn default() -> Self {
        Self {
            visible: Region::ALL.iter().map(|r| (*r, true)).collect(),
            anchor: Anchor::Start,
            open_editors: 1,
            orientation: GroupOrientation::SideBySide,
            optimal_side_width: None,
            set_visible_calls: Vec::new(),
        }
    }
}

/// Everything visible, side panel at the start edge, one editor.
///
/// Changes made through this handle are announced on the attached queue the
/// same way a real workbench would announce them.
#[derive(Debug, Clone, Default)]
pub struct MockWorkbenchState {
    inner: Arc<Mutex<StateRecord>>,
    events: Option<SharedEventQueue>,
}

impl MockWorkbenchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce changes on `events`.
    pub fn with_events(mut self, events: SharedEventQueue) -> Self {
        self.events = Some(events);
        self
    }

    /// Show or hide a region and announce it.
    pub fn show(&self, region: Region, visible: bool) {
        let changed = self.inner.lock().visible.insert(region, visible) != Some(visible);
        if changed {
            self.announce(WorkbenchEvent::VisibilityChanged(region));
        }
    }

    /// Move the side panel to another edge and announce it.
    pub fn set_anchor(&self, anchor: Anchor) {
        self.inner.lock().anchor = anchor;
        self.announce(WorkbenchEvent::VisibilityChanged(Region::Side));
    }

    pub fn set_open_editors(&self, count: usize) {
        self.inner.lock().open_editors = count;
        self.announce(WorkbenchEvent::EditorsChanged);
    }

    pub fn set_orientation(&self, orientation: GroupOrientation) {
        self.inner.lock().orientation = orientation;
        self.announce(WorkbenchEvent::GroupOrientationChanged);
    }

    pub fn set_optimal_side_width(&self, width: Option<f32>) {
        self.inner.lock().optimal_side_width = width;
    }

    /// Calls the layout made to [`WorkbenchState::set_visible`].
    pub fn set_visible_calls(&self) -> Vec<(Region, bool)> {
        self.inner.lock().set_visible_calls.clone()
    }

    pub fn visible(&self, region: Region) -> bool {
        self.inner.lock().visible.get(&region).copied().unwrap_or(true)
    }

    fn announce(&self, event: WorkbenchEvent) {
        if let Some(events) = &self.events {
            events.push(event);
        }
    }
}

impl WorkbenchState for MockWorkbenchState {
    fn is_visible(&self, region: Region) -> bool {
        self.visible(region)
    }

    fn side_anchor(&self) -> Anchor {
        self.inner.lock().anchor
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        self.inner.lock().set_visible_calls.push((region, visible));
        self.show(region, visible);
    }

    fn open_editor_count(&self) -> usize {
        self.inner.lock().open_editors
    }

    fn group_orientation(&self) -> GroupOrientation {
        self.inner.lock().orientation
    }

    fn optimal_side_width(&self) -> Option<f32> {
        self.inner.lock().optimal_side_width
    }
}
