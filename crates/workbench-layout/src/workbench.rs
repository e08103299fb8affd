//! The workbench layout solver.
//!
//! [`WorkbenchLayout`] owns the committed sizes of the two resizable regions,
//! the style cache and both sashes. Every event that can change the
//! partition funnels into [`WorkbenchLayout::layout`], which recomputes all
//! six rectangles from scratch and pushes them into the region handles.

use workbench_core::geometry::Size;
use workbench_core::math::Vec2;
use workbench_core::profiling::{self, profile_function, profile_scope};

use crate::config::{DEFAULT_MIN_BOTTOM_HEIGHT, DEFAULT_MIN_SIDE_WIDTH, LayoutConfig};
use crate::drag::{DragOutcome, DragParams, reconcile};
use crate::error::LayoutResult;
use crate::event::{EventKinds, HandleStatus, SashEvent, WorkbenchEvent};
use crate::host::{ContainerArea, LayoutHost, OverlayLayout, VisibilitySnapshot, WorkbenchState};
use crate::partition::{Partition, PartitionInput, RegionRects};
use crate::region::{Anchor, GroupOrientation, Region, RegionSet};
use crate::resize::ResizeState;
use crate::sash::{Sash, SashId, horizontal_sash_geometry, vertical_sash_geometry};
use crate::storage::SizePreferences;
use crate::style::{StyleCache, StyleSnapshot};
use crate::subscription::{DisposableStore, SharedEventQueue};

/// Upper bound on drain rounds in [`WorkbenchLayout::pump`].
const MAX_PUMP_ROUNDS: usize = 16;

/// Flags for a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutOptions {
    /// Re-read every region's computed style before laying out.
    pub force_style_recompute: bool,
    /// Swap the bottom panel between its maximum and its remembered height.
    pub toggle_maximized_panel: bool,
}

impl LayoutOptions {
    pub fn forced() -> Self {
        Self {
            force_style_recompute: true,
            ..Default::default()
        }
    }

    pub fn toggle_maximized() -> Self {
        Self {
            toggle_maximized_panel: true,
            ..Default::default()
        }
    }
}

/// Lays out the six workbench regions and reacts to resize gestures.
pub struct WorkbenchLayout {
    state: Box<dyn WorkbenchState>,
    container: Box<dyn ContainerArea>,
    regions: RegionSet,
    overlays: Vec<Box<dyn OverlayLayout>>,
    prefs: SizePreferences,
    config: LayoutConfig,

    side: ResizeState,
    bottom: ResizeState,
    styles: StyleCache,

    vertical_sash: Sash,
    horizontal_sash: Sash,

    /// Result of the last completed layout pass.
    partition: Partition,
    /// Maximum bottom height of the last pass, for maximize stickiness.
    previous_max_bottom: Option<f32>,
    /// Group orientation seen by the last pass.
    orientation: GroupOrientation,
    layout_count: u64,

    subscriptions: DisposableStore,
    disposed: bool,
}

impl WorkbenchLayout {
    /// Build a layout over `host`, reading the persisted sizes once and
    /// subscribing to every trigger on `events`.
    ///
    /// Nothing is laid out until the first [`layout`](Self::layout) call or
    /// the first event.
    pub fn new(host: LayoutHost, config: LayoutConfig, events: &SharedEventQueue) -> LayoutResult<Self> {
        config.validate()?;

        let LayoutHost {
            state,
            container,
            regions,
            storage,
            overlays,
        } = host;

        let prefs = SizePreferences::new(storage, &config);
        let side = ResizeState::new(prefs.side_width());
        let bottom = ResizeState::new(prefs.bottom_height());
        tracing::debug!(
            "Restored side width {} and bottom height {}",
            side.committed,
            bottom.committed
        );

        let mut subscriptions = DisposableStore::new();
        for kinds in [
            EventKinds::CONTAINER,
            EventKinds::THEME,
            EventKinds::EDITORS,
            EventKinds::ORIENTATION,
            EventKinds::VISIBILITY,
            EventKinds::SASH,
        ] {
            subscriptions.add(events.subscribe(kinds));
        }

        let orientation = state.group_orientation();

        Ok(Self {
            state,
            container,
            regions,
            overlays,
            prefs,
            config,
            side,
            bottom,
            styles: StyleCache::new(),
            vertical_sash: Sash::new(SashId::Vertical),
            horizontal_sash: Sash::new(SashId::Horizontal),
            partition: Partition::default(),
            previous_max_bottom: None,
            orientation,
            layout_count: 0,
            subscriptions,
            disposed: false,
        })
    }

    /// Recompute and apply every region's rectangle.
    ///
    /// Calling this twice with nothing changed in between produces the same
    /// rectangles.
    pub fn layout(&mut self, options: LayoutOptions) {
        profile_function!();

        if self.disposed {
            tracing::warn!("Layout requested after dispose, ignoring");
            return;
        }

        let style = if options.force_style_recompute {
            for region in [Region::Side, Region::Bottom, Region::Main] {
                self.regions.get_mut(region).compute_style();
            }
            self.styles.compute(&self.regions)
        } else {
            self.styles.current_or_compute(&self.regions)
        };

        let container = self.container.client_area();
        let visibility = VisibilitySnapshot::read(self.state.as_ref());
        let orientation = self.state.group_orientation();

        let input = PartitionInput {
            container,
            visibility,
            style,
            top_height: self
                .styles
                .zoom_corrected_top_height(self.container.zoom_factor()),
            side_committed: self.side.committed,
            bottom_committed: self.bottom.committed,
            bottom_before_maximize: self.bottom.before_maximize,
            previous_max_bottom: self.previous_max_bottom,
            toggle_maximized: options.toggle_maximized_panel,
            open_editors: self.state.open_editor_count(),
            orientation,
            default_side_fraction: self.config.default_side_fraction,
            default_bottom_fraction: self.config.default_bottom_fraction,
        };
        let partition = {
            profile_scope!("partition");
            Partition::compute(&input)
        };

        if visibility.side {
            self.side.commit(partition.side_width);
            self.prefs.store_side_width(partition.side_width);
        }
        if visibility.bottom {
            self.bottom.commit(partition.bottom_height);
            self.bottom.before_maximize = partition.bottom_before_maximize;
            self.prefs.store_bottom_height(partition.bottom_height);
        }
        self.previous_max_bottom = Some(partition.max_bottom_height);

        for region in Region::ALL {
            let rect = partition.rect(region);
            let handle = self.regions.get_mut(region);
            handle.set_visible(visibility.is_visible(region));
            handle.set_size(rect.size());
            handle.set_position(rect.edges_within(container));
        }

        if self.container.scroll_offset() != Vec2::ZERO {
            tracing::debug!("Container scrolled after layout, resetting");
            self.container.reset_scroll();
        }

        self.vertical_sash.layout(vertical_sash_geometry(&partition));
        self.horizontal_sash.layout(horizontal_sash_geometry(
            &partition,
            self.config.horizontal_sash_offset,
        ));

        for region in Region::ALL {
            let size = partition.rect(region).size();
            self.regions.get_mut(region).layout(size);
        }
        for overlay in &mut self.overlays {
            overlay.layout(container);
        }

        tracing::trace!(
            "Laid out {}x{}: side {}, bottom {}, main {}x{}",
            container.width,
            container.height,
            partition.side_width,
            partition.bottom_height,
            partition.main.width,
            partition.main.height
        );

        self.partition = partition;
        self.orientation = orientation;
        self.layout_count += 1;
    }

    /// React to one host event.
    pub fn handle_event(&mut self, event: &WorkbenchEvent) -> HandleStatus {
        if self.disposed {
            return HandleStatus::ignored();
        }

        match *event {
            WorkbenchEvent::ContainerResized | WorkbenchEvent::VisibilityChanged(_) => {
                self.layout(LayoutOptions::default());
                HandleStatus::consumed()
            }
            WorkbenchEvent::ThemeChanged => {
                self.layout(LayoutOptions::forced());
                HandleStatus::consumed()
            }
            WorkbenchEvent::EditorsChanged => {
                if self.editors_may_overflow() {
                    tracing::debug!("Editor count may overflow the main region, relayout");
                    self.layout(LayoutOptions::default());
                    HandleStatus::consumed()
                } else {
                    HandleStatus::handled()
                }
            }
            WorkbenchEvent::GroupOrientationChanged => {
                if self.state.group_orientation() != self.orientation {
                    self.layout(LayoutOptions::default());
                    HandleStatus::consumed()
                } else {
                    HandleStatus::handled()
                }
            }
            WorkbenchEvent::Sash(id, sash_event) => self.on_sash_event(id, &sash_event),
        }
    }

    /// Drain `events` and handle them until the queue stays empty.
    ///
    /// Handlers may cause collaborators to push more events (hiding a region
    /// during a drag announces a visibility change); those are picked up by
    /// the next round. Each call closes one profiling frame. Returns the
    /// number of events handled.
    pub fn pump(&mut self, events: &SharedEventQueue) -> usize {
        let mut handled = 0;
        for _ in 0..MAX_PUMP_ROUNDS {
            let mut batch = events.drain();
            if batch.is_empty() {
                break;
            }
            batch.dispatch(|event| {
                let status = self.handle_event(event);
                if status.is_handled() {
                    handled += 1;
                }
                status
            });
        }
        if !events.is_empty() {
            tracing::warn!(
                "Event queue still not settled after {} rounds, {} events pending",
                MAX_PUMP_ROUNDS,
                events.len()
            );
        }
        profiling::new_frame();
        handled
    }

    /// Swap the bottom panel between maximized and its previous height.
    pub fn toggle_maximized_panel(&mut self) {
        self.layout(LayoutOptions::toggle_maximized());
    }

    pub fn is_panel_maximized(&self) -> bool {
        self.partition.is_bottom_maximized()
    }

    fn on_sash_event(&mut self, id: SashId, event: &SashEvent) -> HandleStatus {
        if !self.sash_mut(id).track(event) {
            tracing::trace!("Ignoring {:?} on idle {:?} sash", event, id);
            return HandleStatus::ignored();
        }

        match event {
            SashEvent::Start(_) => {
                self.axis_mut(id).begin_drag();
                HandleStatus::consumed()
            }
            SashEvent::Change(_) => {
                self.on_drag(id);
                HandleStatus::consumed()
            }
            SashEvent::End => {
                self.persist_axis(id);
                HandleStatus::consumed()
            }
            SashEvent::Reset => {
                self.reset_axis(id);
                HandleStatus::consumed()
            }
        }
    }

    fn on_drag(&mut self, id: SashId) {
        profile_function!();

        let sash = self.sash(id);
        let (Some(start_coordinate), Some(coordinate)) =
            (sash.start_coordinate(), sash.current_coordinate())
        else {
            return;
        };

        let style = self.styles.current_or_compute(&self.regions);
        let anchor = self.state.side_anchor();
        let region = axis_region(id);
        let visible = self.state.is_visible(region);
        let container = self.container.client_area();

        let params = match id {
            SashId::Vertical => DragParams {
                sign: id.growth_sign(anchor),
                start_coordinate,
                coordinate,
                drag_start_size: self.side.drag_start,
                min_size: style.side_min_width,
                default_min_size: DEFAULT_MIN_SIDE_WIDTH,
                hide_threshold: self.config.hide_side_threshold,
                visible,
                reference_bounds: side_reference_bounds(anchor, container, &style),
            },
            SashId::Horizontal => DragParams {
                sign: id.growth_sign(anchor),
                start_coordinate,
                coordinate,
                drag_start_size: self.bottom.drag_start,
                min_size: style.bottom_min_height,
                default_min_size: DEFAULT_MIN_BOTTOM_HEIGHT,
                hide_threshold: self.config.hide_bottom_threshold,
                visible,
                reference_bounds: (
                    self.partition.top_height,
                    container.height - self.partition.status_height,
                ),
            },
        };

        match reconcile(&params) {
            DragOutcome::Resize { committed, relayout } => {
                self.axis_mut(id).commit(committed);
                if relayout {
                    self.layout(LayoutOptions::default());
                }
            }
            DragOutcome::Hide {
                committed,
                rebased_start,
            } => {
                tracing::debug!("Dragged {:?} past its hide threshold", region);
                self.axis_mut(id).commit(committed);
                self.sash_mut(id).rebase(rebased_start);
                self.state.set_visible(region, false);
            }
            DragOutcome::Show {
                committed,
                drag_start,
            } => {
                tracing::debug!("Dragged {:?} open again", region);
                let axis = self.axis_mut(id);
                axis.commit(committed);
                axis.drag_start = drag_start;
                self.state.set_visible(region, true);
            }
            DragOutcome::Unchanged => {}
        }
    }

    fn persist_axis(&mut self, id: SashId) {
        if !self.state.is_visible(axis_region(id)) {
            return;
        }
        match id {
            SashId::Vertical => self.prefs.store_side_width(self.side.committed),
            SashId::Horizontal => self.prefs.store_bottom_height(self.bottom.committed),
        }
    }

    fn reset_axis(&mut self, id: SashId) {
        let size = match id {
            SashId::Vertical => {
                DEFAULT_MIN_SIDE_WIDTH.max(self.state.optimal_side_width().unwrap_or(0.0))
            }
            SashId::Horizontal => {
                let column_height = if self.layout_count > 0 {
                    self.partition.column_height
                } else {
                    self.container.client_area().height
                };
                column_height * self.config.default_bottom_fraction
            }
        };
        tracing::debug!("Resetting {:?} to {}", axis_region(id), size);

        self.axis_mut(id).commit(size);
        match id {
            SashId::Vertical => self.prefs.store_side_width(size),
            SashId::Horizontal => self.prefs.store_bottom_height(size),
        }
        self.state.set_visible(axis_region(id), true);
        self.layout(LayoutOptions::default());
    }

    /// Whether the open editors' combined minimum exceeds the space the
    /// current committed sizes leave for them.
    fn editors_may_overflow(&mut self) -> bool {
        let editors = self.state.open_editor_count();
        if editors <= 1 {
            return false;
        }
        let style = self.styles.current_or_compute(&self.regions);
        let editors = editors as f32;
        let p = &self.partition;
        match self.state.group_orientation() {
            GroupOrientation::SideBySide => {
                p.container.width - p.side_width - p.rail_width < editors * style.main_min_width
            }
            GroupOrientation::Stacked => {
                p.column_height - p.bottom_height < editors * style.main_min_height
            }
        }
    }

    fn axis_mut(&mut self, id: SashId) -> &mut ResizeState {
        match id {
            SashId::Vertical => &mut self.side,
            SashId::Horizontal => &mut self.bottom,
        }
    }

    pub fn sash(&self, id: SashId) -> &Sash {
        match id {
            SashId::Vertical => &self.vertical_sash,
            SashId::Horizontal => &self.horizontal_sash,
        }
    }

    fn sash_mut(&mut self, id: SashId) -> &mut Sash {
        match id {
            SashId::Vertical => &mut self.vertical_sash,
            SashId::Horizontal => &mut self.horizontal_sash,
        }
    }

    pub fn vertical_sash_top(&self) -> f32 {
        self.vertical_sash.top()
    }

    pub fn vertical_sash_left(&self) -> f32 {
        self.vertical_sash.left()
    }

    pub fn vertical_sash_height(&self) -> f32 {
        self.vertical_sash.length()
    }

    pub fn horizontal_sash_top(&self) -> f32 {
        self.horizontal_sash.top()
    }

    pub fn horizontal_sash_left(&self) -> f32 {
        self.horizontal_sash.left()
    }

    pub fn horizontal_sash_width(&self) -> f32 {
        self.horizontal_sash.length()
    }

    /// Rectangles applied by the last layout pass.
    pub fn rects(&self) -> RegionRects {
        self.partition.rects()
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Committed side panel width.
    pub fn side_width(&self) -> f32 {
        self.side.committed
    }

    /// Committed bottom panel height.
    pub fn bottom_height(&self) -> f32 {
        self.bottom.committed
    }

    pub fn style(&self) -> Option<&StyleSnapshot> {
        self.styles.current()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of completed layout passes.
    pub fn layout_count(&self) -> u64 {
        self.layout_count
    }

    /// Cancel every event subscription. Further layouts and events are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        tracing::debug!("Disposing workbench layout");
        self.subscriptions.dispose();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl std::fmt::Debug for WorkbenchLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkbenchLayout")
            .field("side", &self.side)
            .field("bottom", &self.bottom)
            .field("partition", &self.partition)
            .field("layout_count", &self.layout_count)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

fn axis_region(id: SashId) -> Region {
    match id {
        SashId::Vertical => Region::Side,
        SashId::Horizontal => Region::Bottom,
    }
}

/// Range the vertical sash's reference may move to: between the rail's
/// inner edge and the container's far edge.
fn side_reference_bounds(anchor: Anchor, container: Size<f32>, style: &StyleSnapshot) -> (f32, f32) {
    match anchor {
        Anchor::Start => (style.rail_width, container.width),
        Anchor::End => (0.0, container.width - style.rail_width),
    }
}
