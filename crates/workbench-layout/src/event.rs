//! Host event queue feeding the layout.
//!
//! Every trigger the layout reacts to arrives as a [`WorkbenchEvent`].
//! Collaborators push events while the layout is busy; the host drains them
//! afterwards, so two layout passes never interleave.

use std::collections::VecDeque;

use workbench_core::alloc::HashMap;
use workbench_core::math::Vec2;

use crate::region::Region;
use crate::sash::SashId;

/// Pointer interaction reported by a drag handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SashEvent {
    /// Pointer pressed on the sash at this container coordinate.
    Start(Vec2),
    /// Pointer moved while pressed.
    Change(Vec2),
    /// Pointer released.
    End,
    /// Double activation: restore the default size.
    Reset,
}

/// Triggers the layout can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkbenchEvent {
    /// The container's client area changed size.
    ContainerResized,
    /// Theme or display zoom changed; styles must be re-read.
    ThemeChanged,
    /// Editors were opened or closed.
    EditorsChanged,
    /// Editor groups switched between stacked and side-by-side.
    GroupOrientationChanged,
    /// A region was shown or hidden by the visibility provider.
    VisibilityChanged(Region),
    /// A drag handle reported pointer interaction.
    Sash(SashId, SashEvent),
}

bitflags::bitflags! {
    /// Event families, used to subscribe.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        const CONTAINER = 0b0000_0001;
        const THEME = 0b0000_0010;
        const EDITORS = 0b0000_0100;
        const ORIENTATION = 0b0000_1000;
        const VISIBILITY = 0b0001_0000;
        const SASH = 0b0010_0000;
    }
}

impl WorkbenchEvent {
    pub fn kind(&self) -> EventKinds {
        match self {
            WorkbenchEvent::ContainerResized => EventKinds::CONTAINER,
            WorkbenchEvent::ThemeChanged => EventKinds::THEME,
            WorkbenchEvent::EditorsChanged => EventKinds::EDITORS,
            WorkbenchEvent::GroupOrientationChanged => EventKinds::ORIENTATION,
            WorkbenchEvent::VisibilityChanged(_) => EventKinds::VISIBILITY,
            WorkbenchEvent::Sash(..) => EventKinds::SASH,
        }
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// Identifies one live subscription on a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Event queue with priority lane, subscription filtering and drag coalescing.
pub struct EventQueue {
    /// Pending events in arrival order.
    pending: VecDeque<WorkbenchEvent>,

    /// Container resizes, processed before anything else.
    priority: VecDeque<WorkbenchEvent>,

    subscriptions: HashMap<SubscriptionId, EventKinds>,
    next_subscription: u64,

    stats: EventStats,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(32),
            priority: VecDeque::with_capacity(2),
            subscriptions: HashMap::new(),
            next_subscription: 0,
            stats: EventStats::default(),
        }
    }

    /// Push an event.
    ///
    /// Events no subscription wants are dropped. A pointer move directly
    /// following another move on the same sash replaces it: only the most
    /// recent coordinate matters.
    pub fn push(&mut self, event: WorkbenchEvent) {
        self.stats.events_received += 1;

        if !self.wants(event.kind()) {
            self.stats.events_dropped += 1;
            tracing::trace!("No subscriber for {:?}, dropping", event);
            return;
        }

        match event {
            WorkbenchEvent::ContainerResized => {
                if self.priority.contains(&event) {
                    self.stats.events_coalesced += 1;
                } else {
                    self.priority.push_back(event);
                }
            }
            WorkbenchEvent::Sash(id, SashEvent::Change(_)) => {
                let coalesce = matches!(
                    self.pending.back(),
                    Some(WorkbenchEvent::Sash(last_id, SashEvent::Change(_))) if *last_id == id
                );
                match self.pending.back_mut() {
                    Some(last) if coalesce => {
                        *last = event;
                        self.stats.events_coalesced += 1;
                    }
                    _ => self.pending.push_back(event),
                }
            }
            _ => self.pending.push_back(event),
        }
    }

    /// Take every queued event, priority lane first.
    pub fn drain(&mut self) -> EventBatch {
        let mut events = Vec::with_capacity(self.priority.len() + self.pending.len());
        events.extend(self.priority.drain(..));
        events.extend(self.pending.drain(..));

        self.stats.events_processed += events.len();

        EventBatch { events }
    }

    pub fn len(&self) -> usize {
        self.priority.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priority.is_empty() && self.pending.is_empty()
    }

    /// Whether any live subscription covers `kinds`.
    pub fn wants(&self, kinds: EventKinds) -> bool {
        self.subscriptions.values().any(|k| k.intersects(kinds))
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub(crate) fn add_subscription(&mut self, kinds: EventKinds) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.insert(id, kinds);
        id
    }

    pub(crate) fn remove_subscription(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = EventStats::default();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Events drained from a queue in one go.
pub struct EventBatch {
    events: Vec<WorkbenchEvent>,
}

impl EventBatch {
    pub fn iter(&self) -> impl Iterator<Item = &WorkbenchEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand each event to `handler`, keeping the ones it does not consume.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&WorkbenchEvent) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

#[derive(Default, Debug, Clone)]
pub struct EventStats {
    pub events_received: usize,
    pub events_processed: usize,
    /// Pushed while nobody was subscribed to their kind.
    pub events_dropped: usize,
    /// Merged into an already queued event.
    pub events_coalesced: usize,
}
