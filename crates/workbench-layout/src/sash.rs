//! Drag handles between the side panel and the main column (vertical sash)
//! and between the main region and the bottom panel (horizontal sash).
//!
//! A [`Sash`] is a geometry source, not a sizing policy: it tracks the
//! Idle → Dragging → Idle interaction and where the pointer is, and caches
//! the extent it was last laid out at. Sizes are decided by the layout.

use workbench_core::math::Vec2;

use crate::event::SashEvent;
use crate::partition::Partition;
use crate::region::Anchor;

/// Which of the two drag handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SashId {
    /// Vertical line on the side panel's inner edge; resizes the side width.
    Vertical,
    /// Horizontal line on the bottom panel's top edge; resizes the bottom height.
    Horizontal,
}

impl SashId {
    /// The pointer coordinate this sash follows.
    pub fn coordinate(&self, position: Vec2) -> f32 {
        match self {
            SashId::Vertical => position.x,
            SashId::Horizontal => position.y,
        }
    }

    /// `+1.0` if pointer motion towards larger coordinates grows the region.
    ///
    /// The bottom panel grows when dragged up, the side panel when dragged
    /// away from the edge it is anchored to.
    pub fn growth_sign(&self, anchor: Anchor) -> f32 {
        match self {
            SashId::Vertical => anchor.sign(),
            SashId::Horizontal => -1.0,
        }
    }
}

/// Interaction state of a sash.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SashState {
    #[default]
    Idle,
    Dragging {
        /// Reference position the drag is measured from.
        start: Vec2,
        /// Last reported pointer position.
        current: Vec2,
    },
}

/// Where a sash sits: its top and left offsets in the container and its length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SashGeometry {
    pub top: f32,
    pub left: f32,
    pub length: f32,
}

/// Geometry of the vertical sash for a completed layout.
pub fn vertical_sash_geometry(partition: &Partition) -> SashGeometry {
    let left = match partition.anchor {
        Anchor::Start => partition.side_width + partition.rail_width,
        Anchor::End => partition.container.width - partition.side_width - partition.rail_width,
    };
    SashGeometry {
        top: partition.top_height,
        left,
        length: partition.column_height,
    }
}

/// Geometry of the horizontal sash for a completed layout.
///
/// `offset` nudges the sash below the main region's bottom edge.
pub fn horizontal_sash_geometry(partition: &Partition, offset: f32) -> SashGeometry {
    let left = match partition.anchor {
        Anchor::Start => partition.side_width + partition.rail_width,
        Anchor::End => 0.0,
    };
    SashGeometry {
        top: offset + partition.top_height + partition.main.height,
        left,
        length: partition.column_width,
    }
}

/// One drag handle.
#[derive(Debug, Clone)]
pub struct Sash {
    id: SashId,
    state: SashState,
    geometry: SashGeometry,
}

impl Sash {
    pub fn new(id: SashId) -> Self {
        Self {
            id,
            state: SashState::Idle,
            geometry: SashGeometry::default(),
        }
    }

    pub fn id(&self) -> SashId {
        self.id
    }

    pub fn state(&self) -> SashState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SashState::Dragging { .. })
    }

    /// Advance the interaction state.
    ///
    /// Returns `false` for events that make no sense in the current state
    /// (a move or release without a press); the caller should ignore them.
    pub fn track(&mut self, event: &SashEvent) -> bool {
        match (*event, self.state) {
            (SashEvent::Start(position), _) => {
                self.state = SashState::Dragging {
                    start: position,
                    current: position,
                };
                true
            }
            (SashEvent::Change(position), SashState::Dragging { start, .. }) => {
                self.state = SashState::Dragging {
                    start,
                    current: position,
                };
                true
            }
            (SashEvent::End, SashState::Dragging { .. }) => {
                self.state = SashState::Idle;
                true
            }
            (SashEvent::Reset, _) => {
                self.state = SashState::Idle;
                true
            }
            (SashEvent::Change(_) | SashEvent::End, SashState::Idle) => false,
        }
    }

    /// Reference coordinate along this sash's axis, while dragging.
    pub fn start_coordinate(&self) -> Option<f32> {
        match self.state {
            SashState::Dragging { start, .. } => Some(self.id.coordinate(start)),
            SashState::Idle => None,
        }
    }

    /// Current pointer coordinate along this sash's axis, while dragging.
    pub fn current_coordinate(&self) -> Option<f32> {
        match self.state {
            SashState::Dragging { current, .. } => Some(self.id.coordinate(current)),
            SashState::Idle => None,
        }
    }

    /// Move the reference coordinate, keeping the other axis.
    pub fn rebase(&mut self, coordinate: f32) {
        if let SashState::Dragging { start, current } = self.state {
            let start = match self.id {
                SashId::Vertical => Vec2::new(coordinate, start.y),
                SashId::Horizontal => Vec2::new(start.x, coordinate),
            };
            self.state = SashState::Dragging { start, current };
        }
    }

    /// Cache the extent computed by the last completed layout.
    pub fn layout(&mut self, geometry: SashGeometry) {
        self.geometry = geometry;
    }

    pub fn geometry(&self) -> SashGeometry {
        self.geometry
    }

    pub fn top(&self) -> f32 {
        self.geometry.top
    }

    pub fn left(&self) -> f32 {
        self.geometry.left
    }

    pub fn length(&self) -> f32 {
        self.geometry.length
    }
}
