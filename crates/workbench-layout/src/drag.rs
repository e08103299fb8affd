//! Drag reconciliation for a resizable axis.
//!
//! A sash only reports where the pointer is. Turning that into a committed
//! size, including the snap-to-hide and snap-to-show hysteresis, happens
//! here as a pure function so both axes share one code path.

/// Inputs for one pointer-move tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragParams {
    /// `+1.0` when pointer motion along the positive axis grows the region, `-1.0` otherwise.
    pub sign: f32,
    /// Reference pointer coordinate the drag is measured from.
    pub start_coordinate: f32,
    /// Current pointer coordinate.
    pub coordinate: f32,
    /// Committed size when the drag (or the last show) began.
    pub drag_start_size: f32,
    /// Minimum size from the current style snapshot.
    pub min_size: f32,
    /// Default minimum, used to compensate the reference when hiding.
    pub default_min_size: f32,
    pub hide_threshold: f32,
    pub visible: bool,
    /// Range the reference coordinate may be moved to when hiding.
    pub reference_bounds: (f32, f32),
}

/// What the layout should do in response to a drag tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Keep the region visible at `committed`. Re-layout only when `relayout`.
    Resize { committed: f32, relayout: bool },
    /// Hide the region, restore `committed` for when it comes back, and
    /// measure further motion from `rebased_start`.
    Hide { committed: f32, rebased_start: f32 },
    /// Show the region at `committed`, measuring further motion as if the
    /// drag had started at `drag_start`.
    Show { committed: f32, drag_start: f32 },
    /// Hidden, and the pointer has not yet travelled far enough to show it.
    Unchanged,
}

pub fn reconcile(params: &DragParams) -> DragOutcome {
    let travel = params.sign * (params.coordinate - params.start_coordinate);
    let proposed = params.drag_start_size + travel;

    if !params.visible {
        if travel >= params.min_size {
            return DragOutcome::Show {
                committed: params.min_size,
                drag_start: params.min_size - travel,
            };
        }
        return DragOutcome::Unchanged;
    }

    if proposed + params.hide_threshold < params.min_size {
        let compensation = params.default_min_size - params.hide_threshold;
        let (low, high) = params.reference_bounds;
        let rebased_start = (params.coordinate - params.sign * compensation)
            .max(low)
            .min(high);
        return DragOutcome::Hide {
            committed: params.drag_start_size,
            rebased_start,
        };
    }

    DragOutcome::Resize {
        committed: params.min_size.max(proposed),
        relayout: proposed >= params.min_size,
    }
}
