//! Mock container element and overlay.

use std::sync::Arc;

use parking_lot::Mutex;
use workbench_core::geometry::Size;
use workbench_core::math::Vec2;
use workbench_layout::{ContainerArea, OverlayLayout, SharedEventQueue, WorkbenchEvent};

#[derive(Debug)]
struct ContainerRecord {
    area: Size<f32>,
    zoom: f32,
    scroll: Vec2,
    scroll_resets: usize,
}

/// Container with a settable client area, zoom and scroll offset.
#[derive(Debug, Clone)]
pub struct MockContainer {
    inner: Arc<Mutex<ContainerRecord>>,
    events: Option<SharedEventQueue>,
}

impl MockContainer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ContainerRecord {
                area: Size::new(width, height),
                zoom: 1.0,
                scroll: Vec2::ZERO,
                scroll_resets: 0,
            })),
            events: None,
        }
    }

    /// Announce resizes on `events`.
    pub fn with_events(mut self, events: SharedEventQueue) -> Self {
        self.events = Some(events);
        self
    }

    /// Change the client area and announce it.
    pub fn resize(&self, width: f32, height: f32) {
        self.inner.lock().area = Size::new(width, height);
        if let Some(events) = &self.events {
            events.push(WorkbenchEvent::ContainerResized);
        }
    }

    pub fn set_zoom(&self, zoom: f32) {
        self.inner.lock().zoom = zoom;
    }

    /// Simulate content growth scrolling the container.
    pub fn set_scroll_offset(&self, offset: Vec2) {
        self.inner.lock().scroll = offset;
    }

    pub fn scroll_resets(&self) -> usize {
        self.inner.lock().scroll_resets
    }
}

impl ContainerArea for MockContainer {
    fn client_area(&self) -> Size<f32> {
        self.inner.lock().area
    }

    fn zoom_factor(&self) -> f32 {
        self.inner.lock().zoom
    }

    fn scroll_offset(&self) -> Vec2 {
        self.inner.lock().scroll
    }

    fn reset_scroll(&mut self) {
        let mut record = self.inner.lock();
        record.scroll = Vec2::ZERO;
        record.scroll_resets += 1;
    }
}

/// Overlay that records every container size it was laid out at.
#[derive(Debug, Clone, Default)]
pub struct MockOverlay {
    sizes: Arc<Mutex<Vec<Size<f32>>>>,
}

impl MockOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sizes(&self) -> Vec<Size<f32>> {
        self.sizes.lock().clone()
    }
}

impl OverlayLayout for MockOverlay {
    fn layout(&mut self, container: Size<f32>) {
        self.sizes.lock().push(container);
    }
}
