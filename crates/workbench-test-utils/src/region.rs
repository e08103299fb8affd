//! Recording region handle.

use std::sync::Arc;

use parking_lot::Mutex;
use workbench_core::geometry::{Edges, Size};
use workbench_layout::{ComputedStyle, RegionHandle};

/// Records a call made on a region for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionCall {
    SetSize(Size<f32>),
    SetPosition(Edges<f32>),
    SetVisible(bool),
    ComputeStyle,
    Layout(Size<f32>),
}

#[derive(Debug, Default)]
struct RegionRecord {
    style: ComputedStyle,
    size: Option<Size<f32>>,
    position: Option<Edges<f32>>,
    visible: Option<bool>,
    calls: Vec<RegionCall>,
}

/// Region handle that remembers the last applied box and every call.
#[derive(Debug, Clone, Default)]
pub struct MockRegion {
    inner: Arc<Mutex<RegionRecord>>,
}

impl MockRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ComputedStyle) -> Self {
        let region = Self::new();
        region.set_style(style);
        region
    }

    /// Change what the region reports as its computed style.
    pub fn set_style(&self, style: ComputedStyle) {
        self.inner.lock().style = style;
    }

    /// Last size applied by the layout.
    pub fn size(&self) -> Option<Size<f32>> {
        self.inner.lock().size
    }

    /// Last position applied by the layout.
    pub fn position(&self) -> Option<Edges<f32>> {
        self.inner.lock().position
    }

    /// Last visibility applied by the layout.
    pub fn visible(&self) -> Option<bool> {
        self.inner.lock().visible
    }

    pub fn calls(&self) -> Vec<RegionCall> {
        self.inner.lock().calls.clone()
    }

    pub fn count_layouts(&self) -> usize {
        self.count(|c| matches!(c, RegionCall::Layout(_)))
    }

    pub fn count_compute_style(&self) -> usize {
        self.count(|c| matches!(c, RegionCall::ComputeStyle))
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    fn count(&self, predicate: impl Fn(&RegionCall) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|c| predicate(c)).count()
    }
}

impl RegionHandle for MockRegion {
    fn set_size(&mut self, size: Size<f32>) {
        let mut record = self.inner.lock();
        record.size = Some(size);
        record.calls.push(RegionCall::SetSize(size));
    }

    fn set_position(&mut self, position: Edges<f32>) {
        let mut record = self.inner.lock();
        record.position = Some(position);
        record.calls.push(RegionCall::SetPosition(position));
    }

    fn set_visible(&mut self, visible: bool) {
        let mut record = self.inner.lock();
        record.visible = Some(visible);
        record.calls.push(RegionCall::SetVisible(visible));
    }

    fn computed_style(&self) -> ComputedStyle {
        self.inner.lock().style
    }

    fn compute_style(&mut self) {
        self.inner.lock().calls.push(RegionCall::ComputeStyle);
    }

    fn layout(&mut self, size: Size<f32>) {
        self.inner.lock().calls.push(RegionCall::Layout(size));
    }
}
