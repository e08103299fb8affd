//! Sash drags driven through the event queue.

use workbench_core::math::Vec2;
use workbench_layout::config::{BOTTOM_HEIGHT_KEY, SIDE_WIDTH_KEY};
use workbench_layout::{
    Anchor, LayoutOptions, Region, SashEvent, SashId, StorageScope, WorkbenchEvent,
    WorkbenchLayout,
};
use workbench_test_utils::WorkbenchFixture;

fn setup() -> (WorkbenchFixture, WorkbenchLayout) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let fixture = WorkbenchFixture::new(1200.0, 800.0);
    fixture
        .storage
        .seed(SIDE_WIDTH_KEY, StorageScope::Global, 300.0);
    fixture
        .storage
        .seed(BOTTOM_HEIGHT_KEY, StorageScope::Global, 200.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());
    (fixture, layout)
}

fn sash(fixture: &WorkbenchFixture, layout: &mut WorkbenchLayout, id: SashId, event: SashEvent) {
    fixture.events.push(WorkbenchEvent::Sash(id, event));
    layout.pump(&fixture.events);
}

fn vertical(fixture: &WorkbenchFixture, layout: &mut WorkbenchLayout, event: SashEvent) {
    sash(fixture, layout, SashId::Vertical, event);
}

fn horizontal(fixture: &WorkbenchFixture, layout: &mut WorkbenchLayout, event: SashEvent) {
    sash(fixture, layout, SashId::Horizontal, event);
}

#[test]
fn test_drag_resizes_side() {
    let (fixture, mut layout) = setup();

    vertical(&fixture, &mut layout, SashEvent::Start(Vec2::new(350.0, 100.0)));
    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(400.0, 100.0)));

    assert_eq!(layout.side_width(), 350.0);
    assert_eq!(layout.rects().side.width, 350.0);
    assert_eq!(layout.vertical_sash_left(), 400.0);
    assert!(layout.sash(SashId::Vertical).is_dragging());

    vertical(&fixture, &mut layout, SashEvent::End);
    assert!(!layout.sash(SashId::Vertical).is_dragging());
    assert_eq!(fixture.storage.last_write(SIDE_WIDTH_KEY), Some(350.0));
}

#[test]
fn test_drag_within_hysteresis_band_commits_floor_only() {
    let (fixture, mut layout) = setup();
    let passes = layout.layout_count();

    vertical(&fixture, &mut layout, SashEvent::Start(Vec2::new(350.0, 100.0)));
    // Proposed width 150: under the minimum, above the hide threshold.
    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(200.0, 100.0)));

    assert_eq!(layout.side_width(), 170.0);
    assert_eq!(layout.layout_count(), passes);
    // Sash geometry still reflects the last completed layout.
    assert_eq!(layout.vertical_sash_left(), 350.0);
    assert!(fixture.state.visible(Region::Side));
}

#[test]
fn test_hysteresis_hide_then_show() {
    let (fixture, mut layout) = setup();

    vertical(&fixture, &mut layout, SashEvent::Start(Vec2::new(350.0, 100.0)));
    // 300 + (169 - 350) = 119, and 119 + 50 < 170.
    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(169.0, 100.0)));

    assert!(!fixture.state.visible(Region::Side));
    assert_eq!(fixture.side.visible(), Some(false));
    assert_eq!(layout.side_width(), 300.0);
    assert_eq!(layout.vertical_sash_left(), 50.0);

    // The reference was rebased to the rail edge: opening needs 170px of travel.
    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(219.0, 100.0)));
    assert!(!fixture.state.visible(Region::Side));

    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(221.0, 100.0)));
    assert!(fixture.state.visible(Region::Side));
    assert_eq!(layout.side_width(), 170.0);
    assert_eq!(layout.rects().side.width, 170.0);

    // Further motion continues smoothly from the shown size.
    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(261.0, 100.0)));
    assert_eq!(layout.side_width(), 210.0);

    vertical(&fixture, &mut layout, SashEvent::End);
    assert_eq!(fixture.storage.last_write(SIDE_WIDTH_KEY), Some(210.0));
}

#[test]
fn test_drag_with_end_anchor_inverts_direction() {
    let (fixture, mut layout) = setup();
    fixture.state.set_anchor(Anchor::End);
    layout.pump(&fixture.events);
    assert_eq!(layout.vertical_sash_left(), 850.0);

    vertical(&fixture, &mut layout, SashEvent::Start(Vec2::new(850.0, 100.0)));
    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(800.0, 100.0)));

    assert_eq!(layout.side_width(), 350.0);
    assert_eq!(layout.rects().side.x, 800.0);
}

#[test]
fn test_drag_resizes_bottom_upwards() {
    let (fixture, mut layout) = setup();
    assert_eq!(layout.horizontal_sash_top(), 580.0);

    horizontal(&fixture, &mut layout, SashEvent::Start(Vec2::new(600.0, 580.0)));
    horizontal(&fixture, &mut layout, SashEvent::Change(Vec2::new(600.0, 530.0)));

    assert_eq!(layout.bottom_height(), 250.0);
    assert_eq!(layout.rects().main.height, 498.0);
    assert_eq!(layout.horizontal_sash_top(), 530.0);
}

#[test]
fn test_bottom_hides_and_reopens() {
    let (fixture, mut layout) = setup();

    horizontal(&fixture, &mut layout, SashEvent::Start(Vec2::new(600.0, 580.0)));
    horizontal(&fixture, &mut layout, SashEvent::Change(Vec2::new(600.0, 780.0)));

    assert!(!fixture.state.visible(Region::Bottom));
    assert_eq!(layout.rects().main.height, 748.0);
    assert_eq!(layout.bottom_height(), 200.0);

    // Reference clamped to the status strip's top edge (778).
    horizontal(&fixture, &mut layout, SashEvent::Change(Vec2::new(600.0, 702.0)));
    assert!(!fixture.state.visible(Region::Bottom));

    horizontal(&fixture, &mut layout, SashEvent::Change(Vec2::new(600.0, 700.0)));
    assert!(fixture.state.visible(Region::Bottom));
    assert_eq!(layout.bottom_height(), 77.0);
}

#[test]
fn test_moves_without_start_are_ignored() {
    let (fixture, mut layout) = setup();
    let passes = layout.layout_count();

    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(500.0, 100.0)));
    vertical(&fixture, &mut layout, SashEvent::End);

    assert_eq!(layout.side_width(), 300.0);
    assert_eq!(layout.layout_count(), passes);
}

#[test]
fn test_width_reset_restores_minimum_and_shows_side() {
    let (fixture, mut layout) = setup();
    fixture.state.show(Region::Side, false);
    layout.pump(&fixture.events);
    assert_eq!(fixture.side.visible(), Some(false));

    vertical(&fixture, &mut layout, SashEvent::Reset);

    assert_eq!(layout.side_width(), 170.0);
    assert!(fixture.state.visible(Region::Side));
    assert_eq!(layout.rects().side.width, 170.0);
    assert_eq!(fixture.storage.last_write(SIDE_WIDTH_KEY), Some(170.0));
    assert!(fixture.state.set_visible_calls().contains(&(Region::Side, true)));
}

#[test]
fn test_width_reset_prefers_optimal_view_width() {
    let (fixture, mut layout) = setup();
    fixture.state.set_optimal_side_width(Some(260.0));

    vertical(&fixture, &mut layout, SashEvent::Reset);
    assert_eq!(layout.side_width(), 260.0);

    fixture.state.set_optimal_side_width(Some(90.0));
    vertical(&fixture, &mut layout, SashEvent::Reset);
    assert_eq!(layout.side_width(), 170.0);
}

#[test]
fn test_height_reset_uses_default_fraction() {
    let (fixture, mut layout) = setup();
    fixture.state.show(Region::Bottom, false);
    layout.pump(&fixture.events);

    horizontal(&fixture, &mut layout, SashEvent::Reset);

    assert!(fixture.state.visible(Region::Bottom));
    assert_eq!(layout.bottom_height(), 748.0_f32 * 0.4);
}

#[test]
fn test_reset_during_drag_ends_it() {
    let (fixture, mut layout) = setup();
    vertical(&fixture, &mut layout, SashEvent::Start(Vec2::new(350.0, 100.0)));
    vertical(&fixture, &mut layout, SashEvent::Reset);

    assert!(!layout.sash(SashId::Vertical).is_dragging());
    vertical(&fixture, &mut layout, SashEvent::Change(Vec2::new(500.0, 100.0)));
    assert_eq!(layout.side_width(), 170.0);
}
