//! Full layout passes over a mocked workbench.

use workbench_core::geometry::{Edges, Rect, Size};
use workbench_core::math::Vec2;
use workbench_layout::config::{BOTTOM_HEIGHT_KEY, SIDE_WIDTH_KEY};
use workbench_layout::{
    Anchor, ConfigError, GroupOrientation, LayoutConfig, LayoutError, LayoutOptions, Region,
    StorageScope,
};
use workbench_test_utils::WorkbenchFixture;

/// Fixture with a persisted 300px side panel and 200px bottom panel.
fn seeded(width: f32, height: f32) -> WorkbenchFixture {
    let fixture = WorkbenchFixture::new(width, height);
    fixture
        .storage
        .seed(SIDE_WIDTH_KEY, StorageScope::Global, 300.0);
    fixture
        .storage
        .seed(BOTTOM_HEIGHT_KEY, StorageScope::Global, 200.0);
    fixture
}

#[test]
fn test_regions_tile_container() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    let rects = layout.rects();
    assert_eq!(rects.top, Rect::new(0.0, 0.0, 1200.0, 30.0));
    assert_eq!(rects.rail, Rect::new(0.0, 30.0, 50.0, 748.0));
    assert_eq!(rects.side, Rect::new(50.0, 30.0, 300.0, 748.0));
    assert_eq!(rects.main, Rect::new(350.0, 30.0, 850.0, 548.0));
    assert_eq!(rects.bottom, Rect::new(350.0, 578.0, 850.0, 200.0));
    assert_eq!(rects.status, Rect::new(0.0, 778.0, 1200.0, 22.0));
}

#[test]
fn test_regions_receive_their_boxes() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(fixture.main.size(), Some(Size::new(850.0, 548.0)));
    assert_eq!(
        fixture.main.position(),
        Some(Edges::new(30.0, 0.0, 222.0, 350.0))
    );
    assert_eq!(fixture.bottom.size(), Some(Size::new(850.0, 200.0)));
    for region in Region::ALL {
        assert_eq!(fixture.region(region).visible(), Some(true));
        assert_eq!(fixture.region(region).count_layouts(), 1);
    }
}

#[test]
fn test_partition_sums_for_various_sizes() {
    for (width, height) in [(1200.0, 800.0), (1024.0, 768.0), (1920.0, 1080.0), (900.0, 600.0)] {
        let fixture = seeded(width, height);
        let mut layout = fixture.build().unwrap();
        layout.layout(LayoutOptions::default());

        let p = layout.partition();
        assert_eq!(p.side_width + p.rail_width + p.main.width, width);
        assert_eq!(
            p.top_height + p.main.height + p.bottom_height + p.status_height,
            height
        );
    }
}

#[test]
fn test_layout_is_idempotent() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();

    layout.layout(LayoutOptions::default());
    let first = layout.rects();
    let side_box = fixture.side.size();

    layout.layout(LayoutOptions::default());
    assert_eq!(layout.rects(), first);
    assert_eq!(fixture.side.size(), side_box);
    assert_eq!(layout.side_width(), 300.0);
    assert_eq!(layout.bottom_height(), 200.0);
}

#[test]
fn test_unset_sizes_default_and_are_committed() {
    let fixture = WorkbenchFixture::new(1000.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(layout.side_width(), 200.0);
    assert_eq!(layout.bottom_height(), 748.0_f32 * 0.4);
    assert_eq!(fixture.storage.last_write(SIDE_WIDTH_KEY), Some(200.0));
    assert_eq!(
        fixture.storage.last_write(BOTTOM_HEIGHT_KEY),
        Some(748.0_f32 * 0.4)
    );
}

#[test]
fn test_default_side_width_respects_minimum_in_narrow_container() {
    let fixture = WorkbenchFixture::new(600.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(layout.rects().side.width, 170.0);
    assert_eq!(layout.rects().main.width, 380.0);
    assert_eq!(fixture.storage.last_write(SIDE_WIDTH_KEY), Some(170.0));

    // The committed minimum survives the next pass.
    layout.layout(LayoutOptions::default());
    assert_eq!(layout.side_width(), 170.0);
}

#[test]
fn test_persisted_sizes_are_read_at_construction() {
    let fixture = seeded(1200.0, 800.0);
    let layout = fixture.build().unwrap();

    assert_eq!(layout.side_width(), 300.0);
    assert_eq!(layout.bottom_height(), 200.0);
    assert_eq!(layout.layout_count(), 0);
}

#[test]
fn test_sizes_persist_only_while_visible() {
    let fixture = seeded(1200.0, 800.0);
    fixture.state.show(Region::Bottom, false);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(fixture.storage.last_write(SIDE_WIDTH_KEY), Some(300.0));
    assert_eq!(fixture.storage.last_write(BOTTOM_HEIGHT_KEY), None);
    assert_eq!(layout.bottom_height(), 200.0);
}

#[test]
fn test_rejected_writes_do_not_break_layout() {
    let fixture = seeded(1200.0, 800.0);
    fixture.storage.reject_writes(true);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(layout.rects().side.width, 300.0);
    assert!(fixture.storage.writes().is_empty());
}

#[test]
fn test_hidden_side_and_bottom_without_rail() {
    let fixture = WorkbenchFixture::new(1200.0, 800.0).with_rail_width(0.0);
    fixture.state.show(Region::Side, false);
    fixture.state.show(Region::Bottom, false);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(layout.rects().main, Rect::new(0.0, 30.0, 1200.0, 748.0));
    assert_eq!(fixture.side.visible(), Some(false));
    assert_eq!(fixture.bottom.visible(), Some(false));
    assert_eq!(fixture.side.size(), Some(Size::new(0.0, 748.0)));
}

#[test]
fn test_hidden_side_main_follows_rail() {
    let fixture = seeded(1200.0, 800.0);
    fixture.state.show(Region::Side, false);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    let rects = layout.rects();
    assert_eq!(rects.main, Rect::new(50.0, 30.0, 1150.0, 548.0));
    assert_eq!(rects.bottom.x, 50.0);
    assert_eq!(layout.side_width(), 300.0);
}

#[test]
fn test_hidden_chrome_gives_space_to_main() {
    let fixture = seeded(1200.0, 800.0);
    fixture.state.show(Region::Top, false);
    fixture.state.show(Region::Status, false);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    let p = layout.partition();
    assert_eq!(p.column_height, 800.0);
    assert_eq!(p.main.height, 600.0);
    assert_eq!(fixture.top.visible(), Some(false));
}

#[test]
fn test_end_anchor_mirrors_side() {
    let fixture = seeded(1200.0, 800.0);
    fixture.state.set_anchor(Anchor::End);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    let rects = layout.rects();
    assert_eq!(rects.rail.x, 1150.0);
    assert_eq!(rects.side.x, 850.0);
    assert_eq!(rects.main.x, 0.0);
    assert_eq!(layout.vertical_sash_left(), 850.0);
    assert_eq!(layout.horizontal_sash_left(), 0.0);
}

#[test]
fn test_sash_geometry_queries() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(layout.vertical_sash_top(), 30.0);
    assert_eq!(layout.vertical_sash_left(), 350.0);
    assert_eq!(layout.vertical_sash_height(), 748.0);
    assert_eq!(layout.horizontal_sash_top(), 580.0);
    assert_eq!(layout.horizontal_sash_left(), 350.0);
    assert_eq!(layout.horizontal_sash_width(), 850.0);
}

#[test]
fn test_toggle_maximized_round_trip() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());
    assert!(!layout.is_panel_maximized());

    layout.toggle_maximized_panel();
    assert!(layout.is_panel_maximized());
    assert_eq!(layout.bottom_height(), 678.0);
    assert_eq!(layout.rects().main.height, 70.0);

    layout.toggle_maximized_panel();
    assert!(!layout.is_panel_maximized());
    assert_eq!(layout.bottom_height(), 200.0);
}

#[test]
fn test_toggle_with_oversized_stored_height_restores_default() {
    let fixture = WorkbenchFixture::new(1200.0, 800.0);
    fixture
        .storage
        .seed(BOTTOM_HEIGHT_KEY, StorageScope::Global, 900.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    // Saved in a taller window: the first pass clamps to the maximum.
    assert_eq!(layout.bottom_height(), 678.0);
    assert!(layout.is_panel_maximized());

    layout.toggle_maximized_panel();
    assert!(!layout.is_panel_maximized());
    assert_eq!(layout.bottom_height(), 748.0_f32 * 0.4);

    layout.toggle_maximized_panel();
    assert!(layout.is_panel_maximized());
    assert_eq!(layout.bottom_height(), 678.0);

    layout.toggle_maximized_panel();
    assert_eq!(layout.bottom_height(), 748.0_f32 * 0.4);
}

#[test]
fn test_maximized_panel_follows_container_resize() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());
    layout.toggle_maximized_panel();

    fixture.container.resize(1200.0, 1000.0);
    layout.pump(&fixture.events);

    assert!(layout.is_panel_maximized());
    assert_eq!(layout.bottom_height(), 878.0);
}

#[test]
fn test_toggle_ignored_while_bottom_hidden() {
    let fixture = seeded(1200.0, 800.0);
    fixture.state.show(Region::Bottom, false);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    layout.toggle_maximized_panel();
    assert!(!layout.is_panel_maximized());
    assert_eq!(layout.bottom_height(), 200.0);
}

#[test]
fn test_side_by_side_editors_shrink_side() {
    let fixture = seeded(800.0, 800.0);
    fixture
        .storage
        .seed(SIDE_WIDTH_KEY, StorageScope::Global, 600.0);
    fixture.state.set_open_editors(2);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(layout.rects().main.width, 440.0);
    assert_eq!(layout.side_width(), 310.0);
    assert_eq!(fixture.storage.last_write(SIDE_WIDTH_KEY), Some(310.0));
}

#[test]
fn test_stacked_editors_shrink_bottom() {
    let fixture = seeded(1200.0, 800.0);
    fixture
        .storage
        .seed(BOTTOM_HEIGHT_KEY, StorageScope::Global, 600.0);
    fixture.state.set_orientation(GroupOrientation::Stacked);
    fixture.state.set_open_editors(4);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    // 748 column height, four stacked editors need 280.
    assert_eq!(layout.rects().main.height, 280.0);
    assert_eq!(layout.bottom_height(), 468.0);
}

#[test]
fn test_zoom_corrects_top_height() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    fixture.container.set_zoom(1.5);
    fixture.container.resize(1200.0, 800.0);
    layout.pump(&fixture.events);

    let rects = layout.rects();
    assert_eq!(rects.top.height, 20.0);
    assert_eq!(rects.main.height, 558.0);
}

#[test]
fn test_scroll_offset_is_reset() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();

    fixture.container.set_scroll_offset(Vec2::new(0.0, 12.0));
    layout.layout(LayoutOptions::default());
    assert_eq!(fixture.container.scroll_resets(), 1);

    layout.layout(LayoutOptions::default());
    assert_eq!(fixture.container.scroll_resets(), 1);
}

#[test]
fn test_overlays_get_container_size() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(fixture.overlay.sizes(), vec![Size::new(1200.0, 800.0)]);
}

#[test]
fn test_forced_recompute_refreshes_region_styles() {
    let fixture = seeded(1200.0, 800.0);
    let mut layout = fixture.build().unwrap();
    layout.layout(LayoutOptions::default());
    assert_eq!(fixture.side.count_compute_style(), 0);

    layout.layout(LayoutOptions::forced());
    assert_eq!(fixture.side.count_compute_style(), 1);
    assert_eq!(fixture.bottom.count_compute_style(), 1);
    assert_eq!(fixture.main.count_compute_style(), 1);
    assert_eq!(fixture.top.count_compute_style(), 0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let fixture = WorkbenchFixture::new(1200.0, 800.0);
    let result = fixture.build_with(LayoutConfig::default().with_default_fractions(1.5, 0.4));

    assert!(matches!(
        result,
        Err(LayoutError::Config(ConfigError::FractionOutOfRange {
            name: "default_side_fraction",
            ..
        }))
    ));
    assert_eq!(fixture.events.subscription_count(), 0);
}

#[test]
fn test_custom_storage_keys_and_scope() {
    let fixture = WorkbenchFixture::new(1200.0, 800.0);
    fixture.storage.seed("side", StorageScope::Workspace, 260.0);
    let config = LayoutConfig::default()
        .with_storage_keys("side", "bottom")
        .with_storage_scope(StorageScope::Workspace);
    let mut layout = fixture.build_with(config).unwrap();
    layout.layout(LayoutOptions::default());

    assert_eq!(layout.side_width(), 260.0);
    assert_eq!(fixture.storage.get("side", StorageScope::Workspace), Some(260.0));
    assert_eq!(fixture.storage.get(SIDE_WIDTH_KEY, StorageScope::Global), None);
}
