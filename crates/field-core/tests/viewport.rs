// File: crates/field-core/tests/viewport.rs
// Purpose: Center-anchored zoom bounded by the grid square; rejection below the minimum extent.

use approx::assert_relative_eq;
use field_core::{GridSpec, ViewState, ViewportController, ZoomConfig, ZoomDirection};

fn controller() -> ViewportController {
    let grid = GridSpec::try_new(-10.0, 10.0, 200).expect("grid");
    ViewportController::new(&grid, ZoomConfig::default())
}

#[test]
fn starts_at_full_grid() {
    let vp = controller();
    assert_eq!(vp.view(), ViewState { x_min: -10.0, x_max: 10.0, y_min: -10.0, y_max: 10.0 });
    assert_eq!(vp.grid_bounds(), (-10.0, 10.0));
}

#[test]
fn zoom_in_shrinks_about_center() {
    let mut vp = controller();
    let v = vp.on_scroll(ZoomDirection::In).expect("accepted");
    assert_relative_eq!(v.x_min, -8.0, max_relative = 1e-12);
    assert_relative_eq!(v.x_max, 8.0, max_relative = 1e-12);
    assert_relative_eq!(v.y_min, -8.0, max_relative = 1e-12);
    assert_relative_eq!(v.y_max, 8.0, max_relative = 1e-12);
    assert_eq!(vp.view(), v);
}

#[test]
fn zoom_out_at_full_grid_is_clamped() {
    let mut vp = controller();
    let v = vp.on_scroll(ZoomDirection::Out).expect("accepted");
    assert_eq!(v, ViewState { x_min: -10.0, x_max: 10.0, y_min: -10.0, y_max: 10.0 });
}

#[test]
fn zoom_out_converges_to_grid_and_never_exceeds_it() {
    let mut vp = controller();
    for _ in 0..6 {
        vp.on_scroll(ZoomDirection::In).expect("accepted");
    }
    for _ in 0..50 {
        let v = vp.on_scroll(ZoomDirection::Out).expect("accepted");
        assert!(v.x_min >= -10.0 && v.x_max <= 10.0);
        assert!(v.y_min >= -10.0 && v.y_max <= 10.0);
    }
    assert_eq!(vp.view(), ViewState { x_min: -10.0, x_max: 10.0, y_min: -10.0, y_max: 10.0 });
}

#[test]
fn clamped_window_recenters_inside_grid() {
    // non-origin grid square
    let grid = GridSpec::try_new(0.0, 1.0, 10).expect("grid");
    let mut vp = ViewportController::new(&grid, ZoomConfig::default());
    for _ in 0..3 {
        vp.on_scroll(ZoomDirection::In).expect("accepted");
    }
    for _ in 0..40 {
        let v = vp.on_scroll(ZoomDirection::Out).expect("accepted");
        assert!(v.x_min >= 0.0 && v.x_max <= 1.0);
    }
    assert_relative_eq!(vp.view().width(), 1.0, max_relative = 1e-9);
}

#[test]
fn zoom_in_terminates_and_leaves_state_unchanged() {
    let mut vp = controller();
    let mut accepted = 0;
    while vp.on_scroll(ZoomDirection::In).is_some() {
        accepted += 1;
        assert!(accepted < 1000, "zoom-in never terminated");
    }
    let frozen = vp.view();
    assert!(frozen.width() >= 1e-2 && frozen.height() >= 1e-2);
    assert!(frozen.width() * 0.8 < 1e-2);
    for _ in 0..5 {
        assert!(vp.on_scroll(ZoomDirection::In).is_none());
        assert_eq!(vp.view(), frozen);
    }
    // zooming out is still possible afterwards
    assert!(vp.on_scroll(ZoomDirection::Out).is_some());
}

#[test]
fn custom_factors_and_extent() {
    let grid = GridSpec::try_new(-1.0, 1.0, 10).expect("grid");
    let cfg = ZoomConfig { zoom_out_factor: 2.0, zoom_in_factor: 0.5, min_extent: 0.5 };
    let mut vp = ViewportController::new(&grid, cfg);
    assert_relative_eq!(vp.on_scroll(ZoomDirection::In).expect("accepted").width(), 1.0);
    assert_relative_eq!(vp.on_scroll(ZoomDirection::In).expect("accepted").width(), 0.5);
    assert!(vp.on_scroll(ZoomDirection::In).is_none());
    assert_relative_eq!(vp.on_scroll(ZoomDirection::Out).expect("accepted").width(), 1.0);
}

#[test]
fn reset_restores_full_bounds() {
    let mut vp = controller();
    vp.on_scroll(ZoomDirection::In);
    let v = vp.reset();
    assert_eq!(v, ViewState::from_grid(&GridSpec::try_new(-10.0, 10.0, 200).expect("grid")));
}

#[test]
fn wheel_delta_maps_to_direction() {
    assert_eq!(ZoomDirection::from_wheel(1.0), Some(ZoomDirection::Out));
    assert_eq!(ZoomDirection::from_wheel(-0.25), Some(ZoomDirection::In));
    assert_eq!(ZoomDirection::from_wheel(0.0), None);
}
