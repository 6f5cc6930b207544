// File: crates/field-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use field_core::{FieldChart, MarkerStyle, RenderAdapter, RenderOptions, ViewState};

#[test]
fn render_rgba8_buffer() {
    let mut opts = RenderOptions::default();
    opts.width = 300;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    let mut chart = FieldChart::new(opts);
    chart.set_axis_bounds(ViewState { x_min: -1.0, x_max: 1.0, y_min: -1.0, y_max: 1.0 });
    chart.set_equal_aspect();
    chart.draw_marker(0.0, 0.0, MarkerStyle::Positive);

    let (px, w, h, stride) = chart.render_to_rgba8().expect("rgba render");
    assert_eq!((w, h), (300, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);

    // marker sits in the centre of the data area
    let (cx, cy) = chart.transform().to_px(0.0, 0.0);
    let off = cy.round() as usize * stride + cx.round() as usize * 4;
    let theme = &chart.options.theme;
    assert_eq!(px[off], theme.positive_charge.r());
    assert_eq!(px[off + 1], theme.positive_charge.g());
    assert_eq!(px[off + 2], theme.positive_charge.b());
}

#[test]
fn redraw_stores_frame() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let mut chart = FieldChart::new(opts);
    assert!(chart.frame().is_none());
    chart.resize(120, 80);
    chart.redraw().expect("redraw");
    let frame = chart.frame().expect("frame");
    assert_eq!((frame.width, frame.height), (120, 80));
    assert_eq!(frame.pixels.len(), frame.row_bytes * 80);
}

#[test]
fn equal_aspect_squares_the_data_area() {
    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.height = 400;
    let mut chart = FieldChart::new(opts);
    chart.set_axis_bounds(ViewState { x_min: -5.0, x_max: 5.0, y_min: -5.0, y_max: 5.0 });
    chart.set_equal_aspect();
    let rect = chart.transform().rect;
    assert!((rect.width() - rect.height()).abs() < 0.5);
}
