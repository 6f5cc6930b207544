// File: crates/field-core/src/chart.rs
// Summary: FieldChart scene and headless PNG/RGBA rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use ndarray::Array2;
use skia_safe as skia;
use tracing::debug;

use crate::axis::{format_tick, Axis};
use crate::contour::{contour_lines, ContourLine};
use crate::render::{ContourHandle, MarkerStyle, RenderAdapter};
use crate::scale::{Insets, PlotRect, PlotTransform};
use crate::streamline::{trace_streamlines, Streamline, StreamlineConfig};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::view::ViewState;

/// Default surface size in pixels (square, the plot uses equal aspect).
pub const DEFAULT_SIZE: i32 = 900;
/// Marker radius in pixels.
const MARKER_RADIUS: f32 = 8.0;
/// Contours shorter than this many pixels get no inline label.
const MIN_LABELED_PX: f64 = 60.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, ticks, axis and contour labels). Off for pixel-stable tests.
    pub draw_labels: bool,
    pub title: String,
    pub streamlines: StreamlineConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            title: "Electrostatic field and equipotentials".to_string(),
            streamlines: StreamlineConfig::default(),
        }
    }
}

#[derive(Clone, Debug)]
struct ContourLayer {
    lines: Vec<ContourLine>,
    v_min: f64,
    v_max: f64,
    label_decimals: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
struct Marker {
    x: f64,
    y: f64,
    style: MarkerStyle,
}

/// Last rasterised frame, RGBA8 unpremultiplied.
#[derive(Clone, Debug)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: i32,
    pub height: i32,
    pub row_bytes: usize,
}

/// Skia-backed plot: holds the drawn scene and rasterises it on `redraw`.
pub struct FieldChart {
    pub options: RenderOptions,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub equal_aspect: bool,
    streamlines: Vec<Streamline>,
    contours: Vec<ContourLayer>,
    markers: Vec<Marker>,
    frame: Option<Frame>,
    text: TextShaper,
}

impl Default for FieldChart {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl FieldChart {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            equal_aspect: false,
            streamlines: Vec::new(),
            contours: Vec::new(),
            markers: Vec::new(),
            frame: None,
            text: TextShaper::new(),
        }
    }

    pub fn streamlines(&self) -> &[Streamline] {
        &self.streamlines
    }

    pub fn contour_lines(&self, handle: ContourHandle) -> Option<&[ContourLine]> {
        self.contours.get(handle.0).map(|l| l.lines.as_slice())
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn view(&self) -> ViewState {
        ViewState { x_min: self.x_axis.min, x_max: self.x_axis.max, y_min: self.y_axis.min, y_max: self.y_axis.max }
    }

    /// Frame produced by the last `redraw`, if any.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Change the output size; takes effect on the next rasterisation.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.options.width = width.max(1);
        self.options.height = height.max(1);
    }

    pub fn transform(&self) -> PlotTransform {
        let avail = PlotRect::from_insets(self.options.width, self.options.height, &self.options.insets);
        PlotTransform::new(self.view(), avail, self.equal_aspect)
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.rasterize()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to an RGBA8 buffer: (pixels, width, height, row_bytes).
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.rasterize()?;
        let (w, h) = (self.options.width, self.options.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn rasterize(&self) -> Result<skia::Surface> {
        let opts = &self.options;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let tf = self.transform();
        let r = tf.rect;
        let plot_rect = skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom);

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot_rect, &bg);

        draw_grid(canvas, &tf, &self.x_axis, &self.y_axis, theme);

        canvas.save();
        canvas.clip_rect(plot_rect, None, Some(true));
        self.draw_streamline_layer(canvas, &tf);
        self.draw_contour_layers(canvas, &tf);
        self.draw_markers(canvas, &tf);
        canvas.restore();

        draw_axes(canvas, &tf, theme);
        if opts.draw_labels {
            self.draw_labels(canvas, &tf);
        }
        Ok(surface)
    }

    fn draw_streamline_layer(&self, canvas: &skia::Canvas, tf: &PlotTransform) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(self.options.theme.streamline);

        let mut head = skia::Paint::default();
        head.set_anti_alias(true);
        head.set_style(skia::paint::Style::Fill);
        head.set_color(self.options.theme.streamline);

        for line in &self.streamlines {
            if let Some(path) = polyline_path(&line.points, tf, false) {
                canvas.draw_path(&path, &stroke);
            }
            if let Some(((ax, ay), (dx, dy))) = line.arrow() {
                let (px, py) = tf.to_px(ax, ay);
                // screen y points down
                let (ux, uy) = (dx as f32, -dy as f32);
                let size = 6.0f32;
                let mut tri = skia::Path::new();
                tri.move_to((px + ux * size, py + uy * size));
                tri.line_to((px - ux * size * 0.6 - uy * size * 0.5, py - uy * size * 0.6 + ux * size * 0.5));
                tri.line_to((px - ux * size * 0.6 + uy * size * 0.5, py - uy * size * 0.6 - ux * size * 0.5));
                tri.close();
                canvas.draw_path(&tri, &head);
            }
        }
    }

    fn draw_contour_layers(&self, canvas: &skia::Canvas, tf: &PlotTransform) {
        let theme = &self.options.theme;
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.5);

        for layer in &self.contours {
            let span = layer.v_max - layer.v_min;
            for line in &layer.lines {
                let t = if span > 0.0 { (line.level - layer.v_min) / span } else { 0.5 };
                stroke.set_color(theme.contour_color(t));
                if let Some(path) = polyline_path(&line.points, tf, line.closed) {
                    canvas.draw_path(&path, &stroke);
                }
            }
            if !self.options.draw_labels {
                continue;
            }
            let Some(decimals) = layer.label_decimals else { continue };
            for line in &layer.lines {
                if line.length() * tf.pixels_per_unit() < MIN_LABELED_PX {
                    continue;
                }
                let Some((lx, ly)) = line.label_anchor() else { continue };
                if !tf.view.contains(lx, ly) {
                    continue;
                }
                let t = if span > 0.0 { (line.level - layer.v_min) / span } else { 0.5 };
                let (px, py) = tf.to_px(lx, ly);
                let label = format!("{:.*}", decimals, line.level);
                self.text.draw_centered(canvas, &label, px, py, 11.0, theme.contour_color(t), true, Some(theme.plot_background));
            }
        }
    }

    fn draw_markers(&self, canvas: &skia::Canvas, tf: &PlotTransform) {
        let theme = &self.options.theme;
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        for m in &self.markers {
            fill.set_color(match m.style {
                MarkerStyle::Positive => theme.positive_charge,
                MarkerStyle::Negative => theme.negative_charge,
            });
            let (px, py) = tf.to_px(m.x, m.y);
            canvas.draw_circle((px, py), MARKER_RADIUS, &fill);
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, tf: &PlotTransform) {
        let theme = &self.options.theme;
        let r = tf.rect;
        for (x, step) in with_step(self.x_axis.ticks(8)) {
            let (px, _) = tf.to_px(x, tf.view.y_min);
            let s = format_tick(x, step);
            let (w, _) = self.text.measure(&s, 12.0, true);
            self.text.draw_left(canvas, &s, px - w * 0.5, r.bottom + 20.0, 12.0, theme.tick, true);
        }
        for (y, step) in with_step(self.y_axis.ticks(8)) {
            let (_, py) = tf.to_px(tf.view.x_min, y);
            let s = format_tick(y, step);
            let (w, _) = self.text.measure(&s, 12.0, true);
            self.text.draw_left(canvas, &s, r.left - w - 8.0, py + 5.0, 12.0, theme.tick, true);
        }
        let mid_x = (r.left + r.right) * 0.5;
        self.text.draw_left(canvas, &self.x_axis.label, mid_x, r.bottom + 42.0, 14.0, theme.axis_label, false);
        self.text.draw_left(canvas, &self.y_axis.label, (r.left - 52.0).max(4.0), (r.top + r.bottom) * 0.5, 14.0, theme.axis_label, false);
        if !self.options.title.is_empty() {
            let (w, _) = self.text.measure(&self.options.title, 16.0, false);
            self.text.draw_left(canvas, &self.options.title, mid_x - w * 0.5, r.top - 14.0, 16.0, theme.axis_label, false);
        }
    }
}

impl RenderAdapter for FieldChart {
    fn clear(&mut self) {
        self.streamlines.clear();
        self.contours.clear();
        self.markers.clear();
        self.equal_aspect = false;
    }

    fn draw_streamlines(&mut self, x: &Array2<f64>, y: &Array2<f64>, ex: &Array2<f64>, ey: &Array2<f64>) {
        let lines = trace_streamlines(x, y, ex, ey, &self.options.streamlines);
        self.streamlines.extend(lines);
    }

    fn draw_contours(&mut self, x: &Array2<f64>, y: &Array2<f64>, v: &Array2<f64>, levels: &[f64]) -> ContourHandle {
        let lines = contour_lines(x, y, v, levels);
        let v_min = levels.iter().copied().fold(f64::INFINITY, f64::min);
        let v_max = levels.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        debug!(levels = levels.len(), lines = lines.len(), "extracted contours");
        self.contours.push(ContourLayer { lines, v_min, v_max, label_decimals: None });
        ContourHandle(self.contours.len() - 1)
    }

    fn label_contours(&mut self, handle: ContourHandle, decimals: usize) {
        if let Some(layer) = self.contours.get_mut(handle.0) {
            layer.label_decimals = Some(decimals);
        }
    }

    fn draw_marker(&mut self, x: f64, y: f64, style: MarkerStyle) {
        self.markers.push(Marker { x, y, style });
    }

    fn set_axis_bounds(&mut self, view: ViewState) {
        self.x_axis.min = view.x_min;
        self.x_axis.max = view.x_max;
        self.y_axis.min = view.y_min;
        self.y_axis.max = view.y_max;
    }

    fn set_equal_aspect(&mut self) {
        self.equal_aspect = true;
    }

    fn redraw(&mut self) -> Result<()> {
        let (pixels, width, height, row_bytes) = self.render_to_rgba8()?;
        self.frame = Some(Frame { pixels, width, height, row_bytes });
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn polyline_path(points: &[(f64, f64)], tf: &PlotTransform, closed: bool) -> Option<skia::Path> {
    if points.len() < 2 {
        return None;
    }
    let mut path = skia::Path::new();
    let (x0, y0) = tf.to_px(points[0].0, points[0].1);
    path.move_to((x0, y0));
    for &(x, y) in &points[1..] {
        path.line_to(tf.to_px(x, y));
    }
    if closed {
        path.close();
    }
    Some(path)
}

/// Pair each tick with the tick step (for label precision).
fn with_step(ticks: Vec<f64>) -> impl Iterator<Item = (f64, f64)> {
    let step = if ticks.len() >= 2 { ticks[1] - ticks[0] } else { 1.0 };
    ticks.into_iter().map(move |t| (t, step))
}

fn draw_grid(canvas: &skia::Canvas, tf: &PlotTransform, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    let r = tf.rect;

    // verticals
    for gx in x.ticks(8) {
        let (px, _) = tf.to_px(gx, tf.view.y_min);
        canvas.draw_line((px, r.top), (px, r.bottom), &paint);
    }
    // horizontals
    for gy in y.ticks(8) {
        let (_, py) = tf.to_px(tf.view.x_min, gy);
        canvas.draw_line((r.left, py), (r.right, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, tf: &PlotTransform, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.5);
    let r = tf.rect;
    canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), &axis_paint);
}
