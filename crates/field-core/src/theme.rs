// File: crates/field-core/src/theme.rs
// Summary: Light/Dark theming for field plot colors; contour colors come from a colormap.

use colorgrad::Gradient;
use skia_safe as skia;

/// Colormap used to color equipotentials by level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContourMap {
    Viridis,
    Plasma,
    Inferno,
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub streamline: skia::Color,
    pub positive_charge: skia::Color,
    pub negative_charge: skia::Color,
    pub contour_map: ContourMap,
    /// Alpha applied to contour lines (0..=255).
    pub contour_alpha: u8,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 225, 225, 230),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            streamline: skia::Color::from_argb(255, 0, 0, 0),
            positive_charge: skia::Color::from_argb(255, 220, 30, 30),
            negative_charge: skia::Color::from_argb(255, 30, 60, 220),
            contour_map: ContourMap::Viridis,
            contour_alpha: 179,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            streamline: skia::Color::from_argb(255, 210, 210, 220),
            positive_charge: skia::Color::from_argb(255, 240, 80, 80),
            negative_charge: skia::Color::from_argb(255, 80, 140, 255),
            contour_map: ContourMap::Plasma,
            contour_alpha: 200,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            plot_background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            streamline: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            positive_charge: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            negative_charge: skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
            contour_map: ContourMap::Inferno,
            contour_alpha: 255,
        }
    }

    /// Contour color for a level at relative position `t` in `[0, 1]`.
    pub fn contour_color(&self, t: f64) -> skia::Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) as f32 } else { 0.0 };
        let rgba = match self.contour_map {
            ContourMap::Viridis => colorgrad::preset::viridis().at(t).to_rgba8(),
            ContourMap::Plasma => colorgrad::preset::plasma().at(t).to_rgba8(),
            ContourMap::Inferno => colorgrad::preset::inferno().at(t).to_rgba8(),
        };
        skia::Color::from_argb(self.contour_alpha, rgba[0], rgba[1], rgba[2])
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
