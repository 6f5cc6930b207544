// File: crates/field-core/src/text.rs
// Summary: Text shaper for axis, tick and inline contour labels using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // platform fonts only, no bundled assets
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if numeric {
            // tabular digits keep tick labels aligned
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of the laid-out text.
    pub fn measure(&self, text: &str, size: f32, numeric: bool) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, numeric);
        (p.longest_line(), p.height())
    }

    /// Draw with the baseline-ish anchor at `(x, y)`, text extending to the right.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, numeric: bool) {
        let p = self.layout(text, size, color, numeric);
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw centred on `(x, y)`. With `halo`, a filled box in that color is painted
    /// first so the text sits in a gap of whatever is underneath.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        numeric: bool,
        halo: Option<skia::Color>,
    ) {
        let p = self.layout(text, size, color, numeric);
        let w = p.longest_line();
        let h = p.height();
        let left = x - w * 0.5;
        let top = y - h * 0.5;
        if let Some(bg) = halo {
            let mut paint = skia::Paint::default();
            paint.set_color(bg);
            paint.set_anti_alias(true);
            let r = skia::Rect::from_ltrb(left - 2.0, top, left + w + 2.0, top + h);
            canvas.draw_round_rect(r, 2.0, 2.0, &paint);
        }
        p.paint(canvas, (left, top));
    }
}
