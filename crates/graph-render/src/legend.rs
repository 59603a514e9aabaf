// File: crates/graph-render/src/legend.rs
// Summary: Legend font configuration (from caption_font_size) and legend box layout/drawing.

use graph_spec::FontSize;
use skia_safe as skia;

use crate::geometry::RectF;
use crate::marker::SeriesPaint;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::points_to_px;

/// Resolved font settings for legend entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontConfig {
    pub size: FontSize,
    pub points: f64,
    pub pixels: f32,
}

impl FontConfig {
    pub fn new(size: FontSize, dpi: f32) -> Self {
        let points = size.points();
        Self { size, points, pixels: points_to_px(points, dpi) }
    }
}

/// Labels that are empty or start with `_` are kept out of the legend.
pub fn is_legend_label(label: &str) -> bool {
    !label.is_empty() && !label.starts_with('_')
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub label: String,
    pub paint: SeriesPaint,
}

pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub font: FontConfig,
}

impl Legend {
    fn pad(&self) -> f32 { self.font.pixels * 0.4 }
    fn handle_len(&self) -> f32 { self.font.pixels * 2.0 }
    fn gap(&self) -> f32 { self.font.pixels * 0.8 }
    fn row_height(&self) -> f32 { self.font.pixels * 1.4 }

    /// Box in the upper-right corner of `plot`, on whole pixels. `None` when
    /// there is nothing to show. Text is measured only when `measure_text`.
    pub fn layout(&self, shaper: &TextShaper, plot: RectF, measure_text: bool) -> Option<RectF> {
        if self.entries.is_empty() {
            return None;
        }
        let text_w = if measure_text {
            self.entries
                .iter()
                .map(|e| shaper.measure_width(&e.label, self.font.pixels, false))
                .fold(0.0f32, f32::max)
        } else {
            0.0
        };
        let width = self.pad() * 2.0 + self.handle_len() + self.gap() + text_w;
        let height = self.pad() * 2.0 + self.row_height() * self.entries.len() as f32;
        let inset = (self.font.pixels * 0.5).round();
        let right = (plot.right - inset).floor();
        let top = (plot.top + inset).ceil();
        Some(RectF::from_ltrb((right - width).floor(), top, right, (top + height).ceil()))
    }

    pub fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper, area: RectF, theme: &Theme, draw_labels: bool) {
        let mut face = skia::Paint::default();
        face.set_style(skia::paint::Style::Fill);
        face.set_color(theme.legend_background);
        canvas.draw_rect(area.to_skia(), &face);

        let mut border = skia::Paint::default();
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        // half-pixel offset keeps the 1px frame crisp
        canvas.draw_rect(
            skia::Rect::from_ltrb(area.left + 0.5, area.top + 0.5, area.right - 0.5, area.bottom - 0.5),
            &border,
        );

        let x0 = area.left + self.pad();
        for (i, entry) in self.entries.iter().enumerate() {
            let row_top = area.top + self.pad() + self.row_height() * i as f32;
            let mid = row_top + self.row_height() * 0.5;
            let x1 = x0 + self.handle_len();

            if let Some(stroke) = entry.paint.stroke() {
                canvas.draw_line((x0, mid), (x1, mid), &stroke);
            }
            entry.paint.draw_marker(canvas, (x0 + x1) * 0.5, mid);

            if draw_labels {
                let baseline = mid + self.font.pixels * 0.35;
                shaper.draw_left(canvas, &entry.label, x1 + self.gap(), baseline, self.font.pixels, theme.legend_text, false);
            }
        }
    }
}
