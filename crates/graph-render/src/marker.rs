// File: crates/graph-render/src/marker.rs
// Summary: Resolves a series format string into Skia paints, dash patterns and marker shapes.

use graph_spec::{Color, LineFormat, LineStyle, Marker};
use skia_safe as skia;

use crate::types::points_to_px;

/// Line width in points.
pub const LINE_WIDTH_PT: f64 = 1.5;
/// Marker diameter in points.
pub const MARKER_SIZE_PT: f64 = 6.0;

pub fn to_skia(color: Color) -> skia::Color {
    let (r, g, b) = color.rgb();
    skia::Color::from_argb(255, r, g, b)
}

/// Everything needed to draw one series (or its legend handle).
#[derive(Clone, Copy, Debug)]
pub struct SeriesPaint {
    pub color: skia::Color,
    pub line: Option<LineStyle>,
    pub marker: Option<Marker>,
    pub line_width: f32,
    pub marker_size: f32,
}

impl SeriesPaint {
    /// Series without an explicit color take the next cycle color; the
    /// counter only advances for them.
    pub fn resolve(format: &LineFormat, next_cycle: &mut usize, dpi: f32) -> Self {
        let color = match format.color {
            Some(c) => c,
            None => {
                let c = Color::cycle(*next_cycle);
                *next_cycle += 1;
                c
            }
        };
        Self {
            color: to_skia(color),
            line: format.effective_line(),
            marker: format.marker,
            line_width: points_to_px(LINE_WIDTH_PT, dpi),
            marker_size: points_to_px(MARKER_SIZE_PT, dpi),
        }
    }

    /// Stroke paint for the connecting line, `None` for marker-only series.
    pub fn stroke(&self) -> Option<skia::Paint> {
        let style = self.line?;
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.line_width);
        paint.set_stroke_join(skia::paint::Join::Round);
        paint.set_color(self.color);
        if let Some(intervals) = dash_intervals(style, self.line_width) {
            paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
        }
        Some(paint)
    }

    pub fn draw_marker(&self, canvas: &skia::Canvas, x: f32, y: f32) {
        let Some(marker) = self.marker else { return };

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(self.color);

        let mut stroke = fill.clone();
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width((self.line_width * 0.75).max(1.0));

        let r = self.marker_size * 0.5;
        match marker {
            Marker::Point => { canvas.draw_circle((x, y), r * 0.5, &fill); }
            Marker::Pixel => { canvas.draw_rect(skia::Rect::from_xywh(x.floor(), y.floor(), 1.0, 1.0), &fill); }
            Marker::Circle => { canvas.draw_circle((x, y), r, &fill); }
            Marker::TriangleUp => { canvas.draw_path(&regular_polygon(x, y, r, 3, -90.0), &fill); }
            Marker::TriangleDown => { canvas.draw_path(&regular_polygon(x, y, r, 3, 90.0), &fill); }
            Marker::TriangleLeft => { canvas.draw_path(&regular_polygon(x, y, r, 3, 180.0), &fill); }
            Marker::TriangleRight => { canvas.draw_path(&regular_polygon(x, y, r, 3, 0.0), &fill); }
            Marker::Square => { canvas.draw_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), &fill); }
            Marker::Pentagon => { canvas.draw_path(&regular_polygon(x, y, r, 5, -90.0), &fill); }
            Marker::Hexagon => { canvas.draw_path(&regular_polygon(x, y, r, 6, -90.0), &fill); }
            Marker::Star => { canvas.draw_path(&star(x, y, r * 1.2, r * 0.5), &fill); }
            Marker::Diamond => { canvas.draw_path(&diamond(x, y, r, r), &fill); }
            Marker::ThinDiamond => { canvas.draw_path(&diamond(x, y, r * 0.6, r), &fill); }
            Marker::Plus => {
                canvas.draw_line((x - r, y), (x + r, y), &stroke);
                canvas.draw_line((x, y - r), (x, y + r), &stroke);
            }
            Marker::X => {
                let d = r * std::f32::consts::FRAC_1_SQRT_2;
                canvas.draw_line((x - d, y - d), (x + d, y + d), &stroke);
                canvas.draw_line((x - d, y + d), (x + d, y - d), &stroke);
            }
            Marker::VLine => { canvas.draw_line((x, y - r), (x, y + r), &stroke); }
            Marker::HLine => { canvas.draw_line((x - r, y), (x + r, y), &stroke); }
        }
    }
}

/// On/off dash lengths in pixels, scaled by the line width.
pub fn dash_intervals(style: LineStyle, line_width: f32) -> Option<Vec<f32>> {
    let pattern: &[f32] = match style {
        LineStyle::Solid => return None,
        LineStyle::Dashed => &[3.7, 1.6],
        LineStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        LineStyle::Dotted => &[1.0, 1.65],
    };
    Some(pattern.iter().map(|v| v * line_width).collect())
}

fn regular_polygon(cx: f32, cy: f32, r: f32, n: usize, rotation_deg: f32) -> skia::Path {
    let mut path = skia::Path::new();
    for i in 0..n {
        let a = (rotation_deg + 360.0 * i as f32 / n as f32).to_radians();
        let p = (cx + r * a.cos(), cy + r * a.sin());
        if i == 0 { path.move_to(p); } else { path.line_to(p); }
    }
    path.close();
    path
}

fn star(cx: f32, cy: f32, outer: f32, inner: f32) -> skia::Path {
    let mut path = skia::Path::new();
    for i in 0..10 {
        let r = if i % 2 == 0 { outer } else { inner };
        let a = (-90.0 + 36.0 * i as f32).to_radians();
        let p = (cx + r * a.cos(), cy + r * a.sin());
        if i == 0 { path.move_to(p); } else { path.line_to(p); }
    }
    path.close();
    path
}

fn diamond(cx: f32, cy: f32, half_w: f32, half_h: f32) -> skia::Path {
    let mut path = skia::Path::new();
    path.move_to((cx, cy - half_h));
    path.line_to((cx + half_w, cy));
    path.line_to((cx, cy + half_h));
    path.line_to((cx - half_w, cy));
    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_advances_only_for_implicit_colors() {
        let mut next = 0;
        let a = SeriesPaint::resolve(&LineFormat::parse("-").unwrap(), &mut next, 100.0);
        let b = SeriesPaint::resolve(&LineFormat::parse("r-").unwrap(), &mut next, 100.0);
        let c = SeriesPaint::resolve(&LineFormat::parse("--").unwrap(), &mut next, 100.0);
        assert_eq!(next, 2);
        assert_eq!(a.color, to_skia(Color::Cycle(0)));
        assert_eq!(b.color, to_skia(Color::Red));
        assert_eq!(c.color, to_skia(Color::Cycle(1)));
    }

    #[test]
    fn marker_only_has_no_stroke() {
        let mut next = 0;
        let p = SeriesPaint::resolve(&LineFormat::parse("k.").unwrap(), &mut next, 100.0);
        assert!(p.stroke().is_none());
        assert_eq!(p.marker, Some(Marker::Point));
    }

    #[test]
    fn dashes_scale_with_width() {
        assert_eq!(dash_intervals(LineStyle::Solid, 2.0), None);
        assert_eq!(dash_intervals(LineStyle::Dashed, 2.0), Some(vec![7.4, 3.2]));
    }
}
