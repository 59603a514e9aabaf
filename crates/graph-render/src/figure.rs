// File: crates/graph-render/src/figure.rs
// Summary: Figure construction and headless rendering pipeline using Skia CPU raster surfaces.
// Notes:
// - A Figure owns its finished RGBA pixels. The Skia surface lives only for
//   the duration of `build_graph`, so nothing accumulates across calls.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use graph_spec::{GraphCollection, GraphSpec};
use image::ImageEncoder;
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::RectF;
use crate::grid::{nice_ticks, Ticks};
use crate::legend::{is_legend_label, FontConfig, Legend, LegendEntry};
use crate::marker::SeriesPaint;
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::ticks::{PlainTickFormatter, TickFormatter};
use crate::types::{points_to_px, Insets, DEFAULT_DPI, HEIGHT, MAX_EDGE, WIDTH};
use crate::view::{DataBounds, MARGIN};

/// Font size of tick labels and axis captions, in points.
const LABEL_FONT_PT: f64 = 10.0;
/// Tick mark length, in points.
const TICK_LEN_PT: f64 = 3.5;

#[derive(Clone)]
pub struct RenderOptions {
    /// Used when the graph does not carry `dimensions`.
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_grid: bool,
    /// Disable all text for pixel-stable output.
    pub draw_labels: bool,
    /// Upper bound on ticks per axis.
    pub max_ticks: usize,
    pub tick_formatter: Arc<dyn TickFormatter + Send + Sync>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DEFAULT_DPI,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_grid: true,
            draw_labels: true,
            max_ticks: 8,
            tick_formatter: Arc::new(PlainTickFormatter),
        }
    }
}

/// One rendered graph.
pub struct Figure {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    plot_area: RectF,
    x_axis: Axis,
    y_axis: Axis,
    legend_font: FontConfig,
    legend_area: Option<RectF>,
    series_count: usize,
}

impl Figure {
    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn stride(&self) -> usize { self.width as usize * 4 }

    /// Unpremultiplied RGBA8, row-major, `stride()` bytes per row.
    pub fn pixels(&self) -> &[u8] { &self.pixels }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    /// Copy of the pixel buffer with its dimensions: (pixels, width, height, stride).
    pub fn to_rgba8(&self) -> (Vec<u8>, u32, u32, usize) {
        (self.pixels.clone(), self.width, self.height, self.stride())
    }

    pub fn plot_area(&self) -> RectF { self.plot_area }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn series_count(&self) -> usize { self.series_count }

    /// Font configuration computed from `caption_font_size` and applied to the legend.
    pub fn legend_font(&self) -> &FontConfig { &self.legend_font }

    /// Legend box, `None` when no series has a visible label.
    pub fn legend_area(&self) -> Option<RectF> { self.legend_area }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(&self.pixels, self.width, self.height, image::ExtendedColorType::Rgba8)
            .context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Write the figure as PNG, creating parent directories as needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_png_bytes()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved figure");
        Ok(())
    }
}

/// Render every graph of a collection, keeping its single/many shape.
pub fn build_graphs(graphs: &GraphCollection, opts: &RenderOptions) -> Result<GraphCollection<Figure>> {
    graphs.try_map(|g| build_graph(g, opts))
}

/// Render one graph: a single axes panel with every series overlaid and a
/// legend sized by the graph's caption font size.
pub fn build_graph(graph: &GraphSpec, opts: &RenderOptions) -> Result<Figure> {
    let (width, height) = figure_size(graph, opts)?;

    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;

    let plot = RectF::from_ltrb(
        opts.insets.left as f32,
        opts.insets.top as f32,
        (width - opts.insets.right as i32) as f32,
        (height - opts.insets.bottom as i32) as f32,
    );

    let bounds = DataBounds::from_graph(graph).with_margins(MARGIN);
    let x_axis = Axis::new(graph.xlabel.clone().unwrap_or_default(), bounds.x_min, bounds.x_max);
    let y_axis = Axis::new(graph.ylabel.clone().unwrap_or_default(), bounds.y_min, bounds.y_max);
    let sx = LinearScale::new(plot.left, plot.right, x_axis.min, x_axis.max);
    let sy = LinearScale::new(plot.bottom, plot.top, y_axis.min, y_axis.max);
    let x_ticks = nice_ticks(x_axis.min, x_axis.max, opts.max_ticks);
    let y_ticks = nice_ticks(y_axis.min, y_axis.max, opts.max_ticks);

    let shaper = TextShaper::new();
    let legend_font = FontConfig::new(graph.caption_font_size, opts.dpi);

    let mut next_cycle = 0usize;
    let paints: Vec<SeriesPaint> = graph
        .series
        .iter()
        .map(|s| SeriesPaint::resolve(&s.style, &mut next_cycle, opts.dpi))
        .collect();

    let legend = Legend {
        entries: graph
            .series
            .iter()
            .zip(&paints)
            .filter(|(s, _)| is_legend_label(&s.label))
            .map(|(s, p)| LegendEntry { label: s.label.clone(), paint: *p })
            .collect(),
        font: legend_font,
    };
    let legend_area = legend.layout(&shaper, plot, opts.draw_labels);

    {
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);
        let mut face = skia::Paint::default();
        face.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &face);

        if opts.draw_grid {
            draw_grid(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for (series, paint) in graph.series.iter().zip(&paints) {
            tracing::trace!(label = %series.label, points = series.points.len(), style = %series.style, "plot series");
            draw_series(canvas, &series.points, paint, &sx, &sy);
        }
        canvas.restore();

        draw_axes(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, &x_axis, &y_axis, &shaper, opts);

        if let Some(area) = legend_area {
            legend.draw(canvas, &shaper, area, theme, opts.draw_labels);
        }
    }

    let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        bail!("failed to read back {width}x{height} figure pixels");
    }

    tracing::debug!(width, height, series = graph.series.len(), legend = legend_area.is_some(), "rendered figure");

    Ok(Figure {
        width: width as u32,
        height: height as u32,
        pixels,
        plot_area: plot,
        x_axis,
        y_axis,
        legend_font,
        legend_area,
        series_count: graph.series.len(),
    })
}

/// Pixel size: `dimensions` (inches) times dpi when given, else the option size.
fn figure_size(graph: &GraphSpec, opts: &RenderOptions) -> Result<(i32, i32)> {
    let (w, h) = match graph.dimensions {
        Some((wi, hi)) => (
            (wi * opts.dpi as f64).round() as i64,
            (hi * opts.dpi as f64).round() as i64,
        ),
        None => (opts.width as i64, opts.height as i64),
    };
    let min_w = opts.insets.hsum() as i64 + 16;
    let min_h = opts.insets.vsum() as i64 + 16;
    if w < min_w || h < min_h {
        bail!("figure of {w}x{h} px leaves no room for the plot (minimum {min_w}x{min_h})");
    }
    if w > MAX_EDGE as i64 || h > MAX_EDGE as i64 {
        bail!("figure of {w}x{h} px exceeds the {MAX_EDGE} px limit");
    }
    Ok((w as i32, h as i32))
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for &x in &x_ticks.values {
        let px = sx.to_px(x);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    // horizontals
    for &y in &y_ticks.values {
        let py = sy.to_px(y);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_series(canvas: &skia::Canvas, points: &[(f64, f64)], paint: &SeriesPaint, sx: &LinearScale, sy: &LinearScale) {
    if let Some(stroke) = paint.stroke() {
        // non-finite points split the line into separate runs
        let mut path = skia::Path::new();
        let mut pen_down = false;
        for &(x, y) in points {
            if !x.is_finite() || !y.is_finite() {
                pen_down = false;
                continue;
            }
            let p = (sx.to_px(x), sy.to_px(y));
            if pen_down { path.line_to(p); } else { path.move_to(p); }
            pen_down = true;
        }
        canvas.draw_path(&path, &stroke);
    }

    if paint.marker.is_some() {
        for &(x, y) in points.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            paint.draw_marker(canvas, sx.to_px(x), sy.to_px(y));
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    x: &Axis,
    y: &Axis,
    shaper: &TextShaper,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);

    // Frame around the plot area
    canvas.draw_rect(plot.to_skia(), &axis_paint);

    let tick_len = points_to_px(TICK_LEN_PT, opts.dpi);
    let font_px = points_to_px(LABEL_FONT_PT, opts.dpi);
    let fmt = &opts.tick_formatter;

    for &v in &x_ticks.values {
        let px = sx.to_px(v);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + tick_len), &axis_paint);
        if opts.draw_labels {
            let label = fmt.format(v, x_ticks.step);
            shaper.draw_centered(canvas, &label, px, plot.bottom + tick_len + font_px * 1.1, font_px, theme.tick, true);
        }
    }
    for &v in &y_ticks.values {
        let py = sy.to_px(v);
        canvas.draw_line((plot.left - tick_len, py), (plot.left, py), &axis_paint);
        if opts.draw_labels {
            let label = fmt.format(v, y_ticks.step);
            shaper.draw_right(canvas, &label, plot.left - tick_len - 3.0, py + font_px * 0.35, font_px, theme.tick, true);
        }
    }

    if !opts.draw_labels {
        return;
    }

    // Axis captions
    if !x.label.is_empty() {
        let cx = (plot.left + plot.right) * 0.5;
        let baseline = plot.bottom + tick_len + font_px * 2.6;
        shaper.draw_centered(canvas, &x.label, cx, baseline, font_px, theme.axis_label, false);
    }
    if !y.label.is_empty() {
        let cy = (plot.top + plot.bottom) * 0.5;
        let cx = (plot.left - font_px * 3.6).max(font_px);
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
        shaper.draw_centered(canvas, &y.label, cx, cy, font_px, theme.axis_label, false);
        canvas.restore();
    }
}
