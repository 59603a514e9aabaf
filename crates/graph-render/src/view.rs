// File: crates/graph-render/src/view.rs
// Summary: Data bounds of a graph and the visible ranges derived from them.

use graph_spec::GraphSpec;

use crate::scale::{clamp_finite, half_span, widen_flat};

/// Fraction of the data span added on each side of the visible range.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Union of all finite points of all series. Falls back to the unit
    /// square when the graph has no finite points.
    pub fn from_graph(graph: &GraphSpec) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &graph.series {
            for &(x, y) in &s.points {
                if !x.is_finite() || !y.is_finite() { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        let (x_min, x_max) = widen_flat(x_min, x_max);
        let (y_min, y_max) = widen_flat(y_min, y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    /// Widen both ranges by `frac` of their span on each side, without
    /// leaving the finite f64 range.
    pub fn with_margins(self, frac: f64) -> Self {
        let xm = half_span(self.x_min, self.x_max) * (2.0 * frac);
        let ym = half_span(self.y_min, self.y_max) * (2.0 * frac);
        Self {
            x_min: clamp_finite(self.x_min - xm),
            x_max: clamp_finite(self.x_max + xm),
            y_min: clamp_finite(self.y_min - ym),
            y_max: clamp_finite(self.y_max + ym),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_spec::{FontSize, LineFormat, SeriesSpec};

    fn graph(series: Vec<Vec<(f64, f64)>>) -> GraphSpec {
        GraphSpec {
            series: series
                .into_iter()
                .map(|points| SeriesSpec { label: "s".into(), style: LineFormat::parse("-").unwrap(), points })
                .collect(),
            caption_font_size: FontSize::default(),
            graph_filepath: None,
            dimensions: None,
            xlabel: None,
            ylabel: None,
        }
    }

    #[test]
    fn union_over_series() {
        let b = DataBounds::from_graph(&graph(vec![vec![(0.0, 1.0), (5.0, 3.0)], vec![(2.0, -1.0), (3.0, 6.0)]]));
        assert_eq!(b, DataBounds { x_min: 0.0, x_max: 5.0, y_min: -1.0, y_max: 6.0 });
    }

    #[test]
    fn empty_graph_is_unit_square() {
        let b = DataBounds::from_graph(&graph(vec![]));
        assert_eq!(b, DataBounds { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
    }

    #[test]
    fn single_point_gets_a_span() {
        let b = DataBounds::from_graph(&graph(vec![vec![(2.0, 2.0)]]));
        assert_eq!(b, DataBounds { x_min: 1.5, x_max: 2.5, y_min: 1.5, y_max: 2.5 });
    }

    #[test]
    fn margins_widen_both_sides() {
        let b = DataBounds { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 20.0 }.with_margins(MARGIN);
        assert_eq!(b, DataBounds { x_min: -0.5, x_max: 10.5, y_min: -1.0, y_max: 21.0 });
    }

    #[test]
    fn tiny_spread_keeps_its_own_range() {
        let b = DataBounds::from_graph(&graph(vec![vec![(0.0, 0.0), (1e-10, 1.0)]]));
        assert_eq!((b.x_min, b.x_max), (0.0, 1e-10));
        let m = b.with_margins(MARGIN);
        assert!((m.x_min + 5e-12).abs() < 1e-24 && (m.x_max - 1.05e-10).abs() < 1e-24);
    }

    #[test]
    fn extreme_values_keep_finite_limits() {
        let b = DataBounds::from_graph(&graph(vec![vec![(-1e308, 0.0), (1e308, 1.0)]])).with_margins(MARGIN);
        assert!(b.x_min.is_finite() && b.x_max.is_finite());
        assert!(b.x_min < -1e308 && b.x_max > 1e308);

        let b = DataBounds::from_graph(&graph(vec![vec![(f64::MIN, 0.0), (f64::MAX, 1.0)]])).with_margins(MARGIN);
        assert_eq!((b.x_min, b.x_max), (f64::MIN, f64::MAX));
    }

    #[test]
    fn flat_large_values_widen_with_magnitude() {
        let b = DataBounds::from_graph(&graph(vec![vec![(1e20, 3.0), (1e20, 4.0)]]));
        assert!(b.x_min < 1e20 && b.x_max > 1e20);
        assert!(b.x_max - b.x_min > 1e18);
    }
}
