// File: crates/graph-render/src/scale.rs
// Summary: Linear data-to-pixel transform used for both axes, plus range helpers.

/// Half of `max - min`. Stays finite for any finite bounds, where the full
/// difference overflows near the ends of the f64 range.
#[inline]
pub fn half_span(min: f64, max: f64) -> f64 {
    max * 0.5 - min * 0.5
}

/// True when `[min, max]` is too narrow to resolve at the magnitude of its
/// bounds.
pub fn is_flat(min: f64, max: f64) -> bool {
    let mag = min.abs().max(max.abs()).max(1e-300);
    half_span(min, max) <= f64::EPSILON * 0.5 * mag
}

/// Give a flat range a visible width around its center. Other ranges pass
/// through unchanged. Bounds are clamped to the finite f64 range.
pub fn widen_flat(min: f64, max: f64) -> (f64, f64) {
    if !is_flat(min, max) {
        return (min, max);
    }
    let pad = 0.5f64.max(min.abs().max(max.abs()) * 0.05);
    (clamp_finite(min - pad), clamp_finite(max + pad))
}

#[inline]
pub fn clamp_finite(v: f64) -> f64 {
    v.clamp(f64::MIN, f64::MAX)
}

/// Maps the data interval `[vmin, vmax]` onto the pixel interval
/// `[px_min, px_max]`. For the Y axis pass `px_min = bottom`, `px_max = top`
/// so larger values land higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_min: f32,
    pub px_max: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_min: f32, px_max: f32, vmin: f64, vmax: f64) -> Self {
        let (vmin, vmax) = widen_flat(vmin, vmax);
        Self { px_min, px_max, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        // halves keep both differences finite across the whole f64 range
        let t = half_span(self.vmin, v) / half_span(self.vmin, self.vmax);
        self.px_min + (t as f32) * (self.px_max - self.px_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_is_flipped() {
        let s = LinearScale::new(400.0, 0.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), 400.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert_eq!(s.to_px(5.0), 200.0);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = LinearScale::new(0.0, 100.0, 3.0, 3.0);
        assert_eq!((s.vmin, s.vmax), (2.5, 3.5));
        assert_eq!(s.to_px(3.0), 50.0);
    }

    #[test]
    fn tiny_spans_are_not_flat() {
        assert!(!is_flat(0.0, 1e-10));
        assert!(!is_flat(1e6, 1e6 + 1e-6));
        assert!(is_flat(1e6, 1e6));
        assert!(is_flat(1.0, 1.0 + f64::EPSILON * 0.25));
        assert!(is_flat(0.0, 0.0));

        let s = LinearScale::new(0.0, 100.0, 0.0, 1e-10);
        assert_eq!(s.to_px(0.0), 0.0);
        assert_eq!(s.to_px(1e-10), 100.0);
        assert!((s.to_px(5e-11) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn extreme_bounds_stay_finite() {
        assert!(half_span(-1e308, 1e308).is_finite());
        let s = LinearScale::new(0.0, 100.0, -1.5e308, 1.5e308);
        assert_eq!(s.to_px(-1.5e308), 0.0);
        assert_eq!(s.to_px(0.0), 50.0);
        assert_eq!(s.to_px(1.5e308), 100.0);

        let (lo, hi) = widen_flat(f64::MAX, f64::MAX);
        assert!(lo.is_finite() && hi.is_finite() && lo < hi);
    }
}
