// File: crates/graph-render/src/grid.rs
// Summary: Tick locator choosing "nice" positions (1, 2, 2.5, 5 x 10^k) inside a range.

use crate::scale::{half_span, is_flat};

/// Tick positions within `[min, max]` and the spacing between them.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
}

/// Pick at most about `target` ticks covering `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Ticks {
    if !min.is_finite() || !max.is_finite() || is_flat(min, max) || max < min || target < 2 {
        return Ticks { values: vec![min], step: 1.0 };
    }
    // from the half span, so ranges wider than f64::MAX still get a step
    let step = nice_step(half_span(min, max) * (2.0 / (target as f64 - 1.0)));
    let first = (min / step).ceil() * step;
    let mut values = Vec::new();
    // the bound only matters when the step is close to the precision of `min`
    for i in 0..=target * 2 {
        let v = first + step * i as f64;
        if v > max + step * 1e-9 { break; }
        // snap tiny float noise (e.g. 0.30000000000000004) and avoid "-0"
        let v = (v / step).round() * step;
        values.push(if v == 0.0 { 0.0 } else { v });
    }
    Ticks { values, step }
}

fn nice_step(raw: f64) -> f64 {
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}
