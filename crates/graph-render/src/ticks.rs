// File: crates/graph-render/src/ticks.rs
// Summary: Tick label formatting hook with a default decimal formatter.

/// Turns a tick value into its label. `step` is the spacing between
/// neighbouring ticks, so implementations can pick a precision.
pub trait TickFormatter {
    fn format(&self, value: f64, step: f64) -> String;
}

/// Closures can be used as formatters directly.
impl<F> TickFormatter for F
where
    F: Fn(f64, f64) -> String,
{
    fn format(&self, value: f64, step: f64) -> String {
        self(value, step)
    }
}

/// Prints as many decimals as the tick step needs, and switches to
/// scientific notation for very large or very small magnitudes. In both
/// forms neighbouring ticks get distinct labels.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTickFormatter;

/// Above this many significant digits f64 no longer tells ticks apart.
const MAX_DIGITS: usize = 16;

impl TickFormatter for PlainTickFormatter {
    fn format(&self, value: f64, step: f64) -> String {
        let step = step.abs();
        let mag = value.abs();
        let scientific = |m: f64| m != 0.0 && !(1e-4..1e6).contains(&m);
        if scientific(mag) {
            return format!("{value:.prec$e}", prec = exponent_digits(value, step));
        }
        if mag == 0.0 && scientific(step) {
            return "0".to_string();
        }
        let decimals = decimals(step);
        let s = format!("{value:.decimals$}");
        if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
            s[1..].to_string()
        } else {
            s
        }
    }
}

/// Decimals needed to print multiples of `step` exactly: 0.25 -> 2, 2.5 -> 1, 20 -> 0.
fn decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut d = 0usize;
    let mut scaled = step;
    while (scaled - scaled.round()).abs() > 1e-9 * scaled.max(1.0) && d < 12 {
        scaled *= 10.0;
        d += 1;
    }
    d
}

/// Mantissa digits for `value` in scientific form: enough to reach the
/// step's leading digit, plus the digits of the step's own mantissa.
fn exponent_digits(value: f64, step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let value_exp = decade(value.abs());
    let step_exp = decade(step);
    let leading = (value_exp - step_exp).max(0) as usize;
    let mantissa = step / 10f64.powi(step_exp);
    (leading + decimals(mantissa)).min(MAX_DIGITS)
}

/// Exponent of the leading digit of a positive `x` (1e6 -> 6, 9.9e5 -> 5).
fn decade(x: f64) -> i32 {
    let mut e = x.log10().floor() as i32;
    // log10 may land just below an exact power of ten
    if 10f64.powi(e + 1) <= x {
        e += 1;
    } else if 10f64.powi(e) > x {
        e -= 1;
    }
    e
}
