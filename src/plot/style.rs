/// Fractions of the best/worst gap, measured down from the worst case, that
/// bound the inner "likely" band.
pub const LIKELY_BAND_LOWER: f64 = 0.76;
pub const LIKELY_BAND_UPPER: f64 = 0.91;

/// Relative slack when deciding whether a value sits on a tick.
const TICK_EPS: f64 = 1e-9;
const MAX_TICKS: i64 = 10_000;

/// Tick layout and labelling of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub lo: f64,
    pub hi: f64,
    pub major: f64,
    pub minor: f64,
    /// Labels show `value * label_scale`, truncated.
    pub label_scale: f64,
    /// Cut axis: the lower edge is labelled 0 and marked with a break.
    pub false_zero: Option<f64>,
    pub break_step: f64,
}

impl AxisSpec {
    pub fn linear(lo: f64, hi: f64, major: f64, minor: f64, label_scale: f64) -> Self {
        Self {
            lo,
            hi,
            major,
            minor,
            label_scale,
            false_zero: None,
            break_step: 0.0,
        }
    }

    pub fn with_false_zero(mut self, break_step: f64) -> Self {
        self.false_zero = Some(self.lo);
        self.break_step = break_step;
        self
    }

    /// Labelled tick positions: the false zero, if any, then every multiple
    /// of `major` above it up to `hi`.
    pub fn major_ticks(&self) -> Vec<f64> {
        let ticks = multiples(self.major, self.lo, self.hi);
        match self.false_zero {
            Some(fz) => {
                let above = fz + TICK_EPS * self.major.abs().max(1.0);
                std::iter::once(fz)
                    .chain(ticks.into_iter().filter(|&v| v > above))
                    .collect()
            }
            None => ticks,
        }
    }

    /// Grid positions at multiples of `minor` that carry no label.
    pub fn minor_ticks(&self) -> Vec<f64> {
        let major = self.major_ticks();
        multiples(self.minor, self.lo, self.hi)
            .into_iter()
            .filter(|v| !major.iter().any(|m| (m - v).abs() <= TICK_EPS * self.minor.abs()))
            .collect()
    }

    /// `value * label_scale` truncated towards zero; float noise just below
    /// a whole number is snapped to it first.
    pub fn label(&self, v: f64) -> String {
        if let Some(fz) = self.false_zero {
            if (v - fz).abs() <= 1e-9 * fz.abs().max(1.0) {
                return "0".to_string();
            }
        }
        let scaled = v * self.label_scale;
        let nearest = scaled.round();
        let whole = if (scaled - nearest).abs() <= 1e-9 * nearest.abs().max(1.0) {
            nearest
        } else {
            scaled.trunc()
        };
        if whole == 0.0 {
            // avoid "-0"
            return "0".to_string();
        }
        format!("{}", whole as i64)
    }

    /// Zigzag drawn over the y axis at `x` to mark a cut axis.
    pub fn break_marker(&self, x: f64, x_span: f64) -> Option<Vec<(f64, f64)>> {
        let fz = self.false_zero?;
        let f = self.break_step;
        let dx = 0.015 * x_span;
        Some(vec![
            (x, fz),
            (x, fz + f),
            (x + dx, fz + 2.0 * f),
            (x - dx, fz + 3.0 * f),
            (x, fz + 4.0 * f),
            (x, self.hi),
        ])
    }
}

/// Multiples of `step` inside `[lo, hi]`, computed as `k * step`.
fn multiples(step: f64, lo: f64, hi: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !lo.is_finite() || !hi.is_finite() || hi < lo {
        return Vec::new();
    }
    let first = (lo / step - TICK_EPS).ceil() as i64;
    let last = (hi / step + TICK_EPS).floor() as i64;
    if last - first > MAX_TICKS {
        return Vec::new();
    }
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Data extent of the x axis; a zero-width extent is widened so the chart
/// still has a drawable range.
pub fn x_extent(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values.iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo <= 0.0 {
        let pad = (lo.abs() * 0.05).max(0.5);
        return (lo - pad, hi + pad);
    }
    (lo, hi)
}

/// Pairs `(x, y)` with both coordinates finite.
pub fn finite_points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect()
}

/// Closed outline of the region between `lower` and `upper`.
pub fn band_polygon(x: &[f64], lower: &[f64], upper: &[f64]) -> Vec<(f64, f64)> {
    let idx: Vec<usize> = (0..x.len().min(lower.len()).min(upper.len()))
        .filter(|&i| x[i].is_finite() && lower[i].is_finite() && upper[i].is_finite())
        .collect();
    let mut out = Vec::with_capacity(idx.len() * 2);
    out.extend(idx.iter().map(|&i| (x[i], lower[i])));
    out.extend(idx.iter().rev().map(|&i| (x[i], upper[i])));
    out
}

pub fn likely_band(best: &[f64], worst: &[f64]) -> (Vec<f64>, Vec<f64>) {
    best.iter()
        .zip(worst)
        .map(|(&b, &w)| {
            let diff = w - b;
            (w - LIKELY_BAND_LOWER * diff, w - LIKELY_BAND_UPPER * diff)
        })
        .unzip()
}

#[cfg(test)]
#[path = "../../tests/src_inline/plot/style.rs"]
mod tests;
