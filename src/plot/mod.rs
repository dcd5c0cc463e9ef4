//! Chart geometry.
//!
//! Everything here is pure: bounds fitting, tick placement, grid segments and
//! decimation of the series down to the drawing width. The `ui` module turns
//! a [`ChartModel`] into widgets.

mod layout;

pub use layout::PlotLayoutConfig;

use crate::data::Dataset;

/// Chart title.
pub const TITLE: &str = "RTT vs Timestamp";
/// X axis title.
pub const X_AXIS_TITLE: &str = "Timestamp (s)";
/// Y axis title.
pub const Y_AXIS_TITLE: &str = "RTT (ms)";

/// Closed range shown on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisBounds {
    /// Fit bounds to the finite values, widened by `margin` of the span on
    /// each side.
    pub fn fit<I>(values: I, margin: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        if min > max {
            return Self { min: 0.0, max: 1.0 };
        }

        let span = max - min;
        if span == 0.0 {
            return Self {
                min: min - 0.5,
                max: max + 0.5,
            };
        }

        let pad = span * margin;
        Self {
            min: min - pad,
            max: max + pad,
        }
    }

    /// As the `[min, max]` array ratatui axes take.
    pub fn as_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }

    /// Evenly spaced ticks, both ends included.
    pub fn ticks(&self, divisions: usize) -> Vec<f64> {
        if divisions == 0 {
            return vec![self.min, self.max];
        }
        let step = (self.max - self.min) / divisions as f64;
        (0..=divisions)
            .map(|i| {
                if i == divisions {
                    self.max
                } else {
                    self.min + step * i as f64
                }
            })
            .collect()
    }
}

/// Two-point segments at every interior tick of both axes.
pub fn grid_lines(x: &AxisBounds, y: &AxisBounds, divisions: usize) -> Vec<Vec<(f64, f64)>> {
    let interior = |ticks: Vec<f64>| -> Vec<f64> {
        let n = ticks.len();
        ticks.into_iter().skip(1).take(n.saturating_sub(2)).collect()
    };

    let vertical = interior(x.ticks(divisions))
        .into_iter()
        .map(|tx| vec![(tx, y.min), (tx, y.max)]);
    let horizontal = interior(y.ticks(divisions))
        .into_iter()
        .map(|ty| vec![(x.min, ty), (x.max, ty)]);

    vertical.chain(horizontal).collect()
}

/// Reduce `points` to at most two per bin, keeping the lowest and highest
/// RTT of each bin in file order. The first and last points are always kept
/// so the line spans the whole x range.
pub fn decimate(points: &[(f64, f64)], bins: usize) -> Vec<(f64, f64)> {
    let bins = bins.max(1);
    if points.len() <= bins * 2 {
        return points.to_vec();
    }

    let per_bin = points.len() as f64 / bins as f64;
    let mut keep: Vec<usize> = Vec::with_capacity(bins * 2 + 2);
    keep.push(0);

    for bin in 0..bins {
        let start = (bin as f64 * per_bin) as usize;
        let end = (((bin + 1) as f64 * per_bin) as usize).min(points.len());
        if start >= end {
            continue;
        }

        let mut lo = start;
        let mut hi = start;
        for i in start..end {
            if points[i].1 < points[lo].1 {
                lo = i;
            }
            if points[i].1 > points[hi].1 {
                hi = i;
            }
        }

        keep.push(lo.min(hi));
        keep.push(lo.max(hi));
    }

    keep.push(points.len() - 1);
    keep.dedup();
    keep.into_iter().map(|i| points[i]).collect()
}

/// Labels for evenly spaced ticks, all with the same precision.
///
/// The number of decimals follows the spacing between ticks, so neighbouring
/// labels stay distinct even when the range is tiny next to the values
/// (epoch timestamps, flat RTTs). Scientific notation is used only when the
/// plain form would be unreasonably long.
pub fn format_axis_labels(ticks: &[f64]) -> Vec<String> {
    if ticks.iter().any(|v| !v.is_finite()) {
        return ticks.iter().map(|_| "?".to_string()).collect();
    }

    let step = match ticks {
        [first, .., last] => (last - first).abs() / (ticks.len() - 1) as f64,
        _ => 0.0,
    };
    let largest = ticks.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    let step_exp = if step > 0.0 {
        step.log10().floor() as i32
    } else {
        largest.max(1.0).log10().floor() as i32
    };

    // Ticks closer to zero than rounding noise print as zero, never "-0.00"
    let tidy = |v: f64| if v.abs() < step * 1e-9 { 0.0 } else { v };

    if largest >= 1e15 || step_exp < -6 {
        let lead_exp = largest.max(f64::MIN_POSITIVE).log10().floor() as i32;
        let digits = (lead_exp - step_exp + 1).clamp(1, 15) as usize;
        return ticks
            .iter()
            .map(|&v| format!("{:.*e}", digits, tidy(v)))
            .collect();
    }

    let decimals = (1 - step_exp).max(0) as usize;
    ticks
        .iter()
        .map(|&v| format!("{:.*}", decimals, tidy(v)))
        .collect()
}

/// Everything needed to draw one frame of the chart.
#[derive(Debug, Clone)]
pub struct ChartModel {
    /// Decimated series, finite points only.
    pub series: Vec<(f64, f64)>,
    /// X range.
    pub x: AxisBounds,
    /// Y range.
    pub y: AxisBounds,
    /// Grid segments.
    pub grid: Vec<Vec<(f64, f64)>>,
    /// X tick labels, left to right.
    pub x_labels: Vec<String>,
    /// Y tick labels, bottom to top.
    pub y_labels: Vec<String>,
}

impl ChartModel {
    /// Build the chart for a drawing area `width` columns wide.
    pub fn build(dataset: &Dataset, config: &PlotLayoutConfig, width: u16) -> Self {
        let points: Vec<(f64, f64)> = dataset
            .points()
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();

        let x = AxisBounds::fit(points.iter().map(|p| p.0), config.margin_factor);
        let y = AxisBounds::fit(points.iter().map(|p| p.1), config.margin_factor);

        let labels = |b: &AxisBounds| format_axis_labels(&b.ticks(config.grid_divisions));

        Self {
            series: decimate(&points, config.bins_for_width(width)),
            grid: grid_lines(&x, &y, config.grid_divisions),
            x_labels: labels(&x),
            y_labels: labels(&y),
            x,
            y,
        }
    }

    /// Whether there is anything to plot.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
