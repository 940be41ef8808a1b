//! Geometry and labels for the unsatisfied-demand line chart.
//!
//! All coordinates are SVG user units inside a fixed `viewBox`; the component
//! only maps these numbers onto elements.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

pub const MONTH_LABELS: [&str; 8] = ["Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct"];
pub const UNSATISFIED_DEMAND: [f64; 8] = [38_000.0, 20_000.0, 48_000.0, 42_000.0, 89_600.0, 60_000.0, 35_000.0, 59_000.0];
pub const DEMAND_TARGET: f64 = 85_000.0;
/// Fractional x position of the "Now" marker.
pub const NOW_INDEX: f64 = 2.2;
pub const Y_MAX: f64 = 100_000.0;
pub const Y_STEP: f64 = 20_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self { width: 720.0, height: 320.0, pad_left: 56.0, pad_right: 16.0, pad_top: 16.0, pad_bottom: 48.0 }
    }
}

impl ChartFrame {
    pub fn plot_left(&self) -> f64 {
        self.pad_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.pad_right
    }

    pub fn plot_top(&self) -> f64 {
        self.pad_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }

    /// X for a (possibly fractional) point index among `count` evenly spaced points.
    #[allow(clippy::cast_precision_loss)]
    pub fn x_for_index(&self, index: f64, count: usize) -> f64 {
        if count < 2 {
            return self.plot_left();
        }
        let step = (self.plot_right() - self.plot_left()) / (count - 1) as f64;
        self.plot_left() + index * step
    }

    /// Y for `value`, clamped to `0..=Y_MAX`.
    pub fn y_for_value(&self, value: f64) -> f64 {
        let ratio = (value / Y_MAX).clamp(0.0, 1.0);
        self.plot_bottom() - ratio * (self.plot_bottom() - self.plot_top())
    }

    /// `points` attribute for an SVG polyline through `values`.
    #[allow(clippy::cast_precision_loss)]
    pub fn polyline_points(&self, values: &[f64]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", self.x_for_index(i as f64, values.len()), self.y_for_value(*v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Index of the first maximum value.
pub fn peak_index(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.iter().copied().enumerate() {
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

/// Signed percentage of `value` relative to `target`.
pub fn percent_vs_target(value: f64, target: f64) -> f64 {
    if target == 0.0 {
        return 0.0;
    }
    (value - target) / target * 100.0
}

/// Tooltip delta line, e.g. `"5.4% above target"`.
pub fn format_target_delta(value: f64, target: f64) -> String {
    let direction = if value > target { "above" } else { "below" };
    format!("{:.1}% {direction} target", percent_vs_target(value, target))
}

/// Tooltip headline, e.g. `"$89.60k"`.
pub fn format_thousands(value: f64) -> String {
    format!("${:.2}k", value / 1000.0)
}

/// Y-axis gridline values above zero.
pub fn y_ticks() -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut value = Y_STEP;
    while value <= Y_MAX {
        ticks.push(value);
        value += Y_STEP;
    }
    ticks
}

/// Y-axis label, e.g. `"$20K"`.
pub fn y_tick_label(value: f64) -> String {
    format!("${}K", value / 1000.0)
}
