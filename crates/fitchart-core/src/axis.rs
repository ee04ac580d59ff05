// File: crates/fitchart-core/src/axis.rs
// Summary: Y-axis model: bound selection from data + reference, and tick values.

use tracing::debug;

use crate::grid::{self, TICK_COUNT};
use crate::scale::{ChartKind, ScalePolicy};

/// Smallest raw maximum considered; keeps empty or all-zero series off a zero bound.
pub const RAW_MAX_FLOOR: f64 = 1.0;

/// Resolved Y axis for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    /// Largest of the samples, the floor and the reference value.
    pub raw_max: f64,
    pub axis_max: f64,
    /// Ascending: `ticks[0] == 0`, `ticks[4] == axis_max`.
    pub ticks: [f64; TICK_COUNT],
}

impl AxisScale {
    /// Compute the axis for `series` with an optional reference overlay.
    /// Total over every input, including empty and NaN-bearing series.
    pub fn compute(series: &[f64], reference: Option<f64>, policy: &dyn ScalePolicy) -> Self {
        let raw_max = raw_max(series, reference);
        let axis_max = policy.axis_max(raw_max);
        debug!(policy = policy.name(), raw_max, axis_max, "axis scale");
        Self { raw_max, axis_max, ticks: grid::ticks(axis_max) }
    }

    pub fn for_kind(kind: ChartKind, series: &[f64], reference: Option<f64>) -> Self {
        Self::compute(series, reference, kind.policy())
    }

    /// Ticks ordered top to bottom, the order grid labels are drawn in.
    pub fn ticks_top_down(&self) -> [f64; TICK_COUNT] {
        let mut t = self.ticks;
        t.reverse();
        t
    }

    /// Fraction of the axis height covered by `value`, unclamped.
    #[inline]
    pub fn fraction(&self, value: f64) -> f64 {
        value / self.axis_max
    }
}

/// `max(series ∪ {1})`, raised to `reference` when that is larger.
/// NaN and infinite values are skipped on both sides.
pub fn raw_max(series: &[f64], reference: Option<f64>) -> f64 {
    let data_max = series.iter().copied().filter(|v| v.is_finite()).fold(RAW_MAX_FLOOR, f64::max);
    match reference {
        Some(r) if r.is_finite() && r > data_max => r,
        _ => data_max,
    }
}
