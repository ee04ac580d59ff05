// File: crates/fitchart-core/src/scale.rs
// Summary: Axis-bound policies for the step-count (bar) and hour (line) domains.

use std::str::FromStr;

use crate::error::ChartError;

/// Picks a rounded Y-axis upper bound for a raw maximum.
///
/// Implementations must return a value `>= raw_max` for every finite
/// `raw_max >= 1`, so the tallest sample always fits on the chart.
pub trait ScalePolicy {
    fn name(&self) -> &'static str;
    fn axis_max(&self, raw_max: f64) -> f64;
}

/// One rounding tier: anything above `above` snaps to `ceiling`, or to the
/// next multiple of `step` when `ceiling` would clip the data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bucket {
    pub above: f64,
    pub ceiling: f64,
    pub step: f64,
}

impl Bucket {
    pub const fn new(above: f64, ceiling: f64, step: f64) -> Self {
        Self { above, ceiling, step }
    }

    #[inline]
    fn resolve(&self, raw_max: f64) -> f64 {
        self.ceiling.max((raw_max / self.step).ceil() * self.step)
    }
}

fn first_matching(buckets: &[Bucket], raw_max: f64) -> Option<f64> {
    buckets.iter().find(|b| raw_max > b.above).map(|b| b.resolve(raw_max))
}

/// Daily step counts and similar large integer tallies.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepCountPolicy;

impl StepCountPolicy {
    pub const BUCKETS: [Bucket; 3] = [
        Bucket::new(10_000.0, 12_000.0, 2_000.0),
        Bucket::new(5_000.0, 10_000.0, 1_000.0),
        Bucket::new(1_000.0, 2_000.0, 500.0),
    ];
}

impl ScalePolicy for StepCountPolicy {
    fn name(&self) -> &'static str { "steps" }

    fn axis_max(&self, raw_max: f64) -> f64 {
        // 20% headroom; `* 12 / 10` keeps integer inputs exact before ceil.
        first_matching(&Self::BUCKETS, raw_max).unwrap_or_else(|| (raw_max * 12.0 / 10.0).ceil())
    }
}

/// Durations measured in hours (sleep, active time).
#[derive(Clone, Copy, Debug, Default)]
pub struct HourPolicy;

impl HourPolicy {
    pub const BUCKETS: [Bucket; 2] = [
        Bucket::new(8.0, 10.0, 2.0),
        Bucket::new(5.0, 8.0, 1.0),
    ];
    pub const FLOOR: f64 = 5.0;
}

impl ScalePolicy for HourPolicy {
    fn name(&self) -> &'static str { "hours" }

    fn axis_max(&self, raw_max: f64) -> f64 {
        first_matching(&Self::BUCKETS, raw_max).unwrap_or(Self::FLOOR)
    }
}

/// Chart kind; each kind carries its own unit domain and scale policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Bar chart over step counts.
    Bar,
    /// Smoothed line chart over hours.
    Line,
}

impl ChartKind {
    pub fn policy(&self) -> &'static dyn ScalePolicy {
        match self {
            ChartKind::Bar => &StepCountPolicy,
            ChartKind::Line => &HourPolicy,
        }
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bar" | "steps" => Ok(ChartKind::Bar),
            "line" | "hours" => Ok(ChartKind::Line),
            _ => Err(ChartError::UnknownKind(name.to_string())),
        }
    }
}
