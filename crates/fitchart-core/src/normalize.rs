// File: crates/fitchart-core/src/normalize.rs
// Summary: Fitness metric normalization: unit conversion and weekday aggregation into chart input.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use tracing::debug;

use crate::scale::ChartKind;
use crate::series::ChartInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    Steps,
    Seconds,
    Minutes,
    Hours,
}

impl MetricUnit {
    pub fn is_duration(&self) -> bool {
        !matches!(self, MetricUnit::Steps)
    }

    fn to_hours(&self, value: f64) -> f64 {
        match self {
            MetricUnit::Seconds => value / 3600.0,
            MetricUnit::Minutes => value / 60.0,
            MetricUnit::Hours | MetricUnit::Steps => value,
        }
    }
}

/// One raw reading as delivered by a tracker.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: f64,
    pub unit: MetricUnit,
}

impl Sample {
    pub fn new(date: NaiveDate, value: f64, unit: MetricUnit) -> Self {
        Self { date, value, unit }
    }

    /// Value in the unit domain of `kind`: hours for line charts, raw counts
    /// for bar charts. Samples that do not belong to the domain give `None`.
    pub fn to_domain(&self, kind: ChartKind) -> Option<f64> {
        if !self.value.is_finite() {
            return None;
        }
        match kind {
            ChartKind::Line if self.unit.is_duration() => Some(self.unit.to_hours(self.value)),
            ChartKind::Bar if !self.unit.is_duration() => Some(self.value),
            _ => None,
        }
    }
}

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Sum samples per weekday into a Monday-first series labeled `Mon..Sun`.
/// `average` is the mean over days that had at least one sample.
pub fn weekly_series(samples: &[Sample], kind: ChartKind) -> ChartInput {
    let mut totals = [0.0f64; 7];
    let mut seen = [false; 7];
    let mut skipped = 0usize;
    for s in samples {
        match s.to_domain(kind) {
            Some(v) => {
                let day = s.date.weekday().num_days_from_monday() as usize;
                totals[day] += v;
                seen[day] = true;
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, ?kind, "samples outside the chart's unit domain");
    }

    let active: Vec<f64> = totals.iter().zip(seen).filter(|(_, s)| *s).map(|(v, _)| *v).collect();
    let average = (!active.is_empty()).then(|| active.iter().sum::<f64>() / active.len() as f64);

    let input = ChartInput::new(totals.to_vec(), WEEK.iter().map(|d| d.to_string()).collect());
    let input = match kind {
        ChartKind::Line => input.with_unit("h"),
        ChartKind::Bar => input.with_unit("steps"),
    };
    match average {
        Some(a) => input.with_average(a),
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        // 2024-01-01 is a Monday.
        NaiveDate::from_ymd_opt(2024, 1, d).expect("valid date")
    }

    #[test]
    fn durations_become_hours() {
        assert_eq!(Sample::new(day(1), 90.0, MetricUnit::Minutes).to_domain(ChartKind::Line), Some(1.5));
        assert_eq!(Sample::new(day(1), 7200.0, MetricUnit::Seconds).to_domain(ChartKind::Line), Some(2.0));
        assert_eq!(Sample::new(day(1), 4000.0, MetricUnit::Steps).to_domain(ChartKind::Line), None);
        assert_eq!(Sample::new(day(1), 2.0, MetricUnit::Hours).to_domain(ChartKind::Bar), None);
    }

    #[test]
    fn aggregates_by_weekday() {
        let samples = [
            Sample::new(day(1), 3000.0, MetricUnit::Steps),
            Sample::new(day(1), 1000.0, MetricUnit::Steps),
            Sample::new(day(3), 8000.0, MetricUnit::Steps),
            Sample::new(day(8), 500.0, MetricUnit::Steps),
            Sample::new(day(7), 30.0, MetricUnit::Minutes),
        ];
        let input = weekly_series(&samples, ChartKind::Bar);
        assert_eq!(input.labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(input.data, vec![4500.0, 0.0, 8000.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(input.average, Some(6250.0));
        assert_eq!(input.unit.as_deref(), Some("steps"));
    }

    #[test]
    fn no_samples_no_average() {
        let input = weekly_series(&[], ChartKind::Line);
        assert_eq!(input.data, vec![0.0; 7]);
        assert_eq!(input.average, None);
    }
}
