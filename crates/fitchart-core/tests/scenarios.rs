// File: crates/fitchart-core/tests/scenarios.rs
// Purpose: End-to-end axis and path scenarios for the two dashboard chart kinds.

use fitchart_core::{AxisScale, BarLayout, ChartInput, ChartKind, LineLayout, Viewport};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn weekly_steps_scale() {
    let input = ChartInput::new(
        vec![100.0, 200.0, 150.0, 300.0, 250.0, 180.0, 220.0],
        labels(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
    );
    let layout = BarLayout::compute(&input, Viewport::default(), 0.6);
    assert_eq!(layout.scale.raw_max, 300.0);
    assert_eq!(layout.scale.axis_max, 360.0);
    assert_eq!(layout.scale.ticks, [0.0, 90.0, 180.0, 270.0, 360.0]);
    assert_eq!(layout.bars.len(), 7);
    assert_eq!(layout.bars[3].label, "Thu");
}

#[test]
fn sleep_hours_with_average_above_data() {
    let input = ChartInput::new(vec![6.0, 7.0, 8.0], labels(&["Mon", "Tue", "Wed"])).with_average(9.0);
    let layout = LineLayout::compute(&input, Viewport::default());
    assert_eq!(layout.scale.raw_max, 9.0);
    assert_eq!(layout.scale.axis_max, 10.0);
}

#[test]
fn empty_series_uses_smallest_bucket() {
    assert_eq!(AxisScale::for_kind(ChartKind::Bar, &[], None).axis_max, 2.0);
    assert_eq!(AxisScale::for_kind(ChartKind::Line, &[], None).axis_max, 5.0);
}

#[test]
fn reference_drives_the_bound() {
    let from_data = AxisScale::for_kind(ChartKind::Bar, &[900.0], None);
    let from_ref = AxisScale::for_kind(ChartKind::Bar, &[900.0], Some(6_000.0));
    assert_eq!(from_data.axis_max, 1_080.0);
    assert_eq!(from_ref.raw_max, 6_000.0);
    assert_eq!(from_ref.axis_max, 10_000.0);
}

#[test]
fn single_point_line_stays_at_that_point() {
    let input = ChartInput::new(vec![2.5], labels(&["Mon"]));
    let layout = LineLayout::compute(&input, Viewport::default());
    assert_eq!(layout.line_path(), "M 0,96");
    assert_eq!(layout.fill_path(), "");
}

#[test]
fn smoothed_week_path() {
    let input = ChartInput::new(vec![0.0, 5.0, 10.0], labels(&["a", "b", "c"]));
    let layout = LineLayout::compute(&input, Viewport::new(400.0, 200.0));
    assert_eq!(
        layout.line_path(),
        "M 0,200 C 100,200 100,100 200,100 C 300,100 300,0 400,0"
    );
    assert_eq!(
        layout.fill_path(),
        "M 0,200 C 100,200 100,100 200,100 C 300,100 300,0 400,0 L 400,200 L 0,200 Z"
    );
}

#[test]
fn mismatched_labels_drop_trailing_points() {
    let input = ChartInput::new(vec![1.0, 2.0, 3.0, 9.0], labels(&["a", "b"]));
    let layout = LineLayout::compute(&input, Viewport::default());
    assert_eq!(layout.points.len(), 2);
    assert_eq!(layout.labels.len(), 2);
    // Undrawn samples still count toward the bound.
    assert_eq!(layout.scale.raw_max, 9.0);
    assert_eq!(layout.scale.axis_max, 10.0);
    assert!(input.validate().is_err());
}
