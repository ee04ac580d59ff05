// File: crates/fitchart-core/src/layout.rs
// Summary: Per-render chart geometry; the axis is resolved first, then shapes are placed on it.

use tracing::debug;

use crate::axis::AxisScale;
use crate::geometry::{map_series, Point, Viewport};
use crate::path::{fill_commands, smooth_commands, to_descriptor, PathCommand};
use crate::scale::ChartKind;
use crate::series::ChartInput;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub viewport: Viewport,
    pub scale: AxisScale,
    pub bars: Vec<Bar>,
    /// Y of the dashed reference line, if the input carries one.
    pub average_y: Option<f64>,
    pub unit: Option<String>,
}

impl BarLayout {
    /// Lay out one bar per (label, sample) pair. `bar_ratio` is the share of
    /// each slot the bar covers.
    pub fn compute(input: &ChartInput, viewport: Viewport, bar_ratio: f64) -> Self {
        // The axis covers every sample, drawn or not.
        let scale = AxisScale::for_kind(ChartKind::Bar, &input.data, input.average);
        let (data, labels) = input.paired();
        let n = data.len();
        let slot = if n > 0 { viewport.width / n as f64 } else { 0.0 };
        let bar_w = slot * bar_ratio;
        let bars = data
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(i, (&value, label))| {
                let height = (scale.fraction(value) * viewport.height).max(0.0);
                Bar {
                    label: label.clone(),
                    value,
                    x: i as f64 * slot + (slot - bar_w) / 2.0,
                    y: viewport.height - height,
                    width: bar_w,
                    height,
                }
            })
            .collect::<Vec<_>>();
        debug!(bars = bars.len(), axis_max = scale.axis_max, "bar layout");
        Self {
            viewport,
            scale,
            bars,
            average_y: input.average.map(|a| viewport.y_for(a, scale.axis_max)),
            unit: input.unit.clone(),
        }
    }

    /// Horizontal center of slot `i`, where its category label goes.
    pub fn label_x(&self, i: usize) -> f64 {
        let n = self.bars.len().max(1) as f64;
        (i as f64 + 0.5) * self.viewport.width / n
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub viewport: Viewport,
    pub scale: AxisScale,
    pub points: Vec<Point>,
    pub labels: Vec<String>,
    pub line: Vec<PathCommand>,
    pub fill: Vec<PathCommand>,
    pub average_y: Option<f64>,
    pub unit: Option<String>,
}

impl LineLayout {
    pub fn compute(input: &ChartInput, viewport: Viewport) -> Self {
        let scale = AxisScale::for_kind(ChartKind::Line, &input.data, input.average);
        let (data, labels) = input.paired();
        let points = map_series(data, scale.axis_max, &viewport);
        let line = smooth_commands(&points);
        let fill = fill_commands(&points, viewport.height);
        debug!(points = points.len(), axis_max = scale.axis_max, "line layout");
        Self {
            viewport,
            scale,
            points,
            labels: labels.to_vec(),
            line,
            fill,
            average_y: input.average.map(|a| viewport.y_for(a, scale.axis_max)),
            unit: input.unit.clone(),
        }
    }

    pub fn line_path(&self) -> String {
        to_descriptor(&self.line)
    }

    pub fn fill_path(&self) -> String {
        to_descriptor(&self.fill)
    }
}

/// Either layout, selected by [`ChartKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum Layout {
    Bar(BarLayout),
    Line(LineLayout),
}

impl Layout {
    pub fn compute(kind: ChartKind, input: &ChartInput, viewport: Viewport, bar_ratio: f64) -> Self {
        match kind {
            ChartKind::Bar => Layout::Bar(BarLayout::compute(input, viewport, bar_ratio)),
            ChartKind::Line => Layout::Line(LineLayout::compute(input, viewport)),
        }
    }

    pub fn scale(&self) -> &AxisScale {
        match self {
            Layout::Bar(b) => &b.scale,
            Layout::Line(l) => &l.scale,
        }
    }

    pub fn viewport(&self) -> Viewport {
        match self {
            Layout::Bar(b) => b.viewport,
            Layout::Line(l) => l.viewport,
        }
    }

    pub fn average_y(&self) -> Option<f64> {
        match self {
            Layout::Bar(b) => b.average_y,
            Layout::Line(l) => l.average_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(data: &[f64]) -> ChartInput {
        let names = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        ChartInput::new(data.to_vec(), names[..data.len()].iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn bars_fill_their_slots() {
        let layout = BarLayout::compute(&week(&[180.0, 360.0]), Viewport::new(400.0, 192.0), 0.5);
        assert_eq!(layout.scale.axis_max, 432.0);
        let b = &layout.bars[0];
        assert_eq!((b.x, b.width), (50.0, 100.0));
        assert_eq!(layout.bars[1].x, 250.0);
        assert_eq!(layout.label_x(1), 300.0);
    }

    #[test]
    fn bar_height_tracks_axis() {
        let layout = BarLayout::compute(&week(&[2000.0, 1000.0]), Viewport::new(400.0, 180.0), 1.0);
        assert_eq!(layout.scale.axis_max, 2000.0);
        assert_eq!(layout.bars[0].height, 180.0);
        assert_eq!(layout.bars[0].y, 0.0);
        assert_eq!(layout.bars[1].height, 90.0);
        assert_eq!(layout.bars[1].y, 90.0);
    }

    #[test]
    fn negative_samples_draw_flat() {
        let layout = BarLayout::compute(&week(&[-10.0]), Viewport::default(), 0.6);
        assert_eq!(layout.bars[0].height, 0.0);
        assert_eq!(layout.bars[0].y, 192.0);
    }

    #[test]
    fn average_line_position() {
        let layout = LineLayout::compute(&week(&[6.0, 7.0, 8.0]).with_average(9.0), Viewport::new(400.0, 200.0));
        assert_eq!(layout.scale.axis_max, 10.0);
        assert_eq!(layout.average_y, Some(20.0));
        assert_eq!(layout.points[2], Point::new(400.0, 40.0));
    }

    #[test]
    fn unlabeled_samples_still_size_the_axis() {
        let input = ChartInput::new(vec![100.0, 5000.0], vec!["Mon".into()]);
        let layout = BarLayout::compute(&input, Viewport::default(), 0.6);
        assert_eq!(layout.bars.len(), 1);
        assert_eq!(layout.scale.axis_max, 10_000.0);
        assert_eq!(layout.scale, AxisScale::for_kind(ChartKind::Bar, &input.data, None));
    }

    #[test]
    fn empty_input_is_drawable() {
        let input = ChartInput::default();
        let bars = BarLayout::compute(&input, Viewport::default(), 0.6);
        assert!(bars.bars.is_empty());
        assert_eq!(bars.scale.axis_max, 2.0);
        let line = LineLayout::compute(&input, Viewport::default());
        assert_eq!(line.line_path(), "");
        assert_eq!(line.fill_path(), "");
        assert_eq!(line.scale.axis_max, 5.0);
    }
}
