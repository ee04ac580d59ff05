// File: crates/fitchart-core/src/path.rs
// Summary: Smoothed line and closed fill paths built from cubic Bézier segments.
//
// Each segment puts both control points at the horizontal midpoint of its
// endpoints, the first at the start height and the second at the end height.
// The curve passes through every sample and flattens at each one.

use std::fmt::Write as _;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// Commands tracing the smoothed curve through `points`.
/// Empty input yields no commands; one point yields a lone `MoveTo`.
pub fn smooth_commands(points: &[Point]) -> Vec<PathCommand> {
    let Some(&first) = points.first() else { return Vec::new(); };
    let mut out = Vec::with_capacity(points.len());
    out.push(PathCommand::MoveTo(first));
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let cx = (p0.x + p1.x) / 2.0;
        out.push(PathCommand::CubicTo {
            c1: Point::new(cx, p0.y),
            c2: Point::new(cx, p1.y),
            to: p1,
        });
    }
    out
}

/// Smoothed curve closed down to `baseline_y` for area fills.
/// Fewer than two points enclose no area, so the result is empty.
pub fn fill_commands(points: &[Point], baseline_y: f64) -> Vec<PathCommand> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else { return Vec::new(); };
    if points.len() < 2 {
        return Vec::new();
    }
    let mut out = smooth_commands(points);
    out.push(PathCommand::LineTo(Point::new(last.x, baseline_y)));
    out.push(PathCommand::LineTo(Point::new(first.x, baseline_y)));
    out.push(PathCommand::Close);
    out
}

/// Serialize commands as an SVG path `d` attribute.
pub fn to_descriptor(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for (i, cmd) in commands.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = match cmd {
            PathCommand::MoveTo(p) => write!(d, "M {},{}", p.x, p.y),
            PathCommand::LineTo(p) => write!(d, "L {},{}", p.x, p.y),
            PathCommand::CubicTo { c1, c2, to } => {
                write!(d, "C {},{} {},{} {},{}", c1.x, c1.y, c2.x, c2.y, to.x, to.y)
            }
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}

/// Path descriptor for the smoothed line through `points`.
pub fn line_path(points: &[Point]) -> String {
    to_descriptor(&smooth_commands(points))
}

/// Path descriptor for the area under the smoothed line.
pub fn fill_path(points: &[Point], baseline_y: f64) -> String {
    to_descriptor(&fill_commands(points, baseline_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_empty() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(fill_path(&[], 192.0), "");
    }

    #[test]
    fn single_point_stays_put() {
        let p = [Point::new(0.0, 96.0)];
        assert_eq!(line_path(&p), "M 0,96");
        assert_eq!(fill_path(&p, 192.0), "");
    }

    #[test]
    fn two_points() {
        let p = [Point::new(0.0, 192.0), Point::new(400.0, 0.0)];
        assert_eq!(line_path(&p), "M 0,192 C 200,192 200,0 400,0");
        assert_eq!(
            fill_path(&p, 192.0),
            "M 0,192 C 200,192 200,0 400,0 L 400,192 L 0,192 Z"
        );
    }

    #[test]
    fn one_segment_per_pair() {
        let p: Vec<Point> = (0..5).map(|i| Point::new(i as f64 * 10.0, 1.0)).collect();
        let cmds = smooth_commands(&p);
        assert_eq!(cmds.len(), 5);
        assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
        assert!(cmds[1..].iter().all(|c| matches!(c, PathCommand::CubicTo { .. })));
    }
}
