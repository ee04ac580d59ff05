// File: crates/fitchart-core/src/svg.rs
// Summary: SVG document output for bar and line layouts.

use std::fmt::Write as _;

use crate::axis::AxisScale;
use crate::config::ChartConfig;
use crate::geometry::Viewport;
use crate::layout::{BarLayout, Layout, LineLayout};
use crate::theme::Style;

/// Tick label text: thousands as `k`, otherwise at most two decimals.
pub fn format_tick(v: f64) -> String {
    if v.abs() >= 1000.0 {
        format!("{}k", trim_decimals(v / 1000.0, 1))
    } else {
        trim_decimals(v, 2)
    }
}

fn trim_decimals(v: f64, places: usize) -> String {
    let s = format!("{:.*}", places, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

struct Doc {
    buf: String,
}

impl Doc {
    fn open(layout_width: f64, layout_height: f64, style: &Style, cfg: &ChartConfig) -> Self {
        let insets = cfg.insets();
        let w = layout_width + insets.hsum() as f64;
        let h = layout_height + insets.vsum() as f64;
        let mut buf = String::new();
        let _ = write!(
            buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        let _ = write!(buf, r#"<rect width="{w}" height="{h}" fill="{}"/>"#, style.background.hex());
        let _ = write!(buf, r#"<g transform="translate({},{})">"#, insets.left, insets.top);
        Self { buf }
    }

    fn grid(&mut self, scale: &AxisScale, vp: Viewport, style: &Style, font_size: f64) {
        for t in scale.ticks_top_down() {
            let y = vp.y_for(t, scale.axis_max);
            let _ = write!(
                self.buf,
                r#"<line x1="0" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="1"/>"#,
                vp.width,
                style.grid.hex()
            );
            let _ = write!(
                self.buf,
                r#"<text x="-6" y="{}" font-size="{font_size}" text-anchor="end" fill="{}">{}</text>"#,
                y + font_size * 0.35,
                style.label.hex(),
                format_tick(t)
            );
        }
    }

    fn average(&mut self, average_y: Option<f64>, vp: Viewport, style: &Style) {
        if let Some(y) = average_y {
            let _ = write!(
                self.buf,
                r#"<line x1="0" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-opacity="{:.2}" stroke-width="1" stroke-dasharray="4 4"/>"#,
                vp.width,
                style.average.hex(),
                style.average.opacity()
            );
        }
    }

    fn category(&mut self, x: f64, y: f64, label: &str, style: &Style, font_size: f64) {
        let _ = write!(
            self.buf,
            r#"<text x="{x}" y="{}" font-size="{font_size}" text-anchor="middle" fill="{}">{}</text>"#,
            y + font_size + 6.0,
            style.label.hex(),
            escape(label)
        );
    }

    fn close(mut self) -> String {
        self.buf.push_str("</g></svg>");
        self.buf
    }
}

pub fn render_bar_svg(layout: &BarLayout, style: &Style, cfg: &ChartConfig) -> String {
    let vp = layout.viewport;
    let mut doc = Doc::open(vp.width, vp.height, style, cfg);
    doc.grid(&layout.scale, vp, style, cfg.font_size);
    for (i, b) in layout.bars.iter().enumerate() {
        let _ = write!(
            doc.buf,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" fill="{}"/>"#,
            b.x,
            b.y,
            b.width,
            b.height,
            style.bar.hex()
        );
        doc.category(layout.label_x(i), vp.height, &b.label, style, cfg.font_size);
    }
    if cfg.show_average {
        doc.average(layout.average_y, vp, style);
    }
    doc.close()
}

pub fn render_line_svg(layout: &LineLayout, style: &Style, cfg: &ChartConfig) -> String {
    let vp = layout.viewport;
    let mut doc = Doc::open(vp.width, vp.height, style, cfg);
    doc.grid(&layout.scale, vp, style, cfg.font_size);
    if !layout.fill.is_empty() {
        let _ = write!(
            doc.buf,
            r#"<path d="{}" fill="{}" fill-opacity="{:.2}" stroke="none"/>"#,
            layout.fill_path(),
            style.fill.hex(),
            style.fill.opacity()
        );
    }
    if !layout.line.is_empty() {
        let _ = write!(
            doc.buf,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="2" stroke-linecap="round"/>"#,
            layout.line_path(),
            style.stroke.hex()
        );
    }
    for (p, label) in layout.points.iter().zip(&layout.labels) {
        doc.category(p.x, vp.height, label, style, cfg.font_size);
    }
    if cfg.show_average {
        doc.average(layout.average_y, vp, style);
    }
    doc.close()
}

/// Render either layout kind.
pub fn render_svg(layout: &Layout, style: &Style, cfg: &ChartConfig) -> String {
    match layout {
        Layout::Bar(b) => render_bar_svg(b, style, cfg),
        Layout::Line(l) => render_line_svg(l, style, cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::ChartInput;

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(1.25), "1.25");
        assert_eq!(format_tick(7.5), "7.5");
        assert_eq!(format_tick(360.0), "360");
        assert_eq!(format_tick(12_000.0), "12k");
        assert_eq!(format_tick(2_500.0), "2.5k");
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape("A&B <c>"), "A&amp;B &lt;c&gt;");
    }

    #[test]
    fn line_svg_contains_paths_and_average() {
        let input = ChartInput::new(vec![6.0, 7.0, 8.0], vec!["Mon".into(), "Tue".into(), "Wed".into()])
            .with_average(9.0);
        let layout = LineLayout::compute(&input, Viewport::default());
        let cfg = ChartConfig::default();
        let svg = render_line_svg(&layout, &cfg.style(), &cfg);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(&format!(r#"d="{}""#, layout.line_path())));
        assert!(svg.contains("stroke-dasharray"));
        assert_eq!(svg.matches("<line").count(), 6);
        assert!(svg.contains(">Wed</text>"));
    }

    #[test]
    fn average_can_be_hidden() {
        let input = ChartInput::new(vec![100.0], vec!["Mon".into()]).with_average(50.0);
        let layout = BarLayout::compute(&input, Viewport::default(), 0.6);
        let cfg = ChartConfig { show_average: false, ..ChartConfig::default() };
        let svg = render_bar_svg(&layout, &cfg.style(), &cfg);
        assert!(!svg.contains("stroke-dasharray"));
        assert_eq!(svg.matches("<rect").count(), 2);
    }
}
