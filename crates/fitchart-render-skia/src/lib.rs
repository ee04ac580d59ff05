// File: crates/fitchart-render-skia/src/lib.rs
// Summary: Headless PNG rendering of fitchart layouts using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use fitchart_core::path::PathCommand;
use fitchart_core::svg::format_tick;
use fitchart_core::{AxisScale, BarLayout, ChartConfig, Layout, LineLayout, Rgba, Style, Viewport};

pub struct RenderOptions {
    /// Device pixels per virtual unit.
    pub pixel_scale: f32,
    /// Text varies across platforms' fonts; tests turn it off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { pixel_scale: 2.0, draw_labels: true }
    }
}

#[inline]
fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
fn pt(x: f64, y: f64) -> (f32, f32) {
    (x as f32, y as f32)
}

pub struct SkiaRenderer {
    opts: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self { Self { opts } }

    /// Output size in device pixels for `layout` under `cfg`.
    pub fn surface_size(&self, layout: &Layout, cfg: &ChartConfig) -> (i32, i32) {
        let vp = layout.viewport();
        let insets = cfg.insets();
        let s = self.opts.pixel_scale as f64;
        let w = ((vp.width + insets.hsum() as f64) * s).ceil().max(1.0);
        let h = ((vp.height + insets.vsum() as f64) * s).ceil().max(1.0);
        (w as i32, h as i32)
    }

    /// Render to PNG bytes in memory.
    pub fn render_png_bytes(&self, layout: &Layout, style: &Style, cfg: &ChartConfig) -> Result<Vec<u8>> {
        let (w, h) = self.surface_size(layout, cfg);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(color(style.background));

        let insets = cfg.insets();
        canvas.save();
        canvas.scale((self.opts.pixel_scale, self.opts.pixel_scale));
        canvas.translate((insets.left as f32, insets.top as f32));

        draw_grid(canvas, layout.scale(), layout.viewport(), style, cfg, self.opts.draw_labels);
        match layout {
            Layout::Bar(b) => draw_bars(canvas, b, style, cfg, self.opts.draw_labels),
            Layout::Line(l) => draw_line(canvas, l, style, cfg, self.opts.draw_labels),
        }
        if cfg.show_average {
            if let Some(y) = layout.average_y() {
                draw_average(canvas, y, layout.viewport(), style);
            }
        }
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(width = w, height = h, bytes = data.as_bytes().len(), "rendered png");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        layout: &Layout,
        style: &Style,
        cfg: &ChartConfig,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(layout, style, cfg)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

// ---- helpers ----------------------------------------------------------------

fn label_paint(style: &Style) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(style.label));
    paint.set_anti_alias(true);
    paint
}

fn label_font(cfg: &ChartConfig) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(cfg.font_size as f32);
    font
}

fn draw_grid(canvas: &skia::Canvas, scale: &AxisScale, vp: Viewport, style: &Style, cfg: &ChartConfig, labels: bool) {
    let mut paint = skia::Paint::default();
    paint.set_color(color(style.grid));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let text = label_paint(style);
    let font = label_font(cfg);
    for t in scale.ticks_top_down() {
        let y = vp.y_for(t, scale.axis_max);
        canvas.draw_line(pt(0.0, y), pt(vp.width, y), &paint);
        if labels {
            let s = format_tick(t);
            let (w, _) = font.measure_str(&s, Some(&text));
            canvas.draw_str(&s, (-6.0 - w, (y + cfg.font_size * 0.35) as f32), &font, &text);
        }
    }
}

fn draw_category(canvas: &skia::Canvas, x: f64, vp: Viewport, label: &str, style: &Style, cfg: &ChartConfig) {
    let text = label_paint(style);
    let font = label_font(cfg);
    let (w, _) = font.measure_str(label, Some(&text));
    canvas.draw_str(label, (x as f32 - w * 0.5, (vp.height + cfg.font_size + 6.0) as f32), &font, &text);
}

fn draw_bars(canvas: &skia::Canvas, layout: &BarLayout, style: &Style, cfg: &ChartConfig, labels: bool) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(color(style.bar));

    for (i, b) in layout.bars.iter().enumerate() {
        let rect = skia::Rect::from_xywh(b.x as f32, b.y as f32, b.width as f32, b.height as f32);
        canvas.draw_round_rect(rect, 2.0, 2.0, &body);
        if labels {
            draw_category(canvas, layout.label_x(i), layout.viewport, &b.label, style, cfg);
        }
    }
}

fn to_skia_path(commands: &[PathCommand]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => { path.move_to(pt(p.x, p.y)); }
            PathCommand::LineTo(p) => { path.line_to(pt(p.x, p.y)); }
            PathCommand::CubicTo { c1, c2, to } => {
                path.cubic_to(pt(c1.x, c1.y), pt(c2.x, c2.y), pt(to.x, to.y));
            }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}

fn draw_line(canvas: &skia::Canvas, layout: &LineLayout, style: &Style, cfg: &ChartConfig, labels: bool) {
    if !layout.fill.is_empty() {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color(style.fill));
        canvas.draw_path(&to_skia_path(&layout.fill), &fill);
    }

    if layout.line.len() > 1 {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_color(color(style.stroke));
        canvas.draw_path(&to_skia_path(&layout.line), &stroke);
    }

    if labels {
        for (p, label) in layout.points.iter().zip(&layout.labels) {
            draw_category(canvas, p.x, layout.viewport, label, style, cfg);
        }
    }
}

fn draw_average(canvas: &skia::Canvas, y: f64, vp: Viewport, style: &Style) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(color(style.average));
    paint.set_path_effect(skia::PathEffect::dash(&[4.0, 4.0], 0.0));
    canvas.draw_line(pt(0.0, y), pt(vp.width, y), &paint);
}
