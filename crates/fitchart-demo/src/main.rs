// File: crates/fitchart-demo/src/main.rs
// Summary: Demo loads a chart input (JSON, label/value CSV, or dated sample CSV) and writes SVG + PNG.
//
// Usage: fitchart-demo <input> [bar|line] [config.toml]

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fitchart_core::normalize::{self, MetricUnit, Sample};
use fitchart_core::{render_svg, ChartConfig, ChartInput, ChartKind, Layout};
use fitchart_render_skia::SkiaRenderer;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args
        .next()
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/weekly_steps.json").to_string());
    let kind = match args.next() {
        Some(k) => k.parse::<ChartKind>().context("expected bar or line")?,
        None => ChartKind::Bar,
    };
    let cfg = match args.next() {
        Some(p) => ChartConfig::load(&p).with_context(|| format!("failed to load config '{p}'"))?,
        None => ChartConfig::default(),
    };

    let path = Path::new(&raw);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    info!(input = %path.display(), ?kind, "loading chart input");

    let input = load_input(path, kind)
        .with_context(|| format!("failed to load input '{}'", path.display()))?;
    if let Err(e) = input.validate() {
        warn!("{e}; extra entries will not be drawn");
    }
    info!(points = input.len(), average = ?input.average, "loaded");

    let layout = Layout::compute(kind, &input, cfg.viewport(), cfg.bar_ratio);
    let scale = layout.scale();
    info!(raw_max = scale.raw_max, axis_max = scale.axis_max, ticks = ?scale.ticks, "axis");

    let style = cfg.style();
    let out_png = out_name_with(path, kind);
    let out_svg = out_png.with_extension("svg");
    std::fs::write(&out_svg, render_svg(&layout, &style, &cfg))
        .with_context(|| format!("writing {}", out_svg.display()))?;
    info!("Wrote {}", out_svg.display());

    SkiaRenderer::default().render_to_png(&layout, &style, &cfg, &out_png)?;
    info!("Wrote {}", out_png.display());

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<kind>.png
fn out_name_with(input: &Path, kind: ChartKind) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let suffix = match kind {
        ChartKind::Bar => "bar",
        ChartKind::Line => "line",
    };
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}_{}.png", stem, suffix));
    out
}

fn load_input(path: &Path, kind: ChartKind) -> Result<ChartInput> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)?;
            Ok(ChartInput::from_json(&text)?)
        }
        "csv" => load_csv(path, kind),
        other => anyhow::bail!("unsupported input extension '{other}' (expected json or csv)"),
    }
}

/// Two CSV shapes are accepted:
/// - `label,value[,average]` rows, drawn as-is;
/// - `date,value,unit` rows, normalized into a weekday series.
fn load_csv(path: &Path, kind: ChartKind) -> Result<ChartInput> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);

    let i_value = idx("value").context("missing 'value' column")?;

    if let Some(i_date) = idx("date") {
        let i_unit = idx("unit").context("dated samples need a 'unit' column")?;
        let mut samples = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let date = rec.get(i_date).and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());
            let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
            let unit = rec.get(i_unit).and_then(|s| parse_unit(s.trim()));
            match (date, value, unit) {
                (Some(d), Some(v), Some(u)) => samples.push(Sample::new(d, v, u)),
                _ => warn!(line = ?rec.position().map(|p| p.line()), "skipping malformed sample row"),
            }
        }
        return Ok(normalize::weekly_series(&samples, kind));
    }

    let i_label = idx("label").context("missing 'label' column")?;
    let i_average = idx("average");
    let mut input = ChartInput::default();
    for rec in rdr.records() {
        let rec = rec?;
        let Some(value) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) else {
            warn!(line = ?rec.position().map(|p| p.line()), "skipping row without numeric value");
            continue;
        };
        input.data.push(value);
        input.labels.push(rec.get(i_label).unwrap_or_default().trim().to_string());
        if input.average.is_none() {
            input.average = i_average.and_then(|i| rec.get(i)).and_then(|s| s.trim().parse::<f64>().ok());
        }
    }
    Ok(input)
}

fn parse_unit(s: &str) -> Option<MetricUnit> {
    match s.to_lowercase().as_str() {
        "steps" | "count" => Some(MetricUnit::Steps),
        "s" | "sec" | "seconds" => Some(MetricUnit::Seconds),
        "m" | "min" | "minutes" => Some(MetricUnit::Minutes),
        "h" | "hr" | "hours" => Some(MetricUnit::Hours),
        _ => None,
    }
}
