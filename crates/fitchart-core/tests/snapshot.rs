// File: crates/fitchart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - Renders deterministic bar and line charts to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else compares text for exact match; a missing snapshot fails.
// - Inputs are chosen so every coordinate is exact in binary floating point.

use fitchart_core::{render_svg, Accent, ChartConfig, ChartInput, ChartKind, Layout};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, svg: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, format!("{svg}\n")).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), svg.len());
        return;
    }
    let want = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing snapshot {} ({e}); set UPDATE_SNAPSHOTS=1 to bless", path.display()));
    assert_eq!(svg, want.trim_end(), "SVG differs from golden snapshot: {}", path.display());
}

fn days(n: usize) -> Vec<String> {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"][..n].iter().map(|s| s.to_string()).collect()
}

fn render(kind: ChartKind, input: &ChartInput, cfg: &ChartConfig) -> String {
    let layout = Layout::compute(kind, input, cfg.viewport(), cfg.bar_ratio);
    render_svg(&layout, &cfg.style(), cfg)
}

#[test]
fn golden_steps_bar_chart() {
    let input = ChartInput::new(vec![6000.0, 12000.0, 3000.0, 9000.0], days(4))
        .with_average(7500.0)
        .with_unit("steps");
    let cfg = ChartConfig { accent: Accent::Lime, bar_ratio: 0.5, ..ChartConfig::default() };
    let svg = render(ChartKind::Bar, &input, &cfg);
    assert!(svg.contains(">12k</text>"));
    write_or_compare("steps_bar.svg", &svg);
}

#[test]
fn golden_sleep_line_chart() {
    let input = ChartInput::new(vec![4.0, 6.0, 2.0, 8.0, 5.0], days(5))
        .with_average(3.0)
        .with_unit("h");
    let cfg = ChartConfig { accent: Accent::Purple, ..ChartConfig::default() };
    let svg = render(ChartKind::Line, &input, &cfg);
    assert!(svg.contains("#a855f7"));
    write_or_compare("sleep_line.svg", &svg);
}
