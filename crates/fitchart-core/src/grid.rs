// File: crates/fitchart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Number of horizontal grid lines (and tick labels) on every chart.
pub const TICK_COUNT: usize = 5;

/// Evenly spaced values from `start` to `end` inclusive. Both ends are
/// pinned so callers can compare them exactly, even for an infinite span.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps)
        .map(|i| match i {
            0 => start,
            _ if i + 1 == steps => end,
            _ => start + step * i as f64,
        })
        .collect()
}

/// Five ticks spanning `[0, axis_max]` at 0/25/50/75/100 %.
pub fn ticks(axis_max: f64) -> [f64; TICK_COUNT] {
    let mut out = [0.0; TICK_COUNT];
    for (slot, v) in out.iter_mut().zip(linspace(0.0, axis_max, TICK_COUNT)) {
        *slot = v;
    }
    out
}
