// File: crates/fitchart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for the virtual chart coordinate space.

use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plot area size in virtual units; the origin is top-left, y grows down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// X position of sample `i` out of `n`; a single sample sits at 0.
    #[inline]
    pub fn x_at(&self, i: usize, n: usize) -> f64 {
        let denom = if n > 1 { (n - 1) as f64 } else { 1.0 };
        i as f64 / denom * self.width
    }

    /// Y position of `value` on an axis topping out at `axis_max`.
    #[inline]
    pub fn y_for(&self, value: f64, axis_max: f64) -> f64 {
        self.height - (value / axis_max) * self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Map every sample of `series` into `viewport` against `axis_max`.
pub fn map_series(series: &[f64], axis_max: f64, viewport: &Viewport) -> Vec<Point> {
    let n = series.len();
    series
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(viewport.x_at(i, n), viewport.y_for(v, axis_max)))
        .collect()
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
