// File: crates/fitchart-core/src/types.rs
// Summary: Shared types and constants (virtual sizes, paddings).

/// Default virtual plot width.
pub const WIDTH: f64 = 400.0;
/// Default virtual plot height.
pub const HEIGHT: f64 = 192.0;

/// Margins around the plot area in an SVG or raster document, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for tick labels on the left and category labels underneath.
    fn default() -> Self {
        Self::new(48, 12, 12, 28)
    }
}
