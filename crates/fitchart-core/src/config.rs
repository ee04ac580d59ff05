// File: crates/fitchart-core/src/config.rs
// Summary: Chart settings loaded from TOML; every field has a default.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::geometry::Viewport;
use crate::theme::{Accent, Style};
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Plot area width in virtual units.
    pub width: f64,
    /// Plot area height in virtual units.
    pub height: f64,
    pub accent: Accent,
    /// Share of each bar slot covered by the bar, in `(0, 1]`.
    pub bar_ratio: f64,
    pub show_average: bool,
    pub font_size: f64,
    pub insets: InsetsConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InsetsConfig {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for InsetsConfig {
    fn default() -> Self {
        let i = Insets::default();
        Self { left: i.left, right: i.right, top: i.top, bottom: i.bottom }
    }
}

impl From<InsetsConfig> for Insets {
    fn from(c: InsetsConfig) -> Self {
        Insets::new(c.left, c.right, c.top, c.bottom)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            accent: Accent::default(),
            bar_ratio: 0.6,
            show_average: true,
            font_size: 10.0,
            insets: InsetsConfig::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str::<Self>(text)?.sanitized())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml(&text)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn insets(&self) -> Insets {
        self.insets.into()
    }

    pub fn style(&self) -> Style {
        self.accent.style()
    }

    /// Replace non-positive sizes with defaults and keep `bar_ratio` in range.
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        if !(self.width > 0.0) { self.width = d.width; }
        if !(self.height > 0.0) { self.height = d.height; }
        if !(self.font_size > 0.0) { self.font_size = d.font_size; }
        self.bar_ratio = if self.bar_ratio > 0.0 { self.bar_ratio.min(1.0) } else { d.bar_ratio };
        self
    }
}
