// File: crates/fitchart-core/src/theme.rs
// Summary: Accent style table; each named accent resolves to concrete chart colors.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// `#rrggbb`; alpha is emitted separately as an opacity attribute.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

/// Closed set of accent names the dashboard uses for its charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Lime,
    Blue,
    Orange,
    Purple,
    Rose,
    Teal,
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Lime,
        Accent::Blue,
        Accent::Orange,
        Accent::Purple,
        Accent::Rose,
        Accent::Teal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Accent::Lime => "lime",
            Accent::Blue => "blue",
            Accent::Orange => "orange",
            Accent::Purple => "purple",
            Accent::Rose => "rose",
            Accent::Teal => "teal",
        }
    }

    fn base(&self) -> Rgba {
        match self {
            Accent::Lime => Rgba::from_rgb(0x84, 0xcc, 0x16),
            Accent::Blue => Rgba::from_rgb(0x3b, 0x82, 0xf6),
            Accent::Orange => Rgba::from_rgb(0xf9, 0x73, 0x16),
            Accent::Purple => Rgba::from_rgb(0xa8, 0x55, 0xf7),
            Accent::Rose => Rgba::from_rgb(0xf4, 0x3f, 0x5e),
            Accent::Teal => Rgba::from_rgb(0x14, 0xb8, 0xa6),
        }
    }

    pub fn style(&self) -> Style {
        let base = self.base();
        Style {
            accent: *self,
            stroke: base,
            fill: base.with_alpha(64),
            bar: base,
            grid: Rgba::from_rgb(0x27, 0x27, 0x2a),
            label: Rgba::from_rgb(0xa1, 0xa1, 0xaa),
            average: Rgba::from_rgb(0xfa, 0xfa, 0xfa).with_alpha(153),
            background: Rgba::from_rgb(0x09, 0x09, 0x0b),
        }
    }
}

/// Concrete colors for one chart, resolved once from an [`Accent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub accent: Accent,
    pub stroke: Rgba,
    /// Area under a line; translucent.
    pub fill: Rgba,
    pub bar: Rgba,
    pub grid: Rgba,
    pub label: Rgba,
    /// Dashed reference line.
    pub average: Rgba,
    pub background: Rgba,
}

impl Default for Style {
    fn default() -> Self {
        Accent::default().style()
    }
}

/// Return the style of every built-in accent.
pub fn presets() -> Vec<Style> {
    Accent::ALL.iter().map(Accent::style).collect()
}

/// Find a style by accent `name`, falling back to the default accent.
pub fn find(name: &str) -> Style {
    for a in Accent::ALL { if a.name().eq_ignore_ascii_case(name.trim()) { return a.style(); } }
    Style::default()
}
