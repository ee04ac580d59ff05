// File: crates/fitchart-core/src/lib.rs
// Summary: Core library entry point; exports axis scaling, path generation, layouts and SVG output.

pub mod axis;
pub mod biomarker;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod normalize;
pub mod path;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::AxisScale;
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use geometry::{Point, Viewport};
pub use layout::{Bar, BarLayout, Layout, LineLayout};
pub use path::{fill_path, line_path, PathCommand};
pub use scale::{ChartKind, HourPolicy, ScalePolicy, StepCountPolicy};
pub use series::ChartInput;
pub use svg::{render_bar_svg, render_line_svg, render_svg};
pub use theme::{Accent, Rgba, Style};
