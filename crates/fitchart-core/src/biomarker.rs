// File: crates/fitchart-core/src/biomarker.rs
// Summary: Normal-range parsing and marker placement for biomarker report cards.
// Notes:
// - Only the two-bound "<lower> - <upper>" form is understood. Single bounds
//   ("< 5.0", "> 40") and free text do not parse; the marker then sits at the
//   midpoint of the track.

use std::str::FromStr;

use crate::geometry::clamp;

/// Marker position used when the range text cannot be interpreted.
pub const DEFAULT_POSITION: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalRange {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeStatus {
    Low,
    Normal,
    High,
    Unknown,
}

impl NormalRange {
    /// Parse `"<lower> - <upper>"`. Whitespace around the dash is optional;
    /// both bounds must be finite and `lower < upper`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        // Skip a leading sign so "-1 - 3" splits on the separator, not the sign.
        let start = usize::from(text.starts_with('-'));
        let dash = text[start..].find('-')? + start;
        let lower = f64::from_str(text[..dash].trim()).ok()?;
        let upper = f64::from_str(text[dash + 1..].trim()).ok()?;
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return None;
        }
        Some(Self { lower, upper })
    }

    /// Percentage along the range, clamped to `[0, 100]`.
    pub fn position(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return DEFAULT_POSITION;
        }
        clamp((value - self.lower) / (self.upper - self.lower) * 100.0, 0.0, 100.0)
    }

    pub fn classify(&self, value: f64) -> RangeStatus {
        if !value.is_finite() {
            RangeStatus::Unknown
        } else if value < self.lower {
            RangeStatus::Low
        } else if value > self.upper {
            RangeStatus::High
        } else {
            RangeStatus::Normal
        }
    }
}

/// Marker position for `value` against a textual range, midpoint on failure.
pub fn marker_position(value: f64, range_text: &str) -> f64 {
    NormalRange::parse(range_text).map_or(DEFAULT_POSITION, |r| r.position(value))
}

pub fn classify(value: f64, range_text: &str) -> RangeStatus {
    NormalRange::parse(range_text).map_or(RangeStatus::Unknown, |r| r.classify(value))
}
