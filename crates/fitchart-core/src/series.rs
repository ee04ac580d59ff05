// File: crates/fitchart-core/src/series.rs
// Summary: Chart input model: samples, index-aligned labels, optional reference overlay.
// Notes:
// - Labels and data are not required to match in length. Pairing truncates to
//   the shorter side, so surplus samples or labels are silently not drawn.
//   `validate` is there for callers that want the mismatch as an error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, Result};

/// What the surrounding application hands to a chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// Samples in period order.
    pub data: Vec<f64>,
    /// Category names, index-aligned with `data`. Required in JSON.
    pub labels: Vec<String>,
    /// Reference overlay drawn as a dashed line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    /// Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ChartInput {
    pub fn new(data: Vec<f64>, labels: Vec<String>) -> Self {
        Self { data, labels, average: None, unit: None }
    }

    pub fn with_average(mut self, average: f64) -> Self {
        self.average = Some(average);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Strict check that every sample has exactly one label.
    pub fn validate(&self) -> Result<()> {
        if self.labels.len() != self.data.len() {
            return Err(ChartError::LabelMismatch { labels: self.labels.len(), data: self.data.len() });
        }
        Ok(())
    }

    /// Number of drawable (label, sample) pairs.
    pub fn len(&self) -> usize {
        self.data.len().min(self.labels.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples that have a label; logs when either side has extras.
    pub fn paired(&self) -> (&[f64], &[String]) {
        if self.labels.len() != self.data.len() {
            warn!(labels = self.labels.len(), data = self.data.len(), "label/data length mismatch; truncating");
        }
        let n = self.len();
        (&self.data[..n], &self.labels[..n])
    }
}
