// File: crates/fitchart-core/src/error.rs
// Summary: Error type for the fallible edges (config, input parsing, strict validation).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid chart config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid chart input: {0}")]
    Input(#[from] serde_json::Error),
    #[error("{labels} labels for {data} data points")]
    LabelMismatch { labels: usize, data: usize },
    #[error("unknown chart kind '{0}'")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
