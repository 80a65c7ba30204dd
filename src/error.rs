use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("unknown mask kind: {0}")]
    UnknownKind(String),

    #[error("mask kind `custom` requires a pattern")]
    MissingCustomPattern,

    #[error("invalid regex for sentinel `{sentinel}`: {source}")]
    InvalidSentinel {
        sentinel: char,
        #[source]
        source: regex::Error,
    },

    #[error("sentinel key must be a single character, got {0:?}")]
    InvalidSentinelKey(String),

    #[error("no pattern named `{0}` in config")]
    UnknownPattern(String),

    #[error("unsupported config file: {}", .0.display())]
    UnsupportedConfig(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid yaml config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid json config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MaskResult<T> = Result<T, MaskError>;
