use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`ScrollConfig`](crate::ScrollConfig).
///
/// Per-frame scrolling never fails; only configuration does.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scroll config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scroll config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize scroll config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
