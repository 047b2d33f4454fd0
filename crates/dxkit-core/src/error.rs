use std::path::PathBuf;

use thiserror::Error;

/// Result type for dxkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core layer
#[derive(Debug, Error)]
pub enum Error {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment could not be resolved (no home directory, bad port, ...)
    #[error("Config error: {0}")]
    Config(String),

    /// Config file exists but does not parse
    #[error("Config file error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// A directory was expected but a regular file occupies the path
    #[error(
        "Path {} already exists, and it is a file, not a directory",
        .0.display()
    )]
    NotADirectory(PathBuf),
}
