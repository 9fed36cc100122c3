/// Error types for the file-touching edges of the crate
///
/// Building the manifest and driving the controllers never fails; only
/// scanning a root, reading configuration and loading a project catalogue can.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Asset root does not exist or is not a directory
    #[error("asset root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Reading a file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Config or catalogue JSON is malformed
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is well-formed but unusable
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
