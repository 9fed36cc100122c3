/// Shared data structures for the asset manifest
///
/// These structs represent the records that flow from folder discovery,
/// through the manifest, into the slideshow and gallery controllers.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Opaque reference to image bytes.
///
/// The core never opens or interprets a locator; only the presentation
/// layer resolves it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Locator {
    /// Image on the local filesystem
    File(PathBuf),
    /// Image served from somewhere else (bundler URL, CDN, ...)
    Url(String),
}

impl Locator {
    /// Filesystem path, if this locator points at a local file
    pub fn as_path(&self) -> Option<&std::path::Path> {
        match self {
            Locator::File(path) => Some(path),
            Locator::Url(_) => None,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::File(path) => write!(f, "{}", path.display()),
            Locator::Url(url) => f.write_str(url),
        }
    }
}

impl From<PathBuf> for Locator {
    fn from(path: PathBuf) -> Self {
        Locator::File(path)
    }
}

/// One `(relative path, locator)` pair yielded by folder discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path relative to the scanned root, e.g. "gallery/cocina-01.jpg"
    pub relative_path: String,
    /// Where the presentation layer can find the bytes
    pub locator: Locator,
}

impl DiscoveredFile {
    pub fn new(relative_path: impl Into<String>, locator: impl Into<Locator>) -> Self {
        Self {
            relative_path: relative_path.into(),
            locator: locator.into(),
        }
    }
}

/// Represents a single image in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// File name without extension (e.g. "cocina-01"), the sort key
    pub identifier: String,
    /// Where the bytes live
    pub source: Locator,
    /// Folder the image was dropped into (e.g. "hero", "gallery")
    pub folder: String,
    /// Normalized relative path it was discovered under
    pub path: String,
}
