/// Folder-driven image manifests for presentation sites
///
/// Image files dropped into named folders (`hero/`, `gallery/`, ...) are
/// discovered once, indexed into an immutable, deterministically sorted
/// manifest, and consumed by two controllers: a slideshow that auto-advances
/// and can be steered by hand, and a project gallery with a category filter
/// and a detail selection.
///
/// - [`assets`] - discovery, manifest building, folder queries
/// - [`slideshow`] - rotation state over one folder, driven by a [`slideshow::Clock`]
/// - [`gallery`] - project catalogue, positional pairing, filter and selection
/// - [`placeholder`] - fallback visuals for empty folders
/// - [`config`], [`error`], [`logging`] - configuration, error types, tracing setup

pub mod assets;
pub mod config;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod placeholder;
pub mod slideshow;

pub use assets::{FolderManifest, ImageRecord, Locator, SharedManifest};
pub use config::Config;
pub use error::{Error, Result};
pub use gallery::{GallerySelection, ProjectCatalogue, ProjectDescriptor};
pub use slideshow::{Slideshow, SlideshowPhase};
