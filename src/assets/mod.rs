/// Image asset indexing
///
/// This module handles:
/// - Discovering image files under a root folder (discovery.rs)
/// - Building the sorted per-folder manifest (manifest.rs)
/// - Read-only folder queries over the manifest (accessor.rs)
/// - Swapping in a rebuilt manifest on rescan (shared.rs)

pub mod accessor;
pub mod data;
pub mod discovery;
pub mod manifest;
pub mod shared;

pub use data::{DiscoveredFile, ImageRecord, Locator};
pub use discovery::{discover, discover_async, scan_manifest};
pub use manifest::{is_image_extension, FolderManifest, IMAGE_EXTENSIONS};
pub use shared::SharedManifest;

/// Folder names the site uses, one per presentation role
pub mod folders {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "about";
    pub const SERVICES: &str = "services";
    pub const GALLERY: &str = "gallery";
    pub const TESTIMONIALS: &str = "testimonials";
}
