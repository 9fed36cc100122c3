/// Read-only query surface over a [`FolderManifest`]
///
/// Every consumer (slideshow, gallery, viewer) goes through these methods.
/// None of them can fail: a missing folder reads as an empty one.
use super::data::{ImageRecord, Locator};
use super::manifest::FolderManifest;

impl FolderManifest {
    /// All images in a folder, in manifest order (empty if the folder is absent)
    pub fn list_images(&self, folder: &str) -> &[ImageRecord] {
        self.folders.get(folder).map(Vec::as_slice).unwrap_or(&[])
    }

    /// One image by position, or `None` if the index is out of range
    pub fn image_at(&self, folder: &str, index: usize) -> Option<&ImageRecord> {
        self.list_images(folder).get(index)
    }

    /// Just the locator of one image by position
    pub fn source_at(&self, folder: &str, index: usize) -> Option<&Locator> {
        self.image_at(folder, index).map(|record| &record.source)
    }

    /// Number of images in a folder
    pub fn count(&self, folder: &str) -> usize {
        self.list_images(folder).len()
    }

    /// Whether the folder has at least one image
    pub fn has_any(&self, folder: &str) -> bool {
        self.count(folder) > 0
    }

    /// Names of all non-empty folders, sorted
    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }

    /// Total number of images across all folders
    pub fn total_images(&self) -> usize {
        self.folders.values().map(Vec::len).sum()
    }
}
