/// Rebuild-and-swap holder for the current manifest
///
/// Consumers clone the `Arc` they were handed and keep reading it; a rescan
/// builds a fresh manifest and swaps it in without touching existing readers.
use parking_lot::RwLock;
use std::sync::Arc;

use super::manifest::FolderManifest;

#[derive(Debug, Default)]
pub struct SharedManifest {
    current: RwLock<Arc<FolderManifest>>,
}

impl SharedManifest {
    pub fn new(manifest: FolderManifest) -> Self {
        Self {
            current: RwLock::new(Arc::new(manifest)),
        }
    }

    /// Snapshot of the manifest in effect right now
    pub fn current(&self) -> Arc<FolderManifest> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a freshly built manifest, returning the previous one
    pub fn replace(&self, manifest: FolderManifest) -> Arc<FolderManifest> {
        let next = Arc::new(manifest);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        tracing::info!(
            folders = self.current.read().folders().count(),
            "swapped in rebuilt manifest"
        );
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::data::DiscoveredFile;
    use std::path::PathBuf;

    #[test]
    fn test_readers_keep_their_snapshot() {
        let shared = SharedManifest::new(FolderManifest::build(vec![DiscoveredFile::new(
            "hero/a.png",
            PathBuf::from("a.png"),
        )]));
        let before = shared.current();

        let previous = shared.replace(FolderManifest::empty());

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.count("hero"), 1);
        assert_eq!(shared.current().count("hero"), 0);
    }
}
