/// Folder discovery
///
/// Walks an asset root once and reports every regular file as a
/// `(relative path, locator)` pair. Filtering by extension and folder is the
/// manifest builder's job, so this stays a dumb snapshot of the tree.
use std::path::{Path, PathBuf};
use tokio::task;
use walkdir::WalkDir;

use super::data::{DiscoveredFile, Locator};
use super::manifest::FolderManifest;
use crate::error::{Error, Result};

/// Walk `root` recursively and collect every file below it.
///
/// Unreadable entries are skipped; a missing or non-directory root is an error.
pub fn discover(root: &Path) -> Result<Vec<DiscoveredFile>> {
    if !root.is_dir() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }

    tracing::info!(root = %root.display(), "scanning asset folders");

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself being unreadable is fatal; anything below is noise
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        files.push(DiscoveredFile {
            relative_path: to_slash_path(relative),
            locator: Locator::File(path.to_path_buf()),
        });
    }

    tracing::debug!(files = files.len(), "scan finished");
    Ok(files)
}

/// Discover and build in one step (blocking)
pub fn scan_manifest(root: &Path) -> Result<FolderManifest> {
    Ok(FolderManifest::build(discover(root)?))
}

/// Scan a root on a blocking worker so the UI thread never walks the disk.
///
/// Errors are flattened to strings so the result can travel inside UI messages.
pub async fn discover_async(root: PathBuf) -> std::result::Result<FolderManifest, String> {
    task::spawn_blocking(move || scan_manifest(&root))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map_err(|e| e.to_string())
}

/// Join path components with `/` regardless of platform
fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
