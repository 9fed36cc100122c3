/// Folder manifest construction
///
/// Turns an unordered collection of discovered files into an immutable,
/// per-folder, sorted index of image records. The build is a pure function
/// of the file names: enumeration order, timestamps and sizes never matter.
use serde::Serialize;
use std::collections::BTreeMap;

use super::data::{DiscoveredFile, ImageRecord};

/// Extensions recognized as images (matched ASCII case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "svg", "gif"];

/// Immutable mapping from folder name to its sorted image records.
///
/// Folders without any recognized image are absent rather than empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderManifest {
    pub(crate) folders: BTreeMap<String, Vec<ImageRecord>>,
}

impl FolderManifest {
    /// An empty manifest (no folders at all)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a manifest from discovered `(path, locator)` pairs.
    ///
    /// Entries without a folder segment, without a file stem, or without a
    /// recognized image extension are dropped silently.
    pub fn build<I>(files: I) -> Self
    where
        I: IntoIterator<Item = DiscoveredFile>,
    {
        let mut folders: BTreeMap<String, Vec<ImageRecord>> = BTreeMap::new();
        let mut dropped = 0usize;

        for file in files {
            match parse_entry(&file.relative_path) {
                Some(parsed) => {
                    folders.entry(parsed.folder).or_default().push(ImageRecord {
                        identifier: parsed.identifier,
                        source: file.locator,
                        folder: String::new(),
                        path: parsed.normalized,
                    });
                }
                None => {
                    tracing::trace!(path = %file.relative_path, "skipping non-image entry");
                    dropped += 1;
                }
            }
        }

        for (folder, records) in folders.iter_mut() {
            for record in records.iter_mut() {
                record.folder.clone_from(folder);
            }
            records.sort_by(|a, b| {
                a.identifier
                    .cmp(&b.identifier)
                    .then_with(|| a.path.cmp(&b.path))
                    .then_with(|| a.source.cmp(&b.source))
            });
        }

        tracing::debug!(
            folders = folders.len(),
            images = folders.values().map(Vec::len).sum::<usize>(),
            dropped,
            "built folder manifest"
        );

        Self { folders }
    }

    /// Serialize the manifest as pretty JSON (for inspection/debugging)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Pieces extracted from a relative path
#[derive(Debug, PartialEq, Eq)]
struct ParsedEntry {
    folder: String,
    identifier: String,
    normalized: String,
}

/// Split `<folder>/[sub/...]<file>.<ext>` into its parts.
///
/// Accepts both `/` and `\` as separators; `.` and empty segments are ignored.
fn parse_entry(relative_path: &str) -> Option<ParsedEntry> {
    let segments: Vec<&str> = relative_path
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    // Need at least a folder and a file name
    if segments.len() < 2 {
        return None;
    }

    let file_name = segments[segments.len() - 1];
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || !is_image_extension(extension) {
        return None;
    }

    Some(ParsedEntry {
        folder: segments[0].to_string(),
        identifier: stem.to_string(),
        normalized: segments.join("/"),
    })
}

/// Check whether an extension (without the dot) names a supported image type
pub fn is_image_extension(extension: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(extension))
}
