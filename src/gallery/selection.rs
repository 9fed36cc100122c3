/// Category filter and detail selection for the project gallery
use crate::assets::{FolderManifest, ImageRecord};

use super::catalogue::ProjectDescriptor;

/// Category names that mean "show everything" (compared case-insensitively)
pub const WILDCARD_IDS: [&str; 2] = ["all", "todas"];

/// Anything the gallery can filter by category
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for ProjectDescriptor {
    fn category(&self) -> &str {
        &self.category
    }
}

/// The active filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Interpret a category id; wildcard ids become `All`
    pub fn parse(name: &str) -> Self {
        if WILDCARD_IDS.iter().any(|w| w.eq_ignore_ascii_case(name)) {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name.to_lowercase() == category.to_lowercase(),
        }
    }
}

/// One project paired positionally with a gallery image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryEntry<'a> {
    /// Position in the catalogue (and in the gallery folder)
    pub index: usize,
    pub project: &'a ProjectDescriptor,
    /// `None` when the gallery folder has fewer images than projects
    pub image: Option<&'a ImageRecord>,
}

impl Categorized for GalleryEntry<'_> {
    fn category(&self) -> &str {
        &self.project.category
    }
}

/// Pair `projects[i]` with the i-th image of `folder`.
///
/// Extra projects get no image; extra images are left out.
pub fn pair_projects<'a>(
    projects: &'a [ProjectDescriptor],
    manifest: &'a FolderManifest,
    folder: &str,
) -> Vec<GalleryEntry<'a>> {
    let images = manifest.count(folder);
    if images != projects.len() {
        tracing::debug!(
            folder,
            projects = projects.len(),
            images,
            "project and image counts differ"
        );
    }

    projects
        .iter()
        .enumerate()
        .map(|(index, project)| GalleryEntry {
            index,
            project,
            image: manifest.image_at(folder, index),
        })
        .collect()
}

/// The project opened in the detail overlay
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedProject {
    pub index: usize,
    pub project: ProjectDescriptor,
    pub image: Option<ImageRecord>,
}

/// Filter and selection state for one mounted gallery
#[derive(Debug, Clone, Default)]
pub struct GallerySelection {
    active: CategoryFilter,
    selected: Option<SelectedProject>,
}

impl GallerySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active category.
    ///
    /// Unknown names are not rejected; they simply match nothing. The
    /// current selection is left alone.
    pub fn set_category(&mut self, name: &str) {
        self.active = CategoryFilter::parse(name);
        tracing::debug!(category = name, "gallery filter changed");
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active
    }

    /// Whether the button with this id is the active one
    pub fn is_active(&self, id: &str) -> bool {
        match (&self.active, CategoryFilter::parse(id)) {
            (CategoryFilter::All, CategoryFilter::All) => true,
            (CategoryFilter::Named(active), CategoryFilter::Named(other)) => {
                active.to_lowercase() == other.to_lowercase()
            }
            _ => false,
        }
    }

    /// Items matching the active category, in their original order
    pub fn visible<'a, T: Categorized>(&self, all: &'a [T]) -> Vec<&'a T> {
        all.iter()
            .filter(|item| self.active.matches(item.category()))
            .collect()
    }

    pub fn visible_projects<'a>(&self, all: &'a [ProjectDescriptor]) -> Vec<&'a ProjectDescriptor> {
        self.visible(all)
    }

    /// Open the detail view for an entry (visible or not)
    pub fn select(&mut self, entry: &GalleryEntry<'_>) {
        self.selected = Some(SelectedProject {
            index: entry.index,
            project: entry.project.clone(),
            image: entry.image.cloned(),
        });
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SelectedProject> {
        self.selected.as_ref()
    }
}
