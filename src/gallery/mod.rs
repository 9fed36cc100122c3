/// Category-filterable project gallery
///
/// - `catalogue.rs` - static project list and category buttons
/// - `selection.rs` - active filter, detail selection, positional pairing

pub mod catalogue;
pub mod selection;

pub use catalogue::{Category, ProjectCatalogue, ProjectDescriptor};
pub use selection::{
    pair_projects, Categorized, CategoryFilter, GalleryEntry, GallerySelection, SelectedProject,
};
