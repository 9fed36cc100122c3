/// Static project catalogue
///
/// The list of showcased projects and the category buttons above the grid.
/// It is supplied per deployment and is independent of the image manifest:
/// projects are paired with gallery images purely by position.
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// One showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub title: String,
    /// Matched case-insensitively against the active category
    pub category: String,
    pub location: String,
    pub description: String,
}

/// A filter button: `id` is what gets passed to `set_category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCatalogue {
    pub categories: Vec<Category>,
    pub projects: Vec<ProjectDescriptor>,
}

/// On-disk shape; categories may be omitted
#[derive(Deserialize)]
struct CatalogueFile {
    #[serde(default)]
    categories: Vec<Category>,
    projects: Vec<ProjectDescriptor>,
}

impl ProjectCatalogue {
    /// Catalogue shipped with the site
    pub fn builtin() -> Self {
        let project = |title: &str, category: &str, location: &str, description: &str| {
            ProjectDescriptor {
                title: title.to_string(),
                category: category.to_string(),
                location: location.to_string(),
                description: description.to_string(),
            }
        };

        Self {
            categories: vec![
                Category::new("todas", "Todas"),
                Category::new("modernas", "Modernas"),
                Category::new("clásicas", "Clásicas"),
                Category::new("contemporáneas", "Contemporáneas"),
            ],
            projects: vec![
                project(
                    "Cocina Minimalista Premium",
                    "Modernas",
                    "Madrid, España",
                    "Diseño de cocina abierta con isla central, superficies de cuarzo y electrodomésticos integrados.",
                ),
                project(
                    "Cocina Clásica Artesanal",
                    "Clásicas",
                    "Sevilla, España",
                    "Cocina de estilo tradicional con carpintería de madera de nogal y acabados dorados.",
                ),
                project(
                    "Espacio Contemporáneo",
                    "Contemporáneas",
                    "Barcelona, España",
                    "Fusión de materiales: acero inoxidable, mármol negro y madera de olivo.",
                ),
                project(
                    "Cocina de Diseño Italiano",
                    "Modernas",
                    "Valencia, España",
                    "Diseños italianos minimalistas con líneas puras y tecnología de vanguardia.",
                ),
                project(
                    "Cocina Rústica de Lujo",
                    "Clásicas",
                    "Toledo, España",
                    "Combinación de piedra natural, madera recuperada y hierro forjado artesanal.",
                ),
                project(
                    "Cocina Integral Moderna",
                    "Contemporáneas",
                    "Málaga, España",
                    "Diseño continuo sin divisiones, perfecto para espacios abiertos y sociales.",
                ),
            ],
        }
    }

    /// Parse a catalogue from JSON.
    ///
    /// Without a `categories` list, one is derived: the wildcard first, then
    /// each distinct project category in first-seen order.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogueFile = serde_json::from_str(json)?;

        let categories = if file.categories.is_empty() {
            derive_categories(&file.projects)
        } else {
            file.categories
        };

        Ok(Self {
            categories,
            projects: file.projects,
        })
    }

    /// Read a catalogue JSON file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalogue = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            projects = catalogue.projects.len(),
            "loaded project catalogue"
        );
        Ok(catalogue)
    }
}

fn derive_categories(projects: &[ProjectDescriptor]) -> Vec<Category> {
    let mut categories = vec![Category::new("all", "All")];
    for project in projects {
        let id = project.category.to_lowercase();
        if !categories.iter().any(|c| c.id == id) {
            categories.push(Category::new(id, project.category.clone()));
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalogue() {
        let catalogue = ProjectCatalogue::builtin();

        assert_eq!(catalogue.projects.len(), 6);
        assert_eq!(catalogue.categories.len(), 4);
        assert_eq!(catalogue.categories[0].id, "todas");
    }

    #[test]
    fn test_json_with_categories() {
        let json = r#"{
            "categories": [{"id": "all", "label": "Everything"}],
            "projects": [
                {"title": "Loft", "category": "Modern", "location": "Lyon", "description": "Open plan"}
            ]
        }"#;

        let catalogue = ProjectCatalogue::from_json_str(json).unwrap();
        assert_eq!(catalogue.categories, vec![Category::new("all", "Everything")]);
        assert_eq!(catalogue.projects[0].title, "Loft");
    }

    #[test]
    fn test_json_derives_categories() {
        let json = r#"{"projects": [
            {"title": "A", "category": "Modernas", "location": "", "description": ""},
            {"title": "B", "category": "Clásicas", "location": "", "description": ""},
            {"title": "C", "category": "MODERNAS", "location": "", "description": ""}
        ]}"#;

        let catalogue = ProjectCatalogue::from_json_str(json).unwrap();
        let ids: Vec<&str> = catalogue.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["all", "modernas", "clásicas"]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(ProjectCatalogue::from_json_str("{\"projects\": 3}").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"projects": [{{"title": "T", "category": "X", "location": "L", "description": "D"}}]}}"#
        )
        .unwrap();

        let catalogue = ProjectCatalogue::load(file.path()).unwrap();
        assert_eq!(catalogue.projects.len(), 1);
        assert!(ProjectCatalogue::load(&file.path().with_extension("missing")).is_err());
    }
}
