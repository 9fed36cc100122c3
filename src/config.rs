/// Viewer configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/galeria/config.json
/// - macOS: ~/Library/Application Support/galeria/config.json
/// - Windows: %APPDATA%\galeria\config.json
///
/// Every field is optional in the file. `GALERIA_ROOT` and a positional
/// command-line argument override the asset root, in that order.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::assets::folders;
use crate::error::{Error, Result};
use crate::gallery::ProjectCatalogue;

/// Environment variable overriding `gallery_root`
pub const ROOT_ENV_VAR: &str = "GALERIA_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder containing `hero/`, `gallery/`, ... sub-folders
    pub gallery_root: PathBuf,
    /// Hero slideshow auto-advance interval
    pub slideshow_interval_ms: u64,
    pub hero_folder: String,
    pub gallery_folder: String,
    /// Project catalogue JSON; the built-in catalogue is used when unset
    pub catalogue_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gallery_root: PathBuf::from("galeria"),
            slideshow_interval_ms: 5_000,
            hero_folder: folders::HERO.to_string(),
            gallery_folder: folders::GALLERY.to_string(),
            catalogue_path: None,
        }
    }
}

impl Config {
    /// Where the config file is expected to live
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("galeria").join("config.json"))
    }

    /// Load from the default location, falling back to defaults if there is
    /// no file, then apply the `GALERIA_ROOT` override.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => {
                tracing::debug!("no config file found, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(std::env::var(ROOT_ENV_VAR).ok(), None);
        Ok(config)
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&json)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply root overrides: environment first, then command line
    pub fn apply_overrides(&mut self, env_root: Option<String>, cli_root: Option<PathBuf>) {
        if let Some(root) = env_root.filter(|r| !r.is_empty()) {
            self.gallery_root = PathBuf::from(root);
        }
        if let Some(root) = cli_root {
            self.gallery_root = root;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.slideshow_interval_ms == 0 {
            return Err(Error::Config("slideshow_interval_ms must be positive".into()));
        }
        if self.hero_folder.is_empty() || self.gallery_folder.is_empty() {
            return Err(Error::Config("folder names must not be empty".into()));
        }
        Ok(())
    }

    pub fn slideshow_interval(&self) -> Duration {
        Duration::from_millis(self.slideshow_interval_ms)
    }

    /// The configured project catalogue, or the built-in one
    pub fn catalogue(&self) -> Result<ProjectCatalogue> {
        match &self.catalogue_path {
            Some(path) => ProjectCatalogue::load(path),
            None => Ok(ProjectCatalogue::builtin()),
        }
    }
}
