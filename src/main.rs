use iced::time::{self, Instant};
use iced::widget::{button, column, horizontal_space, row, scrollable, stack, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use std::time::Duration;

use galeria::assets::{discover_async, scan_manifest, FolderManifest, SharedManifest};
use galeria::config::{Config, ROOT_ENV_VAR};
use galeria::gallery::{pair_projects, GallerySelection, ProjectCatalogue};
use galeria::placeholder::PlaceholderPalette;
use galeria::slideshow::Slideshow;

mod ui;

/// How often the slideshow deadline is polled while it is running
const TICK_RESOLUTION: Duration = Duration::from_millis(100);

/// Main application state
struct Galeria {
    config: Config,
    /// Current asset manifest, swapped on rescan
    manifest: SharedManifest,
    catalogue: ProjectCatalogue,
    /// Hero slideshow over a snapshot of the hero folder
    hero: Slideshow,
    selection: GallerySelection,
    palette: PlaceholderPalette,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Slideshow poll from the time subscription
    Tick(Instant),
    NextSlide,
    PreviousSlide,
    JumpTo(usize),
    SelectCategory(String),
    /// Open the detail overlay for the project at this catalogue position
    OpenProject(usize),
    CloseProject,
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// Background scan completed
    ManifestLoaded(Result<FolderManifest, String>),
}

impl Galeria {
    fn new(config: Config) -> (Self, Task<Message>) {
        let catalogue = config.catalogue().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load project catalogue, using built-in");
            ProjectCatalogue::builtin()
        });

        let hero = Slideshow::with_system_clock(Vec::new(), config.slideshow_interval());
        let root = config.gallery_root.clone();
        let status = format!("Scanning {}...", root.display());

        (
            Galeria {
                config,
                manifest: SharedManifest::new(FolderManifest::empty()),
                catalogue,
                hero,
                selection: GallerySelection::new(),
                palette: PlaceholderPalette::default(),
                status,
            },
            Task::perform(discover_async(root), Message::ManifestLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(_) => {
                self.hero.tick();
            }
            Message::NextSlide => self.hero.next(),
            Message::PreviousSlide => self.hero.previous(),
            Message::JumpTo(index) => self.hero.jump_to(index),
            Message::SelectCategory(id) => self.selection.set_category(&id),
            Message::OpenProject(index) => {
                let manifest = self.manifest.current();
                let entries = pair_projects(
                    &self.catalogue.projects,
                    &manifest,
                    &self.config.gallery_folder,
                );
                if let Some(entry) = entries.get(index) {
                    self.selection.select(entry);
                }
            }
            Message::CloseProject => self.selection.clear(),
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select the folder containing hero/, gallery/, ...")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Scanning {}...", folder_path.display());
                    self.config.gallery_root = folder_path.clone();
                    return Task::perform(discover_async(folder_path), Message::ManifestLoaded);
                }
            }
            Message::ManifestLoaded(Ok(manifest)) => {
                self.status = format!(
                    "{} images in {} folders",
                    manifest.total_images(),
                    manifest.folders().count()
                );
                self.manifest.replace(manifest);
                self.rebuild_hero();
            }
            Message::ManifestLoaded(Err(error)) => {
                tracing::warn!(%error, "scan failed");
                self.status = format!("Scan failed: {}", error);
            }
        }

        Task::none()
    }

    /// Replace the hero slideshow with one over the current manifest
    fn rebuild_hero(&mut self) {
        let images = self
            .manifest
            .current()
            .list_images(&self.config.hero_folder)
            .to_vec();

        self.hero.teardown();
        self.hero = Slideshow::with_system_clock(images, self.config.slideshow_interval());
    }

    /// The timer only exists while the slideshow is rotating
    fn subscription(&self) -> Subscription<Message> {
        if self.hero.is_running() {
            time::every(TICK_RESOLUTION).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let manifest = self.manifest.current();
        let entries = pair_projects(
            &self.catalogue.projects,
            &manifest,
            &self.config.gallery_folder,
        );

        let header = row![
            text("Galería").size(32),
            horizontal_space(),
            text(&self.status).size(14),
            button("Open Folder")
                .on_press(Message::OpenFolder)
                .padding(10),
        ]
        .spacing(20)
        .padding(20)
        .align_y(Alignment::Center);

        let page = scrollable(
            column![
                header,
                ui::hero::view(&self.hero, &self.palette),
                ui::gallery::view(
                    &entries,
                    &self.catalogue.categories,
                    &self.selection,
                    &self.palette,
                ),
            ]
            .spacing(24),
        )
        .height(Length::Fill);

        match self.selection.selected() {
            Some(selected) => stack![page, ui::gallery::detail(selected, &self.palette)].into(),
            None => page.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    galeria::logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let print_manifest = args.iter().any(|a| a == "--print-manifest");
    let cli_root = args.iter().find(|a| !a.starts_with("--")).map(PathBuf::from);

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        let mut config = Config::default();
        config.apply_overrides(std::env::var(ROOT_ENV_VAR).ok(), None);
        config
    });
    config.apply_overrides(None, cli_root);

    if print_manifest {
        print_manifest_json(&config.gallery_root);
        return Ok(());
    }

    iced::application("Galería", Galeria::update, Galeria::view)
        .subscription(Galeria::subscription)
        .theme(Galeria::theme)
        .centered()
        .run_with(move || Galeria::new(config))
}

/// Scan `root` and dump the manifest as JSON on stdout
fn print_manifest_json(root: &Path) {
    let json = scan_manifest(root)
        .and_then(|manifest| manifest.to_json().map_err(galeria::Error::from));
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
