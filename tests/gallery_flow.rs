use galeria::assets::{folders, scan_manifest, SharedManifest};
use galeria::gallery::{pair_projects, GallerySelection, ProjectCatalogue};
use galeria::slideshow::{ManualClock, Slideshow, SlideshowPhase};
use std::fs;
use std::path::Path;
use std::time::Duration;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

#[test]
fn test_folder_tree_drives_both_controllers() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "hero/02-isla.jpg");
    touch(dir.path(), "hero/01-entrada.jpg");
    touch(dir.path(), "gallery/g2.png");
    touch(dir.path(), "gallery/g1.png");
    touch(dir.path(), "gallery/.DS_Store");

    let manifest = scan_manifest(dir.path()).unwrap();

    // Hero slideshow rotates over the sorted hero folder
    let clock = ManualClock::new();
    let mut hero = Slideshow::new(
        manifest.list_images(folders::HERO).to_vec(),
        Duration::from_secs(5),
        clock.clone(),
    );
    assert_eq!(hero.phase(), SlideshowPhase::Rotating);
    assert_eq!(hero.current().unwrap().identifier, "01-entrada");

    clock.advance(Duration::from_secs(5));
    hero.tick();
    assert_eq!(hero.current().unwrap().identifier, "02-isla");

    hero.teardown();
    clock.advance(Duration::from_secs(60));
    assert_eq!(hero.tick(), 0);
    assert_eq!(hero.current().unwrap().identifier, "02-isla");

    // Six built-in projects against two gallery images
    let catalogue = ProjectCatalogue::builtin();
    let entries = pair_projects(&catalogue.projects, &manifest, folders::GALLERY);
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0].image.unwrap().identifier, "g1");
    assert_eq!(entries[1].image.unwrap().identifier, "g2");
    assert!(entries[2..].iter().all(|e| e.image.is_none()));

    let mut selection = GallerySelection::new();
    selection.set_category("modernas");
    let visible = selection.visible(&entries);
    let titles: Vec<&str> = visible.iter().map(|e| e.project.title.as_str()).collect();
    assert_eq!(titles, vec!["Cocina Minimalista Premium", "Cocina de Diseño Italiano"]);

    selection.select(visible[0]);
    selection.set_category("clásicas");
    let selected = selection.selected().unwrap();
    assert_eq!(selected.project.title, "Cocina Minimalista Premium");
    assert_eq!(selected.image.as_ref().unwrap().identifier, "g1");
}

#[test]
fn test_empty_tree_degrades_to_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = scan_manifest(dir.path()).unwrap();

    let hero = Slideshow::new(
        manifest.list_images(folders::HERO).to_vec(),
        Duration::from_secs(5),
        ManualClock::new(),
    );
    assert_eq!(hero.phase(), SlideshowPhase::Empty);

    let catalogue = ProjectCatalogue::builtin();
    let entries = pair_projects(&catalogue.projects, &manifest, folders::GALLERY);
    assert!(entries.iter().all(|e| e.image.is_none()));
}

#[test]
fn test_rescan_swaps_manifest() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "hero/a.jpg");

    let shared = SharedManifest::new(scan_manifest(dir.path()).unwrap());
    let old = shared.current();

    touch(dir.path(), "hero/b.jpg");
    shared.replace(scan_manifest(dir.path()).unwrap());

    assert_eq!(old.count(folders::HERO), 1);
    assert_eq!(shared.current().count(folders::HERO), 2);
}
