/// Project gallery view: filter buttons, card grid, detail overlay
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, text, Column, Row,
};
use iced::{Color, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use galeria::gallery::{Category, GalleryEntry, GallerySelection, SelectedProject};
use galeria::placeholder::{PlaceholderPalette, EMPTY_FOLDER_HINT};
use galeria::ImageRecord;

use super::gradient_box;
use crate::Message;

const CARD_WIDTH: f32 = 300.0;
const CARD_HEIGHT: f32 = 225.0;
const DETAIL_HEIGHT: f32 = 420.0;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

pub fn view<'a>(
    entries: &[GalleryEntry<'_>],
    categories: &'a [Category],
    selection: &GallerySelection,
    palette: &PlaceholderPalette,
) -> Element<'a, Message> {
    let filters = Row::with_children(categories.iter().map(|category| -> Element<'a, Message> {
        let style: ButtonStyle = if selection.is_active(&category.id) {
            button::primary
        } else {
            button::secondary
        };
        button(text(category.label.as_str()))
            .on_press(Message::SelectCategory(category.id.clone()))
            .style(style)
            .padding([10, 20])
            .into()
    }))
    .spacing(12);

    let visible = selection.visible(entries);

    let grid: Element<'a, Message> = if visible.is_empty() {
        container(text("No hay proyectos en esta categoría").size(16))
            .padding(40)
            .into()
    } else {
        let cards = visible
            .into_iter()
            .map(|entry| card(entry, palette))
            .collect();
        Wrap::with_elements(cards).into()
    };

    column![
        text("Nuestros Trabajos Destacados").size(36),
        filters,
        grid,
    ]
    .spacing(24)
    .padding(24)
    .into()
}

fn card<'a>(entry: &GalleryEntry<'_>, palette: &PlaceholderPalette) -> Element<'a, Message> {
    let picture = picture(
        entry.image,
        palette,
        entry.index,
        Length::Fixed(CARD_WIDTH),
        CARD_HEIGHT,
    );

    let info = column![
        picture,
        text(entry.project.category.to_uppercase()).size(12),
        text(entry.project.title.clone()).size(18),
        text(entry.project.location.clone()).size(13),
    ]
    .spacing(6)
    .width(Length::Fixed(CARD_WIDTH));

    container(
        button(info)
            .on_press(Message::OpenProject(entry.index))
            .style(button::text),
    )
    .padding(8)
    .into()
}

/// Modal with the selected project; clicking the backdrop closes it
pub fn detail<'a>(selected: &SelectedProject, palette: &PlaceholderPalette) -> Element<'a, Message> {
    let project = &selected.project;

    let panel = container(
        Column::new()
            .push(picture(
                selected.image.as_ref(),
                palette,
                selected.index,
                Length::Fill,
                DETAIL_HEIGHT,
            ))
            .push(text(project.category.to_uppercase()).size(14))
            .push(text(project.title.clone()).size(30))
            .push(text(project.location.clone()).size(14))
            .push(text(project.description.clone()).size(16))
            .push(
                button(text("Cerrar"))
                    .on_press(Message::CloseProject)
                    .padding([10, 20]),
            )
            .spacing(12),
    )
    .padding(24)
    .max_width(900.0)
    .style(container::rounded_box);

    opaque(
        mouse_area(center(opaque(panel)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }))
        .on_press(Message::CloseProject),
    )
}

/// The paired image, or a placeholder swatch when there is none
fn picture<'a>(
    record: Option<&ImageRecord>,
    palette: &PlaceholderPalette,
    index: usize,
    width: Length,
    height: f32,
) -> Element<'a, Message> {
    match record.and_then(|r| r.source.as_path()) {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(width)
            .height(Length::Fixed(height))
            .into(),
        None => gradient_box(
            palette.for_index(index),
            text(EMPTY_FOLDER_HINT).size(14),
            width,
            Length::Fixed(height),
        )
        .into(),
    }
}
