/// Hero slideshow view
use iced::widget::{button, column, container, image, row, text, Row};
use iced::{Alignment, ContentFit, Element, Length};

use galeria::placeholder::PlaceholderPalette;
use galeria::slideshow::Slideshow;

use super::gradient_box;
use crate::Message;

const HERO_HEIGHT: f32 = 420.0;

pub fn view<'a>(slideshow: &'a Slideshow, palette: &PlaceholderPalette) -> Element<'a, Message> {
    // Only local files can be shown; anything else gets the fallback
    let stage: Element<'a, Message> = match slideshow.current().and_then(|r| r.source.as_path()) {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .into(),
        None => gradient_box(
            palette.hero(),
            text("Cocinas de Alto Diseño").size(40),
            Length::Fill,
            Length::Fixed(HERO_HEIGHT),
        )
        .into(),
    };

    if slideshow.len() < 2 {
        return stage;
    }

    let current = slideshow.current_index();
    let dots = Row::with_children((0..slideshow.len()).map(|i| -> Element<'a, Message> {
        let marker = if current == Some(i) { "●" } else { "○" };
        button(text(marker).size(14))
            .on_press(Message::JumpTo(i))
            .style(button::text)
            .into()
    }))
    .spacing(4);

    let controls = row![
        button(text("‹").size(24)).on_press(Message::PreviousSlide).style(button::text),
        dots,
        button(text("›").size(24)).on_press(Message::NextSlide).style(button::text),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    column![
        stage,
        container(controls).center_x(Length::Fill),
    ]
    .spacing(8)
    .into()
}
