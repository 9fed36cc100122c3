/// Viewer widgets
///
/// - `hero.rs` - the hero slideshow with prev/next and position dots
/// - `gallery.rs` - category buttons, project grid and the detail overlay

pub mod gallery;
pub mod hero;

use iced::gradient::Linear;
use iced::widget::container::{self, Container};
use iced::{Background, Color, Element, Length, Radians};

use galeria::placeholder::Swatch;

use crate::Message;

/// Container painted with a placeholder swatch, content centered
pub fn gradient_box<'a>(
    swatch: Swatch,
    content: impl Into<Element<'a, Message>>,
    width: impl Into<Length>,
    height: impl Into<Length>,
) -> Container<'a, Message> {
    let [r, g, b] = swatch.start_rgb_f32();
    let start = Color::from_rgb(r, g, b);
    let [r, g, b] = swatch.end_rgb_f32();
    let end = Color::from_rgb(r, g, b);

    // Top-left to bottom-right, like the site's `bg-gradient-to-br`
    let gradient = Linear::new(Radians(std::f32::consts::FRAC_PI_4))
        .add_stop(0.0, start)
        .add_stop(1.0, end);

    iced::widget::container(content)
        .center_x(width)
        .center_y(height)
        .style(move |_theme| container::Style {
            background: Some(Background::Gradient(gradient.into())),
            text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.6)),
            ..container::Style::default()
        })
}
