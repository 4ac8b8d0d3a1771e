// SPDX-License-Identifier: MPL-2.0
//! Error banner shown when the last fetch failed.
//!
//! Rendered if and only if the application holds an error message; it
//! clears only when the next fetch attempt starts, not on its own.

use iced::widget::{text, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

const ERROR_COLOR: Color = Color::from_rgb(0.8, 0.15, 0.15);

pub fn view<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    let banner = Text::new(message)
        .size(14)
        .style(|_theme: &Theme| text::Style {
            color: Some(ERROR_COLOR),
        });

    Container::new(banner)
        .width(Length::Fill)
        .padding(8)
        .align_x(alignment::Horizontal::Center)
        .into()
}
