// SPDX-License-Identifier: MPL-2.0
//! View composition for the application.
//!
//! A pure function of the application state: title, error banner (iff
//! an error is held), search bar, grid, and pager, stacked in one
//! column.

use super::{App, Message};
use crate::ui::{error_banner, gallery, pager, search_bar};
use iced::{
    alignment,
    widget::{Column, Container, Text},
    Element, Length,
};

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(16)
            .padding(16)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(Text::new("Image Search").size(28));

        if let Some(message) = &self.error_msg {
            column = column.push(error_banner::view(message));
        }

        column = column.push(search_bar::view(&self.search_bar).map(Message::SearchBar));

        if self.is_searching() {
            column = column.push(Text::new("Searching...").size(14));
        }

        column = column.push(gallery::view(&self.images, &self.thumbnails));
        column = column.push(pager::view(self.page, self.total_pages).map(Message::Pager));

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
