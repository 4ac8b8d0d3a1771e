// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for search results.
//!
//! One tile per image, in the order the API returned them. A tile shows
//! its alt text on a neutral background until the thumbnail bytes
//! arrive; tiles never reorder once rendered.

use crate::search::ImageItem;
use iced::widget::image::{Handle, Image};
use iced::widget::{container, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::collections::HashMap;

/// Number of tiles per grid row.
const TILE_COLUMNS: usize = 4;

/// Edge length of one square tile, in logical pixels.
const TILE_SIZE: f32 = 180.0;

pub fn view<'a, Message: 'a>(
    images: &'a [ImageItem],
    thumbnails: &'a HashMap<String, Handle>,
) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(10);

    for row_items in images.chunks(TILE_COLUMNS) {
        let mut row = Row::new().spacing(10);
        for item in row_items {
            row = row.push(tile(item, thumbnails.get(&item.id)));
        }
        grid = grid.push(row);
    }

    scrollable(
        Container::new(grid)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn tile<'a, Message: 'a>(item: &'a ImageItem, thumbnail: Option<&Handle>) -> Element<'a, Message> {
    match thumbnail {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .into(),
        None => {
            let alt = item.alt_text.as_deref().unwrap_or("");
            Container::new(Text::new(alt.to_string()).size(12))
                .width(Length::Fixed(TILE_SIZE))
                .height(Length::Fixed(TILE_SIZE))
                .padding(8)
                .style(placeholder_style)
                .into()
        }
    }
}

fn placeholder_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        border: iced::Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
