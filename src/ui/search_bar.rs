// SPDX-License-Identifier: MPL-2.0
//! Search input and preset category shortcuts.
//!
//! The term is explicit state updated on every keystroke and read back
//! at dispatch time, so the application never has to reach into a
//! widget handle to learn what the user typed.

use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Row, Text},
    Element, Length,
};

/// Preset search categories offered as one-click shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Nature,
    Birds,
    Cars,
    Dogs,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Nature,
        Category::Birds,
        Category::Cars,
        Category::Dogs,
    ];

    /// Button label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Category::Nature => "Nature",
            Category::Birds => "Birds",
            Category::Cars => "Cars",
            Category::Dogs => "Dogs",
        }
    }

    /// Query term sent to the API when this category is clicked.
    pub fn query(self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Birds => "birds",
            Category::Cars => "cars",
            Category::Dogs => "dogs",
        }
    }
}

/// Search bar state.
#[derive(Debug, Clone, Default)]
pub struct State {
    term: String,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current search term.
    pub fn term(&self) -> &str {
        &self.term
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TermChanged(String),
    Submitted,
    CategoryPressed(Category),
}

/// What the application should do after a search bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// A new search was requested with the term now held in [`State`].
    /// The application applies the empty-term guard before fetching.
    SearchRequested,
}

/// Process a search bar message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TermChanged(value) => {
            state.term = value;
            Event::None
        }
        Message::Submitted => Event::SearchRequested,
        Message::CategoryPressed(category) => {
            // The shortcut overwrites whatever was typed before.
            state.term = category.query().to_string();
            Event::SearchRequested
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let input = text_input("Type something to search...", &state.term)
        .on_input(Message::TermChanged)
        .on_submit(Message::Submitted)
        .padding(10)
        .size(16)
        .width(Length::Fixed(400.0));

    let mut categories = Row::new().spacing(10);
    for category in Category::ALL {
        categories = categories.push(
            button(Text::new(category.label()))
                .on_press(Message::CategoryPressed(category))
                .padding([6, 12]),
        );
    }

    Column::new()
        .spacing(12)
        .align_x(Horizontal::Center)
        .push(input)
        .push(categories)
        .into()
}
