// SPDX-License-Identifier: MPL-2.0
//! Previous/Next pagination controls.
//!
//! Until the first successful fetch, `total_pages` is 0, which disables
//! both controls. The application re-checks the same bounds in its
//! update loop before mutating the page, so a stray click from a stale
//! render cannot push the page out of range.

use iced::{
    widget::{button, Row, Text},
    Element,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PreviousPressed,
    NextPressed,
}

/// True when a previous page exists.
pub fn has_previous(page: u32) -> bool {
    page > 1
}

/// True when the API reported pages beyond the current one.
pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

pub fn view(page: u32, total_pages: u32) -> Element<'static, Message> {
    let mut row = Row::new().spacing(10);

    if has_previous(page) {
        row = row.push(
            button(Text::new("Previous"))
                .on_press(Message::PreviousPressed)
                .padding([6, 12]),
        );
    }

    if has_next(page, total_pages) {
        row = row.push(
            button(Text::new("Next"))
                .on_press(Message::NextPressed)
                .padding([6, 12]),
        );
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_previous() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
    }

    #[test]
    fn last_page_has_no_next() {
        assert!(!has_next(10, 10));
        assert!(has_next(9, 10));
    }

    #[test]
    fn zero_total_pages_disables_both_controls() {
        // State before the first successful fetch.
        assert!(!has_previous(1));
        assert!(!has_next(1, 0));
    }

    #[test]
    fn middle_page_enables_both_controls() {
        assert!(has_previous(5));
        assert!(has_next(5, 10));
    }
}
