// SPDX-License-Identifier: MPL-2.0
//! Update logic: search triggers, pagination bounds, and response
//! sequencing.
//!
//! All three triggers (submit, category click, pager click) funnel into
//! `start_search`, which applies the empty-term guard before touching
//! any state and tags every outbound request with a fresh id so stale
//! completions cannot overwrite newer ones.

use super::{App, Message, Phase, RequestId, FETCH_ERROR_MESSAGE};
use crate::error::Error;
use crate::search::{SearchQuery, SearchResult};
use crate::ui::{pager, search_bar};
use iced::widget::image::Handle;
use iced::Task;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchBar(msg) => match search_bar::update(&mut self.search_bar, msg) {
                search_bar::Event::None => Task::none(),
                // A new search always restarts from the first page.
                search_bar::Event::SearchRequested => self.start_search(1),
            },
            Message::Pager(pager::Message::PreviousPressed) => {
                // Re-check bounds: a click from a stale render must not
                // push the page out of range.
                if pager::has_previous(self.page) {
                    self.start_search(self.page - 1)
                } else {
                    Task::none()
                }
            }
            Message::Pager(pager::Message::NextPressed) => {
                if pager::has_next(self.page, self.total_pages) {
                    self.start_search(self.page + 1)
                } else {
                    Task::none()
                }
            }
            Message::SearchCompleted { request, result } => {
                self.apply_search_result(request, result)
            }
            Message::ThumbnailLoaded { id, result } => {
                match result {
                    Ok(bytes) => {
                        // Ignore thumbnails for a result set that has
                        // since been replaced.
                        if self.images.iter().any(|item| item.id == id) {
                            self.thumbnails.insert(id, Handle::from_bytes(bytes));
                        }
                    }
                    Err(err) => eprintln!("Failed to load thumbnail {id}: {err}"),
                }
                Task::none()
            }
        }
    }

    /// Issues a fetch for `page` with the current term.
    ///
    /// No-op when the term is empty or whitespace (no request, no state
    /// change) or when no client is available. Otherwise the error
    /// banner clears immediately; it only comes back if this fetch
    /// fails.
    fn start_search(&mut self, page: u32) -> Task<Message> {
        let term = self.search_bar.term().trim().to_string();
        if term.is_empty() {
            return Task::none();
        }
        let Some(client) = self.client.clone() else {
            return Task::none();
        };

        self.page = page;
        self.error_msg = None;
        self.phase = Phase::Searching;
        self.last_request += 1;
        let request = self.last_request;

        let query = SearchQuery { term, page };
        Task::perform(
            async move { client.fetch_page(&query).await },
            move |result| Message::SearchCompleted { request, result },
        )
    }

    fn apply_search_result(
        &mut self,
        request: RequestId,
        result: Result<SearchResult, Error>,
    ) -> Task<Message> {
        if request != self.last_request {
            // A newer search was issued while this one was in flight.
            return Task::none();
        }

        self.phase = Phase::Idle;
        match result {
            Ok(result) => {
                self.error_msg = None;
                self.total_pages = result.total_pages;
                self.thumbnails.clear();
                self.images = result.images;
                self.fetch_thumbnails()
            }
            Err(err) => {
                eprintln!("Error fetching images: {err}");
                self.error_msg = Some(FETCH_ERROR_MESSAGE.to_string());
                Task::none()
            }
        }
    }

    /// Spawns one download task per image in the current result set.
    fn fetch_thumbnails(&self) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            return Task::none();
        };

        let tasks = self.images.iter().map(|item| {
            let client = client.clone();
            let id = item.id.clone();
            let url = item.thumbnail_url.clone();
            Task::perform(
                async move { client.download_thumbnail(&url).await },
                move |result| Message::ThumbnailLoaded {
                    id: id.clone(),
                    result,
                },
            )
        });
        Task::batch(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{ImageItem, SearchClient};

    fn test_app() -> App {
        let mut app = App::default();
        app.client = Some(
            SearchClient::new("https://photos.example/search", "test-key", 24)
                .expect("client construction should succeed"),
        );
        app
    }

    fn set_term(app: &mut App, term: &str) {
        let _ = app.update(Message::SearchBar(search_bar::Message::TermChanged(
            term.to_string(),
        )));
    }

    fn item(id: &str) -> ImageItem {
        ImageItem {
            id: id.to_string(),
            thumbnail_url: format!("https://images.example/{id}?w=400"),
            alt_text: None,
        }
    }

    fn page_of(count: usize, total_pages: u32) -> SearchResult {
        SearchResult {
            images: (0..count).map(|i| item(&format!("img-{i}"))).collect(),
            total_pages,
        }
    }

    #[test]
    fn submit_resets_page_to_first() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        app.page = 5;
        app.total_pages = 10;

        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        assert_eq!(app.page, 1);
        assert_eq!(app.phase, Phase::Searching);
        assert_eq!(app.last_request, 1);
    }

    #[test]
    fn empty_term_submit_changes_nothing() {
        let mut app = test_app();
        app.images = vec![item("old")];
        app.page = 3;
        app.total_pages = 7;
        app.error_msg = Some(FETCH_ERROR_MESSAGE.to_string());

        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        assert_eq!(app.page, 3);
        assert_eq!(app.total_pages, 7);
        assert_eq!(app.images.len(), 1);
        assert_eq!(app.error_msg.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(app.last_request, 0);
        assert_eq!(app.phase, Phase::Idle);
    }

    #[test]
    fn whitespace_term_submit_changes_nothing() {
        let mut app = test_app();
        set_term(&mut app, "   ");

        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        assert_eq!(app.last_request, 0);
        assert_eq!(app.phase, Phase::Idle);
    }

    #[test]
    fn category_click_overwrites_term_and_resets_page() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        app.page = 3;
        app.total_pages = 10;

        let _ = app.update(Message::SearchBar(search_bar::Message::CategoryPressed(
            search_bar::Category::Nature,
        )));

        assert_eq!(app.search_bar.term(), "nature");
        assert_eq!(app.page, 1);
        assert_eq!(app.last_request, 1);
    }

    #[test]
    fn successful_fetch_replaces_results_wholesale() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        app.images = vec![item("stale")];
        app.thumbnails
            .insert("stale".to_string(), Handle::from_bytes(vec![0u8]));

        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Ok(page_of(24, 10)),
        });

        assert_eq!(app.images.len(), 24);
        assert_eq!(app.total_pages, 10);
        assert!(app.thumbnails.is_empty());
        assert_eq!(app.phase, Phase::Idle);
        assert!(!pager::has_previous(app.page));
        assert!(pager::has_next(app.page, app.total_pages));
    }

    #[test]
    fn failed_fetch_sets_message_and_keeps_previous_results() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Ok(page_of(24, 10)),
        });

        // Next page fails.
        let _ = app.update(Message::Pager(pager::Message::NextPressed));
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Err(Error::Http("connection reset".to_string())),
        });

        assert_eq!(app.error_msg.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(app.images.len(), 24);
        assert_eq!(app.total_pages, 10);
    }

    #[test]
    fn successful_fetch_after_failure_clears_error() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Err(Error::Http("timeout".to_string())),
        });
        assert!(app.error_msg.is_some());

        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        // Error clears as soon as the new fetch is issued.
        assert!(app.error_msg.is_none());

        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Ok(page_of(5, 1)),
        });
        assert!(app.error_msg.is_none());
        assert_eq!(app.images.len(), 5);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let first_request = app.last_request;

        // A second search goes out before the first completes.
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        assert_eq!(app.last_request, first_request + 1);

        // The older response arrives last and must not apply.
        let _ = app.update(Message::SearchCompleted {
            request: first_request,
            result: Ok(page_of(3, 99)),
        });

        assert!(app.images.is_empty());
        assert_eq!(app.total_pages, 0);
        assert_eq!(app.phase, Phase::Searching);

        // The latest response applies normally.
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Ok(page_of(24, 10)),
        });
        assert_eq!(app.images.len(), 24);
        assert_eq!(app.total_pages, 10);
        assert_eq!(app.phase, Phase::Idle);
    }

    #[test]
    fn next_on_last_page_is_noop() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        app.page = 10;
        app.total_pages = 10;

        let _ = app.update(Message::Pager(pager::Message::NextPressed));

        assert_eq!(app.page, 10);
        assert_eq!(app.last_request, 0);
    }

    #[test]
    fn previous_on_first_page_is_noop() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        app.page = 1;
        app.total_pages = 10;

        let _ = app.update(Message::Pager(pager::Message::PreviousPressed));

        assert_eq!(app.page, 1);
        assert_eq!(app.last_request, 0);
    }

    #[test]
    fn pager_keeps_current_term() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Ok(page_of(24, 10)),
        });

        let _ = app.update(Message::Pager(pager::Message::NextPressed));

        assert_eq!(app.page, 2);
        assert_eq!(app.search_bar.term(), "dogs");
        assert_eq!(app.last_request, 2);
    }

    #[test]
    fn empty_result_set_renders_empty_grid_without_error() {
        let mut app = test_app();
        set_term(&mut app, "zzzznoresults");
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Ok(page_of(0, 0)),
        });

        assert!(app.images.is_empty());
        assert_eq!(app.total_pages, 0);
        assert!(app.error_msg.is_none());
        assert!(!pager::has_next(app.page, app.total_pages));
    }

    #[test]
    fn thumbnail_for_replaced_results_is_ignored() {
        let mut app = test_app();
        set_term(&mut app, "dogs");
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Ok(page_of(2, 1)),
        });

        // Bytes arrive for an id that is no longer displayed.
        let _ = app.update(Message::ThumbnailLoaded {
            id: "gone".to_string(),
            result: Ok(vec![1, 2, 3]),
        });
        assert!(!app.thumbnails.contains_key("gone"));

        // Bytes for a displayed id are kept.
        let _ = app.update(Message::ThumbnailLoaded {
            id: "img-0".to_string(),
            result: Ok(vec![1, 2, 3]),
        });
        assert!(app.thumbnails.contains_key("img-0"));
    }

    #[test]
    fn searching_indicator_tracks_in_flight_request() {
        let mut app = test_app();
        assert!(!app.is_searching());

        set_term(&mut app, "dogs");
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        assert!(app.is_searching());

        // A stale completion leaves the indicator on: the latest
        // request is still in flight.
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request - 1,
            result: Ok(page_of(3, 1)),
        });
        assert!(app.is_searching());

        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Ok(page_of(24, 10)),
        });
        assert!(!app.is_searching());

        // Failures also settle the indicator.
        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));
        let _ = app.update(Message::SearchCompleted {
            request: app.last_request,
            result: Err(Error::Http("timeout".to_string())),
        });
        assert!(!app.is_searching());
    }

    #[test]
    fn missing_client_suppresses_search() {
        let mut app = App::default();
        set_term(&mut app, "dogs");

        let _ = app.update(Message::SearchBar(search_bar::Message::Submitted));

        assert_eq!(app.last_request, 0);
        assert_eq!(app.phase, Phase::Idle);
    }
}
