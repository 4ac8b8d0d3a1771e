// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search bar, the
//! result grid, and the pager.
//!
//! The `App` struct owns the whole view state (term, images, page,
//! total page count, error message) and mutates it only inside
//! `update`, so the coupling between pagination and fetches stays in
//! one place and is easy to audit.

mod message;
mod update;
mod view;

pub use message::{Flags, Message, RequestId};

use crate::config;
use crate::search::{ImageItem, SearchClient};
use crate::ui::search_bar;
use iced::widget::image::Handle;
use iced::{window, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Fixed user-facing message for any fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching images. Try again later.";

/// Shown when no API key could be resolved at startup.
pub const MISSING_KEY_MESSAGE: &str =
    "No API key configured. Set one with --api-key or in settings.toml.";

/// Whether a search request is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
}

/// Root Iced application state.
pub struct App {
    search_bar: search_bar::State,
    /// Current result set, in API order. Replaced wholesale on every
    /// successful fetch; a failed fetch leaves it untouched.
    images: Vec<ImageItem>,
    /// Downloaded thumbnail bytes, keyed by image id. Cleared together
    /// with `images`.
    thumbnails: HashMap<String, Handle>,
    /// 1-based current page.
    page: u32,
    /// Total page count from the most recent successful response; 0
    /// until the first response arrives, which disables both pager
    /// controls.
    total_pages: u32,
    error_msg: Option<String>,
    phase: Phase,
    client: Option<SearchClient>,
    /// Id of the most recently issued search. Completions with any
    /// other id are stale and dropped.
    last_request: RequestId,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("total_pages", &self.total_pages)
            .field("image_count", &self.images.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            search_bar: search_bar::State::new(),
            images: Vec::new(),
            thumbnails: HashMap::new(),
            page: 1,
            total_pages: 0,
            error_msg: None,
            phase: Phase::Idle,
            client: None,
            last_request: 0,
        }
    }
}

/// Builds the window settings
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from `Flags` and the config file.
    ///
    /// Startup issues no fetch: the term is empty and the guard in the
    /// update loop suppresses empty-term searches, so the app starts
    /// with an empty grid.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let config = config::load_with_override(config_dir.as_deref()).unwrap_or_else(|err| {
            eprintln!("Failed to load config: {err}");
            config::Config::default()
        });

        let mut app = App::default();

        match config::resolve_api_key(flags.api_key, &config) {
            Some(api_key) => {
                match SearchClient::new(config.api_url(), api_key, config.per_page()) {
                    Ok(client) => app.client = Some(client),
                    Err(err) => {
                        eprintln!("Failed to build HTTP client: {err}");
                        app.error_msg = Some(FETCH_ERROR_MESSAGE.to_string());
                    }
                }
            }
            None => {
                eprintln!(
                    "No API key configured; pass --api-key, set {}, or add api_key to settings.toml",
                    config::API_KEY_ENV_VAR
                );
                app.error_msg = Some(MISSING_KEY_MESSAGE.to_string());
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Image Search".to_string()
    }

    /// True while a search request is in flight; the view shows the
    /// searching indicator exactly when this holds.
    pub(crate) fn is_searching(&self) -> bool {
        self.phase == Phase::Searching
    }

    fn theme(&self) -> Theme {
        <Theme as iced::theme::Base>::default(iced::theme::Mode::default())
    }
}
