// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::search::SearchResult;
use crate::ui::{pager, search_bar};

/// Identifier for one issued search request. Monotonically increasing;
/// completions carrying anything but the latest issued id are stale and
/// get discarded by the update loop.
pub type RequestId = u64;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Pager(pager::Message),
    /// A search request finished, successfully or not.
    SearchCompleted {
        request: RequestId,
        result: Result<SearchResult, Error>,
    },
    /// Thumbnail bytes arrived for one grid tile.
    ThumbnailLoaded {
        id: String,
        result: Result<Vec<u8>, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// API key override; takes precedence over `ICED_GALLERY_API_KEY`
    /// and the config file.
    pub api_key: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
