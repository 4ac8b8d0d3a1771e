// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a paginated photo-search client built with the Iced GUI framework.
//!
//! It queries an Unsplash-compatible photo API and renders the results as a
//! thumbnail grid with Previous/Next pagination and preset category shortcuts.

pub mod app;
pub mod config;
pub mod error;
pub mod search;
pub mod ui;
