// SPDX-License-Identifier: MPL-2.0
//! UI components composed by the application view.

pub mod error_banner;
pub mod gallery;
pub mod pager;
pub mod search_bar;
