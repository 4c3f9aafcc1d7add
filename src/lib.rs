//! Core crate exports for building and running the `searchbox` terminal
//! interface.
//!
//! The root module re-exports the UI entry points so embedders can point a
//! search box at any [`SearchApi`] without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod logging;
mod systems;
#[cfg(test)]
mod test_support;
pub mod ui;

pub use searchbox_api::{ApiError, DEFAULT_BASE_URL, HttpSearchApi, Query, SearchApi, SearchHit};
pub use ui::style::{Theme, default_theme};
pub use ui::{SearchOutcome, SearchUi, UiConfig, UiLabels, run};
