//! Interactive terminal UI for the search box.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, the suggestion and search
//! flows, rendering, and the widgets and styles they draw with.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod highlight;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;
pub mod view;

pub use builder::SearchUi;
pub use config::{UiConfig, UiLabels};
pub use outcome::SearchOutcome;
pub use runtime::run;
pub use state::App;
