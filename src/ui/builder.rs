use std::sync::Arc;

use anyhow::Result;
use searchbox_api::SearchApi;

use super::App;
use super::config::UiConfig;
use super::outcome::SearchOutcome;
use super::style::{self, Theme};

/// Configure and run the interactive search box.
pub struct SearchUi {
	api: Arc<dyn SearchApi>,
	ui_config: Option<UiConfig>,
	initial_query: Option<String>,
	theme: Option<Theme>,
}

impl SearchUi {
	/// Create a search box backed by `api`.
	pub fn new(api: Arc<dyn SearchApi>) -> Self {
		Self {
			api,
			ui_config: None,
			initial_query: None,
			theme: None,
		}
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	/// Start with `query` in the input field and search for it immediately.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Unknown names keep the default theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	fn into_app<'a>(self) -> App<'a> {
		let mut app = App::new(self.api, self.ui_config.unwrap_or_default());
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query {
			app.set_query(query);
		}
		app
	}

	/// Run the interactive search box with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.into_app().run()
	}
}
