use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use searchbox::ui::style;
use searchbox::{HttpSearchApi, SearchOutcome, SearchUi, UiConfig};
use tracing::{info, warn};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.search_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let ResolvedConfig {
			base_url,
			timeout,
			initial_query,
			theme,
			ui,
		} = config;

		let builder = Self::new(&base_url, timeout)?
			.with_ui_config(ui)
			.with_initial_query(initial_query)
			.with_theme(theme);

		Ok(builder.finish())
	}

	fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
		let api = HttpSearchApi::new(base_url, timeout)
			.with_context(|| format!("failed to create HTTP client for {base_url}"))?;
		info!(base_url = api.base_url(), ?timeout, "search service configured");
		let search_ui = SearchUi::new(Arc::new(api));
		Ok(Self { search_ui })
	}

	fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.search_ui = self.search_ui.with_ui_config(config);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.trim().is_empty() {
			self.search_ui = self.search_ui.with_initial_query(query);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			if style::by_name(&theme).is_none() {
				warn!(%theme, "unknown theme; using the default");
			}
			self.search_ui = self.search_ui.with_theme_name(&theme);
		}
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}
