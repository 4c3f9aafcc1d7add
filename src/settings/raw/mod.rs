use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use searchbox::{DEFAULT_BASE_URL, UiConfig};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod api;
mod ui;

use api::{ApiSection, SuggestSection};
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	suggest: SuggestSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.suggest.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.url.is_some(),
				self.api.base_url.is_some(),
				"SEARCHBOX__API__BASE_URL",
				"--url",
				"api.base_url",
			),
			timeout: detect_source(
				cli.timeout.is_some(),
				self.api.timeout_secs.is_some(),
				"SEARCHBOX__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			debounce: detect_source(
				cli.debounce_ms.is_some(),
				self.suggest.debounce_ms.is_some(),
				"SEARCHBOX__SUGGEST__DEBOUNCE_MS",
				"--debounce-ms",
				"suggest.debounce_ms",
			),
			min_chars: detect_source(
				cli.min_chars.is_some(),
				self.suggest.min_chars.is_some(),
				"SEARCHBOX__SUGGEST__MIN_CHARS",
				"--min-chars",
				"suggest.min_chars",
			),
		};

		let mut ui = UiConfig::default();
		if let Some(title) = self.ui.title {
			ui.title = title;
		}
		if let Some(debounce) = self.suggest.debounce_ms {
			ui.suggest_debounce = Duration::from_millis(debounce);
		}
		if let Some(min_chars) = self.suggest.min_chars {
			ui.min_suggest_chars = min_chars;
		}

		let config = ResolvedConfig {
			base_url: self
				.api
				.base_url
				.map(|url| url.trim().to_string())
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			timeout: self.api.timeout_secs.map(Duration::from_secs),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme: self.ui.theme,
			ui,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
