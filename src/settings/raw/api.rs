use serde::Deserialize;

use crate::cli::CliArgs;

/// `[api]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}
}

/// `[suggest]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SuggestSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) min_chars: Option<usize>,
}

impl SuggestSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
		if let Some(min_chars) = cli.min_chars {
			self.min_chars = Some(min_chars);
		}
	}
}
