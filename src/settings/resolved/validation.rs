use std::time::Duration;

use url::Url;

use super::errors::Rejection;
use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

const MIN_SUGGEST_CHARS: usize = 1;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	validate_base_url(&config.base_url, sources.source_for_base_url())?;

	if config.timeout.is_some_and(|timeout| timeout.is_zero()) {
		return Err(ConfigError::not_positive(
			"api.timeout_secs",
			sources.source_for_timeout(),
		));
	}

	if config.ui.suggest_debounce == Duration::ZERO {
		return Err(ConfigError::not_positive(
			"suggest.debounce_ms",
			sources.source_for_debounce(),
		));
	}

	if config.ui.min_suggest_chars < MIN_SUGGEST_CHARS {
		return Err(ConfigError::below_minimum(
			"suggest.min_chars",
			config.ui.min_suggest_chars,
			MIN_SUGGEST_CHARS,
			sources.source_for_min_chars(),
		));
	}

	Ok(())
}

fn validate_base_url(base_url: &str, origin: SettingSource) -> Result<(), ConfigError> {
	let rejection = match Url::parse(base_url) {
		Err(err) => Rejection::Unparsable(err.to_string()),
		Ok(url) if !matches!(url.scheme(), "http" | "https") => {
			Rejection::UnsupportedScheme(url.scheme().to_string())
		}
		Ok(_) => return Ok(()),
	};
	Err(ConfigError::base_url(base_url, origin, rejection))
}

#[cfg(test)]
mod tests {
	use searchbox::UiConfig;

	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			base_url: "http://localhost:8080".into(),
			timeout: None,
			initial_query: String::new(),
			theme: None,
			ui: UiConfig::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout: Some(Duration::ZERO),
			..config()
		};
		let sources = ConfigSources {
			timeout: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "api.timeout_secs"));
		let message = err.to_string();
		assert!(message.contains("`0`"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_min_chars() {
		let mut config = config();
		config.ui.min_suggest_chars = 0;
		let sources = ConfigSources {
			min_chars: Some(SettingSource::Environment("SEARCHBOX__SUGGEST__MIN_CHARS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "suggest.min_chars"));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_zero_debounce() {
		let mut config = config();
		config.ui.suggest_debounce = Duration::ZERO;

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "suggest.debounce_ms"));
		assert_eq!(err.origin, SettingSource::ConfigKey("suggest.debounce_ms"));
	}

	#[test]
	fn validation_rejects_non_http_urls() {
		for url in ["ftp://search.local", "not a url", "file:///tmp/index"] {
			let config = ResolvedConfig {
				base_url: url.into(),
				..config()
			};
			let err = validate(&config, &ConfigSources::default()).unwrap_err();
			assert!(matches!(err.key, "api.base_url"), "{url}");
			assert!(err.to_string().contains(url));
		}
	}

	#[test]
	fn base_url_rejections_are_specific() {
		let reject = |url: &str| {
			let config = ResolvedConfig {
				base_url: url.into(),
				..config()
			};
			validate(&config, &ConfigSources::default()).unwrap_err().rejection
		};
		assert_eq!(reject("ftp://search.local"), Rejection::UnsupportedScheme("ftp".into()));
		assert!(matches!(reject("http://"), Rejection::Unparsable(_)));
	}
}
