use std::time::Duration;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"searchbox",
		"--url",
		"http://search.local",
		"--timeout",
		"3",
		"--debounce-ms",
		"100",
		"--min-chars",
		"4",
		"--title",
		"Docs",
		"--initial-query",
		"apple",
		"--theme",
		"light",
	]);

	let mut config = RawConfig::default();
	config.api.base_url = Some("http://from-file".into());
	config.suggest.min_chars = Some(1);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.api.base_url, cli.url);
	assert_eq!(config.api.timeout_secs, Some(3));
	assert_eq!(config.suggest.debounce_ms, Some(100));
	assert_eq!(config.suggest.min_chars, Some(4));
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.theme, cli.theme);
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["searchbox"]);
	let config = RawConfig::default().resolve(&cli).unwrap();

	assert_eq!(config.base_url, "http://localhost:8080");
	assert_eq!(config.timeout, None);
	assert_eq!(config.ui.suggest_debounce, Duration::from_millis(300));
	assert_eq!(config.ui.min_suggest_chars, 2);
	assert_eq!(config.ui.title, "Search");
	assert_eq!(config.initial_query, "");
	assert_eq!(config.theme, None);
}

#[test]
fn invalid_cli_value_names_flag() {
	let cli = CliArgs::parse_from(["searchbox", "--debounce-ms", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("suggest.debounce_ms"));
	assert!(message.contains("CLI flag `--debounce-ms`"));
	assert!(message.contains("= `0`"));
}

#[test]
fn base_url_is_trimmed() {
	let cli = CliArgs::parse_from(["searchbox"]);
	let mut config = RawConfig::default();
	config.api.base_url = Some("  https://search.example.com ".into());

	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.base_url, "https://search.example.com");
}
