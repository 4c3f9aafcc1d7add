use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["searchbox"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.url.is_none());
	assert!(!parsed.no_config);
}

#[test]
fn tuning_flags_are_parsed() {
	let parsed = CliArgs::parse_from([
		"searchbox",
		"--url",
		"http://search.local:9000",
		"--debounce-ms",
		"150",
		"--min-chars",
		"3",
		"--timeout",
		"5",
		"-q",
		"apple pie",
		"-o",
		"json",
	]);
	assert_eq!(parsed.url.as_deref(), Some("http://search.local:9000"));
	assert_eq!(parsed.debounce_ms, Some(150));
	assert_eq!(parsed.min_chars, Some(3));
	assert_eq!(parsed.timeout, Some(5));
	assert_eq!(parsed.initial_query.as_deref(), Some("apple pie"));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn config_flag_is_repeatable() {
	let parsed = CliArgs::parse_from(["searchbox", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}
