use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Base URL: {}", config.base_url);
	match config.timeout {
		Some(timeout) => {
			let _ = writeln!(out, "  Request timeout: {}s", timeout.as_secs());
		}
		None => {
			let _ = writeln!(out, "  Request timeout: none");
		}
	}
	let _ = writeln!(
		out,
		"  Suggestion debounce: {}ms",
		config.ui.suggest_debounce.as_millis()
	);
	let _ = writeln!(out, "  Suggestion min chars: {}", config.ui.min_suggest_chars);
	let _ = writeln!(out, "  Prompt title: {}", config.ui.title);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	out
}
